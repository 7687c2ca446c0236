//! Incremental frame decoder for the chunked search response.

use shoplens_core::{RawChunk, StreamChunk};

/// Incremental decoder that turns raw response bytes into stream chunks.
///
/// The endpoint frames chunks as server-sent events: `data: <json>` lines
/// carry payloads, `event:` lines name them (an `end` event closes the
/// stream), blank lines separate events. Bare JSON lines are accepted as
/// well. Bytes may arrive split at any point, so partial lines are buffered
/// across pushes.
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    // Raw bytes: a read boundary may fall inside a multi-byte character,
    // so conversion to text waits until a full line is extracted.
    buffer: Vec<u8>,
    ended: bool,
    frames_dropped: usize,
}

impl ChunkDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a slab of bytes; returns every chunk completed by it, in order.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<StreamChunk> {
        if self.ended {
            return Vec::new();
        }
        self.buffer.extend_from_slice(bytes);

        let mut chunks = Vec::new();
        while !self.ended {
            let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') else {
                break;
            };
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(chunk) = self.decode_line(&String::from_utf8_lossy(&line)) {
                chunks.push(chunk);
            }
        }
        chunks
    }

    /// Drain any trailing frame that arrived without a final newline.
    pub fn finish(&mut self) -> Vec<StreamChunk> {
        if self.ended || self.buffer.is_empty() {
            return Vec::new();
        }
        let line = std::mem::take(&mut self.buffer);
        self.decode_line(&String::from_utf8_lossy(&line))
            .into_iter()
            .collect()
    }

    /// Whether an explicit end event has been seen.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Count of undecodable frames that were dropped.
    pub fn frames_dropped(&self) -> usize {
        self.frames_dropped
    }

    fn decode_line(&mut self, line: &str) -> Option<StreamChunk> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(':') {
            return None;
        }
        if let Some(event) = line.strip_prefix("event:") {
            if event.trim() == "end" {
                self.ended = true;
            }
            return None;
        }

        let payload = line.strip_prefix("data:").map(str::trim).unwrap_or(line);
        match serde_json::from_str::<RawChunk>(payload) {
            // An empty record classifies to nothing and is ignored.
            Ok(raw) => raw.classify(),
            Err(_) => {
                self.frames_dropped += 1;
                None
            }
        }
    }
}
