//! Streaming search client and the chunk stream it produces.

use std::collections::VecDeque;
use std::fmt::Display;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use shoplens_core::StreamChunk;

use crate::decoder::ChunkDecoder;
use crate::error::StreamError;

#[cfg(target_arch = "wasm32")]
use shoplens_core::SearchRequest;

/// Default endpoint for the remote search service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/search/stream";

/// A lazy, finite, non-restartable stream of decoded chunks.
///
/// Chunks are yielded in the exact order the remote stream delivers them.
/// A transport failure mid-iteration does not surface as a stream item:
/// the stream simply ends, and the failure is recorded for the caller to
/// log. Partial results decoded before the failure are still delivered.
pub struct ChunkStream<S> {
    inner: S,
    decoder: ChunkDecoder,
    ready: VecDeque<StreamChunk>,
    done: bool,
    failure: Option<StreamError>,
}

impl<S, E> ChunkStream<S>
where
    S: Stream<Item = Result<Vec<u8>, E>> + Unpin,
    E: Display,
{
    /// Wrap a raw byte stream.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            decoder: ChunkDecoder::new(),
            ready: VecDeque::new(),
            done: false,
            failure: None,
        }
    }

    /// The transport failure that ended the stream early, if any.
    pub fn failure(&self) -> Option<&StreamError> {
        self.failure.as_ref()
    }

    /// Count of undecodable frames dropped so far.
    pub fn frames_dropped(&self) -> usize {
        self.decoder.frames_dropped()
    }
}

impl<S, E> Stream for ChunkStream<S>
where
    S: Stream<Item = Result<Vec<u8>, E>> + Unpin,
    E: Display,
{
    type Item = StreamChunk;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(chunk) = this.ready.pop_front() {
                return Poll::Ready(Some(chunk));
            }
            if this.done {
                return Poll::Ready(None);
            }
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    this.ready.extend(this.decoder.push(&bytes));
                }
                Poll::Ready(Some(Err(e))) => {
                    // Terminal for this search attempt; whatever decoded
                    // before the failure stays applied.
                    this.failure = Some(StreamError::Transport(e.to_string()));
                    this.done = true;
                }
                Poll::Ready(None) => {
                    this.ready.extend(this.decoder.finish());
                    this.done = true;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Issues one streaming request per search and yields decoded chunks.
///
/// No retry is attempted on failure; a failed open is terminal for that
/// search attempt.
pub struct StreamingSearchClient {
    endpoint: String,
}

impl StreamingSearchClient {
    /// Create a client against an explicit endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// The chunk stream produced by an opened HTTP request.
#[cfg(target_arch = "wasm32")]
pub type HttpChunkStream =
    ChunkStream<futures::stream::LocalBoxStream<'static, Result<Vec<u8>, String>>>;

#[cfg(target_arch = "wasm32")]
impl StreamingSearchClient {
    /// Create a client from Spin application variables, falling back to the
    /// compiled default endpoint.
    pub fn from_variables() -> Self {
        let endpoint = spin_sdk::variables::get("search_endpoint")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// Open the streaming request for one search.
    ///
    /// Returns `Ok(None)` without touching the network when the query text
    /// is empty or whitespace-only.
    pub async fn open(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<HttpChunkStream>, StreamError> {
        use futures::StreamExt;
        use spin_sdk::http::{IncomingResponse, Method, Request};

        if !request.is_searchable() {
            return Ok(None);
        }

        let body = serde_json::to_vec(request)
            .map_err(|e| StreamError::Request(e.to_string()))?;
        let req = Request::builder()
            .method(Method::Post)
            .uri(&self.endpoint)
            .header("content-type", "application/json")
            .header("accept", "text/event-stream")
            .body(body)
            .build();

        let resp: IncomingResponse = spin_sdk::http::send(req)
            .await
            .map_err(|e| StreamError::Request(e.to_string()))?;

        let status = resp.status();
        if status >= 400 {
            return Err(StreamError::Http {
                status,
                url: self.endpoint.clone(),
            });
        }

        let bytes = resp
            .take_body_stream()
            .map(|item| item.map_err(|e| format!("{:?}", e)))
            .boxed_local();
        Ok(Some(ChunkStream::new(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::{stream, StreamExt};

    fn byte_stream(slabs: Vec<Result<&'static [u8], &'static str>>) -> ChunkStream<
        impl Stream<Item = Result<Vec<u8>, &'static str>> + Unpin,
    > {
        ChunkStream::new(stream::iter(
            slabs.into_iter().map(|r| r.map(|b| b.to_vec())),
        ))
    }

    #[test]
    fn test_chunks_yielded_in_arrival_order() {
        let mut chunks = byte_stream(vec![
            Ok(b"data: {\"query\":{\"product_category\":\"shoes\"}}\n"),
            Ok(b"data: {\"available_brands\":[\"Nike\",\"Adidas\"]}\n"),
            Ok(b"data: {\"products\":[{\"product_id\":\"1\"}]}\n"),
        ]);

        let collected: Vec<_> = block_on(async {
            let mut out = Vec::new();
            while let Some(chunk) = chunks.next().await {
                out.push(chunk.kind());
            }
            out
        });
        assert_eq!(collected, vec!["query", "brands", "products"]);
    }

    #[test]
    fn test_frame_split_across_reads() {
        let mut chunks = byte_stream(vec![
            Ok(b"data: {\"available_br"),
            Ok(b"ands\":[\"Nike\"]}\n"),
        ]);
        let first = block_on(chunks.next());
        assert_eq!(first.map(|c| c.kind()), Some("brands"));
        assert!(block_on(chunks.next()).is_none());
    }

    #[test]
    fn test_transport_failure_ends_stream_and_is_recorded() {
        let mut chunks = byte_stream(vec![
            Ok(b"data: {\"query\":{\"product_category\":\"shoes\"}}\n"),
            Err("connection reset"),
            Ok(b"data: {\"available_brands\":[\"Nike\"]}\n"),
        ]);

        assert_eq!(block_on(chunks.next()).map(|c| c.kind()), Some("query"));
        assert!(block_on(chunks.next()).is_none());
        let failure = chunks.failure().expect("failure recorded");
        assert!(failure.to_string().contains("connection reset"));
    }

    #[test]
    fn test_trailing_frame_without_newline_delivered_at_end() {
        let mut chunks = byte_stream(vec![Ok(b"data: {\"available_brands\":[]}")]);
        assert_eq!(block_on(chunks.next()).map(|c| c.kind()), Some("brands"));
        assert!(block_on(chunks.next()).is_none());
    }

    #[test]
    fn test_dropped_frames_counted_through_stream() {
        let mut chunks = byte_stream(vec![Ok(b"data: {broken\n")]);
        assert!(block_on(chunks.next()).is_none());
        assert_eq!(chunks.frames_dropped(), 1);
        assert!(chunks.failure().is_none());
    }
}
