//! Shell-first section sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};

use crate::error::StreamError;

/// State of the section sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Write side of the streamed page.
///
/// Enforces the shell-first pattern: the shell goes out before any section,
/// nothing follows completion, and each section is flushed as soon as it is
/// sent — one flush per chunk-driven re-render.
///
/// Generic over the underlying sink so it works with any `Sink<Vec<u8>>`,
/// including Spin's outgoing body.
pub struct SectionSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    sections_sent: Vec<String>,
}

impl<S, E> SectionSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new section sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        if self.state != SinkState::Initial {
            return Err(StreamError::Sink(
                "shell already sent or sink completed".to_string(),
            ));
        }
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Sink(e.to_string()))?;
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::ShellNotSent),
            SinkState::Completed => {
                return Err(StreamError::Sink("sink already completed".to_string()))
            }
            SinkState::ShellSent => {}
        }
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Sink(e.to_string()))?;
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Mark the response complete; no further sections are accepted.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
    }

    /// Names of the sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn sink() -> (
        SectionSink<mpsc::UnboundedSender<Vec<u8>>, mpsc::SendError>,
        mpsc::UnboundedReceiver<Vec<u8>>,
    ) {
        let (tx, rx) = mpsc::unbounded();
        (SectionSink::new(tx), rx)
    }

    #[test]
    fn test_section_before_shell_rejected() {
        let (mut sink, _rx) = sink();
        let err = block_on(sink.send_section("results", "<div></div>")).unwrap_err();
        assert!(matches!(err, StreamError::ShellNotSent));
    }

    #[test]
    fn test_sections_flow_after_shell_in_order() {
        let (mut sink, mut rx) = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("query", "<q>").await.unwrap();
            sink.send_section("results", "<r>").await.unwrap();
        });
        assert_eq!(sink.sections_sent(), ["query", "results"]);

        drop(sink);
        let sent: Vec<Vec<u8>> = block_on(async { (&mut rx).collect().await });
        assert_eq!(sent, vec![b"<html>".to_vec(), b"<q>".to_vec(), b"<r>".to_vec()]);
    }

    #[test]
    fn test_nothing_after_complete() {
        let (mut sink, _rx) = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.complete();
            assert!(sink.send_section("late", "<l>").await.is_err());
        });
    }

    #[test]
    fn test_double_shell_rejected() {
        let (mut sink, _rx) = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert!(sink.send_shell("<html>").await.is_err());
        });
    }
}
