//! Error type for stream operations.

/// Errors raised while opening or consuming the search stream.
///
/// None of these are fatal to the page: callers log them and treat the
/// failure as "no further chunks for this search".
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("HTTP error: {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Sink error: {0}")]
    Sink(String),
}
