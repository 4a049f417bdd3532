//! Telegram transport error types.

/// Kinds of transport errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TelegramErrorKind {
    /// HTTP request failed before a response was received
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },
    /// The response body could not be parsed
    #[display("Response parsing error: {}", _0)]
    ResponseParsing(String),
}

/// Telegram transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Telegram Error: {} at line {} in {}", kind, line, file)]
pub struct TelegramError {
    /// The kind of error that occurred
    pub kind: TelegramErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TelegramError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TelegramErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
