//! Command error types surfaced to the invoking user.

/// Kinds of command errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandErrorKind {
    /// Actor lacks the required role
    #[display("{}", reason)]
    Forbidden {
        /// Human-readable denial reason
        reason: String,
    },
    /// Malformed or missing command arguments
    #[display("{}", message)]
    BadArguments {
        /// Usage-hint reply for the invoking user
        message: String,
    },
}

/// Command error with location tracking.
///
/// Both kinds are user-facing and non-fatal: the engine renders them as a
/// reply to the invoking conversation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new command error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a `Forbidden` error with the given denial reason.
    #[track_caller]
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::Forbidden {
            reason: reason.into(),
        })
    }

    /// Create a `BadArguments` error with the given usage-hint reply.
    #[track_caller]
    pub fn bad_arguments(message: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::BadArguments {
            message: message.into(),
        })
    }

    /// The text to send back to the invoking user.
    pub fn reply_text(&self) -> String {
        self.kind.to_string()
    }
}
