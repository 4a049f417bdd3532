//! Error types for the stickerlock moderation bot.
//!
//! Each domain gets a kind enum wrapped in a location-tracking error struct;
//! the [`StickerlockError`] aggregate carries any of them across crate
//! boundaries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod storage;
mod telegram;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use storage::{StorageError, StorageErrorKind};
pub use telegram::{TelegramError, TelegramErrorKind};

/// Aggregate error for the stickerlock workspace.
#[derive(Debug, Clone, derive_more::From)]
pub enum StickerlockError {
    /// User-facing command failure
    Command(CommandError),
    /// Persistence failure
    Storage(StorageError),
    /// Transport failure
    Telegram(TelegramError),
    /// Startup configuration failure
    Config(ConfigError),
}

impl std::fmt::Display for StickerlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(e) => write!(f, "{}", e),
            Self::Storage(e) => write!(f, "{}", e),
            Self::Telegram(e) => write!(f, "{}", e),
            Self::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StickerlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Command(e) => Some(e),
            Self::Storage(e) => Some(e),
            Self::Telegram(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

/// Result alias for the stickerlock workspace.
pub type StickerlockResult<T> = Result<T, StickerlockError>;
