//! Command engine, dispatch pipeline and Telegram transport for the
//! stickerlock moderation bot.
//!
//! Control flow: every inbound message enters the [`Pipeline`], which runs
//! the suppression stage before the command stage. The [`CommandEngine`]
//! owns the canonical [`ModerationState`] and persists every mutation before
//! acknowledging it.
//!
//! [`ModerationState`]: stickerlock_core::ModerationState

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod engine;
mod pipeline;
mod telegram;

pub use command::{Command, LockTarget, parse};
pub use engine::CommandEngine;
pub use pipeline::{CommandStage, Outcome, Pipeline, Stage, SuppressionStage};
pub use telegram::{TelegramChat, TelegramClient, TelegramMessage, TelegramUser, Update};
