//! Core data types for the stickerlock moderation bot.
//!
//! This crate provides the foundation data types used across the stickerlock
//! workspace: user identity, restrictable content kinds, per-user restriction
//! flags, the authoritative moderation state, and the inbound event shape.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod content;
mod message;
mod state;
mod user;

pub use content::{ContentKind, RestrictionFlags};
pub use message::ChatMessage;
pub use state::ModerationState;
pub use user::{UserId, Username};
