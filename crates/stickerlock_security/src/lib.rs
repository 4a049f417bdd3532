//! Authorization guard and restriction filter for the stickerlock bot.
//!
//! Both components are pure functions over a borrowed [`ModerationState`]
//! view: the command engine owns the canonical state and passes it in.
//!
//! [`ModerationState`]: stickerlock_core::ModerationState

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod filter;
mod guard;

pub use filter::should_suppress;
pub use guard::{Role, authorize};
