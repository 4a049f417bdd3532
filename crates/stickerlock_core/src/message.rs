//! Inbound event type.

use crate::{ContentKind, UserId, Username};

/// A message received from the platform transport.
///
/// # Examples
///
/// ```
/// use stickerlock_core::{ChatMessage, ContentKind, UserId, Username};
///
/// let message = ChatMessage::new(
///     UserId::from(1001),
///     Some(Username::new("alice")),
///     Some("/help".to_string()),
///     None::<ContentKind>,
/// );
///
/// assert_eq!(message.text().as_deref(), Some("/help"));
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ChatMessage {
    /// Numeric id of the sender
    sender_id: UserId,
    /// Username handle of the sender, absent for anonymous senders
    sender_username: Option<Username>,
    /// Text content, if any
    text: Option<String>,
    /// Restrictable content kind carried by the message, if any
    content_kind: Option<ContentKind>,
}

impl ChatMessage {
    /// Creates a new inbound message.
    pub fn new(
        sender_id: UserId,
        sender_username: Option<Username>,
        text: Option<String>,
        content_kind: impl Into<Option<ContentKind>>,
    ) -> Self {
        Self {
            sender_id,
            sender_username,
            text,
            content_kind: content_kind.into(),
        }
    }
}
