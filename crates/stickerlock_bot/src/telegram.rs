//! Minimal Telegram Bot API client.
//!
//! Long polls `getUpdates` and exposes the two outbound calls the bot
//! needs: `sendMessage` and `deleteMessage`.

use reqwest::Client;
use serde::Deserialize;
use stickerlock_core::{ChatMessage, ContentKind, UserId, Username};
use stickerlock_error::{TelegramError, TelegramErrorKind};
use tracing::{debug, error, instrument};

/// Envelope every Bot API response arrives in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

/// One entry from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update id, used as the next poll offset
    pub update_id: i64,
    /// The new message, if this update carries one
    pub message: Option<TelegramMessage>,
}

/// Wire shape of a Telegram message, reduced to the fields the bot reads.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    /// Message id within its chat
    pub message_id: i64,
    /// Sender, absent for channel posts and other anonymous sources
    pub from: Option<TelegramUser>,
    /// Chat the message was posted in
    pub chat: TelegramChat,
    /// Text content
    pub text: Option<String>,
    /// Present when the message is a sticker
    pub sticker: Option<serde_json::Value>,
    /// Present when the message is an animation (GIF)
    pub animation: Option<serde_json::Value>,
}

/// Wire shape of a Telegram user.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    /// Numeric account id
    pub id: i64,
    /// Username handle, if the account has one
    pub username: Option<String>,
}

/// Wire shape of a Telegram chat.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    /// Numeric chat id
    pub id: i64,
}

impl TelegramMessage {
    /// Maps the wire message to the engine's inbound event shape.
    ///
    /// Returns `None` for anonymous messages: without a sender there is no
    /// identity to evaluate and no actor to authorize.
    pub fn to_chat_message(&self) -> Option<ChatMessage> {
        let from = self.from.as_ref()?;
        let kind = if self.sticker.is_some() {
            Some(ContentKind::Sticker)
        } else if self.animation.is_some() {
            Some(ContentKind::AnimatedImage)
        } else {
            None
        };
        Some(ChatMessage::new(
            UserId::from(from.id),
            from.username.as_deref().map(Username::new),
            self.text.clone(),
            kind,
        ))
    }
}

/// HTTP client for the Bot API.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl TelegramClient {
    /// Creates a client for the given bot token.
    pub fn new(token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("https://api.telegram.org/bot{}", token),
        }
    }

    /// Long polls for new updates past the given offset.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let updates: Vec<Update> = self
            .call(
                "getUpdates",
                &serde_json::json!({
                    "offset": offset,
                    "timeout": timeout_secs,
                }),
            )
            .await?;
        debug!(count = updates.len(), "Received updates");
        Ok(updates)
    }

    /// Sends a text reply to a chat.
    #[instrument(skip(self, text))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &serde_json::json!({
                    "chat_id": chat_id,
                    "text": text,
                }),
            )
            .await?;
        Ok(())
    }

    /// Deletes a message from a chat. Requires delete permission in the chat.
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), TelegramError> {
        let _: serde_json::Value = self
            .call(
                "deleteMessage",
                &serde_json::json!({
                    "chat_id": chat_id,
                    "message_id": message_id,
                }),
            )
            .await?;
        Ok(())
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(method, error = ?e, "HTTP request failed");
                TelegramError::new(TelegramErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(method, status = %status, error = %error_text, "API error");
            return Err(TelegramError::new(TelegramErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            error!(method, error = ?e, "Failed to parse response");
            TelegramError::new(TelegramErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if !envelope.ok {
            let message = envelope.description.unwrap_or_default();
            error!(method, error = %message, "API rejected the call");
            return Err(TelegramError::new(TelegramErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        envelope.result.ok_or_else(|| {
            TelegramError::new(TelegramErrorKind::ResponseParsing(
                "Response missing result field".to_string(),
            ))
        })
    }
}
