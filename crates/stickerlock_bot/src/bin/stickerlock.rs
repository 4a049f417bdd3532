//! Stickerlock - sticker and GIF moderation bot for Telegram groups.
//!
//! Loads the moderation state, then long polls the Bot API and feeds each
//! message through the dispatch pipeline: restricted content is deleted,
//! administrative commands are answered.

use clap::Parser;
use std::path::PathBuf;
use stickerlock_bot::{CommandEngine, Outcome, Pipeline, TelegramClient};
use stickerlock_error::ConfigError;
use stickerlock_store::{JsonFileStore, StateStore};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the bot.
#[derive(Parser, Debug)]
#[command(name = "stickerlock")]
#[command(about = "Sticker and GIF moderation bot for Telegram groups")]
#[command(version)]
struct Args {
    /// Telegram bot token
    #[arg(long, env = "STICKERLOCK_BOT_TOKEN")]
    token: Option<String>,

    /// Path to the JSON state file
    #[arg(long, default_value = "data.json")]
    state_file: PathBuf,

    /// Long-poll timeout in seconds
    #[arg(long, default_value_t = 30)]
    poll_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting stickerlock");

    let token = args.token.ok_or_else(|| {
        ConfigError::new("Bot token is required! Set STICKERLOCK_BOT_TOKEN or pass --token.")
    })?;

    // An unreadable or corrupt state file is fatal: the bot never starts
    // with a default-substituted state.
    info!(state_file = ?args.state_file, "Loading moderation state");
    let store = JsonFileStore::new(&args.state_file);
    let state = store.load().await?;

    let engine = CommandEngine::new(state, store);
    let mut pipeline = Pipeline::standard(engine);
    let client = TelegramClient::new(&token);

    info!("Bot is running. Press CTRL+C to shut down.");

    let mut offset = 0i64;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping gracefully");
                break;
            }
            polled = client.get_updates(offset, args.poll_timeout) => {
                let updates = match polled {
                    Ok(updates) => updates,
                    Err(e) => {
                        warn!(error = %e, "Polling failed, retrying");
                        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                        continue;
                    }
                };

                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    let Some(message) = update.message else { continue };
                    let chat_id = message.chat.id;
                    let message_id = message.message_id;
                    let Some(event) = message.to_chat_message() else {
                        debug!(message_id, "Skipping anonymous message");
                        continue;
                    };

                    match pipeline.dispatch(&event).await {
                        Some(Outcome::Suppress) => {
                            info!(message_id, "Deleting restricted content");
                            if let Err(e) = client.delete_message(chat_id, message_id).await {
                                warn!(error = %e, message_id, "Failed to delete message");
                            }
                        }
                        Some(Outcome::Reply(text)) => {
                            if let Err(e) = client.send_message(chat_id, &text).await {
                                warn!(error = %e, message_id, "Failed to send reply");
                            }
                        }
                        None => {}
                    }
                }
            }
        }
    }

    info!("Stickerlock stopped");
    Ok(())
}
