//! The command engine: validated transitions over the moderation state.

use crate::{Command, LockTarget};
use stickerlock_core::{ContentKind, ModerationState, UserId};
use stickerlock_error::{StickerlockError, StickerlockResult};
use stickerlock_security::{Role, authorize};
use stickerlock_store::StateStore;
use tracing::{debug, info, instrument, warn};

const START_TEXT: &str = "You can control which users may post stickers and GIFs. \
Type /help for the commands. MESSAGE DELETE PERMISSION REQUIRED!";

const HELP_TEXT: &str = "Available commands:
/ulock <sticker|gif|all> <username> - Blocks the user from posting the given content.
/free <username> - Lifts all restrictions for the user.
/list - Shows the list of restricted users.
/addadmin <userId> - Adds a new admin. (Requires sudo permission)
/removeadmin <userId> - Removes an admin. (Requires sudo permission)";

const SAVE_FAILED_TEXT: &str = "Failed to save changes; the operation was not applied.";

/// Owns the canonical in-memory state and the persistence collaborator.
///
/// Mutations follow a scratch-copy protocol: the transition is applied to a
/// copy, the copy is saved, and only a successful save commits it in memory.
/// Memory therefore never runs ahead of disk, and a failed save is reported
/// as a failure reply rather than a false success.
pub struct CommandEngine<S: StateStore> {
    state: ModerationState,
    store: S,
}

impl<S: StateStore> CommandEngine<S> {
    /// Creates an engine over a loaded state and its store.
    pub fn new(state: ModerationState, store: S) -> Self {
        Self { state, store }
    }

    /// Read-only view of the canonical state, for the guard and the filter.
    pub fn state(&self) -> &ModerationState {
        &self.state
    }

    /// Executes a command for the acting user, producing exactly one reply.
    #[instrument(skip(self, command), fields(actor = %actor))]
    pub async fn execute(&mut self, actor: UserId, command: Command) -> String {
        match self.try_execute(actor, command).await {
            Ok(reply) => reply,
            Err(StickerlockError::Command(e)) => {
                debug!(error = %e, "Command rejected");
                e.reply_text()
            }
            Err(e) => {
                warn!(error = %e, "Mutation not committed");
                SAVE_FAILED_TEXT.to_string()
            }
        }
    }

    async fn try_execute(&mut self, actor: UserId, command: Command) -> StickerlockResult<String> {
        match command {
            Command::Start => Ok(START_TEXT.to_string()),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Ulock { target, username } => {
                authorize(&self.state, actor, Role::Admin)?;
                let mut next = self.state.clone();
                let label = match target {
                    LockTarget::Sticker => {
                        next.restrict(username.clone(), ContentKind::Sticker);
                        "sticker"
                    }
                    LockTarget::Gif => {
                        next.restrict(username.clone(), ContentKind::AnimatedImage);
                        "GIF"
                    }
                    LockTarget::All => {
                        next.restrict_all(username.clone());
                        "all"
                    }
                };
                self.commit(next).await?;
                info!(user = %username, target = label, "Restriction applied");
                Ok(format!(
                    "Blocked {} posting for @{}!",
                    label, username
                ))
            }
            Command::Free { username } => {
                authorize(&self.state, actor, Role::Admin)?;
                let mut next = self.state.clone();
                if !next.free(&username) {
                    // Soft no-op: nothing to lift, nothing to save.
                    return Ok(format!("No restrictions found for @{}.", username));
                }
                self.commit(next).await?;
                info!(user = %username, "Restrictions lifted");
                Ok(format!("All restrictions lifted for @{}.", username))
            }
            Command::List => {
                authorize(&self.state, actor, Role::Admin)?;
                let lines: Vec<String> = self
                    .state
                    .restricted()
                    .map(|(username, flags)| {
                        let mut kinds = Vec::new();
                        if flags.restricts(ContentKind::Sticker) {
                            kinds.push(ContentKind::Sticker.to_string());
                        }
                        if flags.restricts(ContentKind::AnimatedImage) {
                            kinds.push(ContentKind::AnimatedImage.to_string());
                        }
                        format!("@{}: {}", username, kinds.join(", "))
                    })
                    .collect();

                if lines.is_empty() {
                    Ok("No users are currently restricted.".to_string())
                } else {
                    Ok(format!("Restricted users:\n{}", lines.join("\n")))
                }
            }
            Command::AddAdmin { user_id } => {
                authorize(&self.state, actor, Role::Sudo)?;
                let mut next = self.state.clone();
                if !next.add_admin(user_id) {
                    return Ok(format!("User {} is already an admin.", user_id));
                }
                self.commit(next).await?;
                info!(admin = %user_id, "Admin added");
                Ok(format!("User {} added as admin.", user_id))
            }
            Command::RemoveAdmin { user_id } => {
                authorize(&self.state, actor, Role::Sudo)?;
                let mut next = self.state.clone();
                if !next.remove_admin(user_id) {
                    return Ok(format!("User {} is not an admin.", user_id));
                }
                self.commit(next).await?;
                info!(admin = %user_id, "Admin removed");
                Ok(format!("User {} removed from admins.", user_id))
            }
        }
    }

    /// Saves the transitioned state, committing it in memory only on success.
    async fn commit(&mut self, next: ModerationState) -> StickerlockResult<()> {
        self.store.save(&next).await?;
        self.state = next;
        Ok(())
    }
}
