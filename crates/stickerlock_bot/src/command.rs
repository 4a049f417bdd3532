//! Administrative command parsing.

use stickerlock_core::{UserId, Username};
use stickerlock_error::CommandError;

/// What a `/ulock` invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTarget {
    /// Block stickers only
    Sticker,
    /// Block GIFs only
    Gif,
    /// Block both
    All,
}

/// A recognized administrative command with validated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `/start` — informational greeting
    Start,
    /// `/help` — command list
    Help,
    /// `/ulock <sticker|gif|all> <username>` — restrict a user
    Ulock {
        /// Which content kinds to block
        target: LockTarget,
        /// Whose posting to block
        username: Username,
    },
    /// `/free <username>` — lift all restrictions for a user
    Free {
        /// Whose restrictions to lift
        username: Username,
    },
    /// `/list` — show restricted users
    List,
    /// `/addadmin <userId>` — add to the admin roster (sudo)
    AddAdmin {
        /// Id to add
        user_id: UserId,
    },
    /// `/removeadmin <userId>` — remove from the admin roster (sudo)
    RemoveAdmin {
        /// Id to remove
        user_id: UserId,
    },
}

/// Parses raw message text into a command.
///
/// Returns `Ok(None)` for plain text and unrecognized `/commands` (neither
/// produces a reply). Tokenizes on whitespace; the command token may carry a
/// `@botname` suffix (Telegram group-mention form), which is stripped. A
/// leading `@` on a username argument is stripped as normalization, never
/// authorization.
///
/// # Errors
///
/// `BadArguments` for wrong argument counts, unknown lock kinds and
/// non-numeric user ids.
pub fn parse(text: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(None);
    };
    let Some(name) = first.strip_prefix('/') else {
        return Ok(None);
    };
    let name = name.split('@').next().unwrap_or(name);

    match name {
        "start" => Ok(Some(Command::Start)),
        "help" => Ok(Some(Command::Help)),
        "ulock" => {
            if tokens.len() < 3 {
                return Err(CommandError::bad_arguments(
                    "Invalid usage! Correct usage: /ulock <sticker|gif|all> <username>",
                ));
            }
            let target = match tokens[1].to_lowercase().as_str() {
                "sticker" => LockTarget::Sticker,
                "gif" => LockTarget::Gif,
                "all" => LockTarget::All,
                _ => {
                    return Err(CommandError::bad_arguments(
                        "Invalid type! Only \"sticker\", \"gif\" or \"all\" are supported.",
                    ));
                }
            };
            Ok(Some(Command::Ulock {
                target,
                username: Username::new(tokens[2]),
            }))
        }
        "free" => {
            if tokens.len() < 2 {
                return Err(CommandError::bad_arguments(
                    "Invalid usage! Correct usage: /free <username>",
                ));
            }
            Ok(Some(Command::Free {
                username: Username::new(tokens[1]),
            }))
        }
        "list" => Ok(Some(Command::List)),
        "addadmin" => parse_roster_id(&tokens, "/addadmin <userId>")
            .map(|user_id| Some(Command::AddAdmin { user_id })),
        "removeadmin" => parse_roster_id(&tokens, "/removeadmin <userId>")
            .map(|user_id| Some(Command::RemoveAdmin { user_id })),
        _ => Ok(None),
    }
}

fn parse_roster_id(tokens: &[&str], usage: &str) -> Result<UserId, CommandError> {
    let Some(raw) = tokens.get(1) else {
        return Err(CommandError::bad_arguments(format!(
            "Invalid usage! Correct usage: {}",
            usage
        )));
    };
    raw.parse::<UserId>()
        .map_err(|_| CommandError::bad_arguments("Invalid user ID!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_ignored() {
        assert_eq!(parse("hello there").unwrap(), None);
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        assert_eq!(parse("/dance").unwrap(), None);
    }

    #[test]
    fn test_bot_mention_suffix_is_stripped() {
        assert_eq!(parse("/help@stickerlock_bot").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_ulock_parses_target_and_username() {
        let parsed = parse("/ulock sticker @alice").unwrap();
        assert_eq!(
            parsed,
            Some(Command::Ulock {
                target: LockTarget::Sticker,
                username: Username::new("alice"),
            })
        );
    }

    #[test]
    fn test_ulock_target_is_case_insensitive() {
        let parsed = parse("/ulock GIF alice").unwrap();
        assert_eq!(
            parsed,
            Some(Command::Ulock {
                target: LockTarget::Gif,
                username: Username::new("alice"),
            })
        );
    }

    #[test]
    fn test_ulock_missing_args() {
        let err = parse("/ulock sticker").unwrap_err();
        assert!(err.reply_text().contains("/ulock"));
    }

    #[test]
    fn test_ulock_unknown_kind() {
        let err = parse("/ulock video alice").unwrap_err();
        assert!(err.reply_text().contains("Invalid type"));
    }

    #[test]
    fn test_addadmin_requires_numeric_id() {
        let err = parse("/addadmin bob").unwrap_err();
        assert_eq!(err.reply_text(), "Invalid user ID!");

        let parsed = parse("/addadmin 4004").unwrap();
        assert_eq!(
            parsed,
            Some(Command::AddAdmin {
                user_id: "4004".parse().unwrap(),
            })
        );
    }

    #[test]
    fn test_removeadmin_missing_arg() {
        let err = parse("/removeadmin").unwrap_err();
        assert!(err.reply_text().contains("/removeadmin <userId>"));
    }
}
