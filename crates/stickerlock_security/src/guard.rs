//! Role-based authorization guard.

use stickerlock_core::{ModerationState, UserId};
use stickerlock_error::CommandError;
use tracing::debug;

/// The two fixed roles. Independent: sudo does not imply admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// May manage content restrictions
    Admin,
    /// May manage the admin roster
    Sudo,
}

/// Checks whether the acting user holds the required role.
///
/// Pure function of its inputs; no side effects. Denial carries a reason
/// distinguishing the missing role for the caller-facing reply.
pub fn authorize(
    state: &ModerationState,
    actor: UserId,
    required: Role,
) -> Result<(), CommandError> {
    let allowed = match required {
        Role::Admin => state.is_admin(actor),
        Role::Sudo => state.is_sudo(actor),
    };

    if allowed {
        return Ok(());
    }

    debug!(%actor, ?required, "Authorization denied");
    match required {
        Role::Admin => Err(CommandError::forbidden(
            "You are not authorized to use this command.",
        )),
        Role::Sudo => Err(CommandError::forbidden(
            "You need sudo permission to use this command.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ModerationState {
        ModerationState::new(vec![UserId::from(1001)], vec![UserId::from(2002)])
    }

    #[test]
    fn test_admin_allowed() {
        assert!(authorize(&state(), UserId::from(1001), Role::Admin).is_ok());
    }

    #[test]
    fn test_sudo_allowed() {
        assert!(authorize(&state(), UserId::from(2002), Role::Sudo).is_ok());
    }

    #[test]
    fn test_admin_is_not_implicitly_sudo() {
        assert!(authorize(&state(), UserId::from(1001), Role::Sudo).is_err());
    }

    #[test]
    fn test_sudo_is_not_implicitly_admin() {
        assert!(authorize(&state(), UserId::from(2002), Role::Admin).is_err());
    }

    #[test]
    fn test_denial_reasons_differ_by_role() {
        let outsider = UserId::from(3003);
        let admin_denied = authorize(&state(), outsider, Role::Admin).unwrap_err();
        let sudo_denied = authorize(&state(), outsider, Role::Sudo).unwrap_err();
        assert_ne!(admin_denied.reply_text(), sudo_denied.reply_text());
        assert!(sudo_denied.reply_text().contains("sudo"));
    }
}
