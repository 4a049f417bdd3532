//! Restriction filter for inbound content.

use stickerlock_core::{ContentKind, ModerationState, Username};
use tracing::debug;

/// Decides whether a content event should be suppressed.
///
/// Anonymous senders are never suppressed: without an identity there is no
/// restriction to evaluate. Otherwise the sender's stored flags decide, with
/// an absent entry reading as both-false.
///
/// This only decides; the dispatch pipeline performs the deletion.
pub fn should_suppress(
    state: &ModerationState,
    sender: Option<&Username>,
    kind: ContentKind,
) -> bool {
    let Some(username) = sender else {
        return false;
    };

    let suppress = state.flags_for(username).restricts(kind);
    if suppress {
        debug!(sender = %username, %kind, "Content restricted, suppressing");
    }
    suppress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_sticker_lock(name: &str) -> ModerationState {
        let mut state = ModerationState::default();
        state.restrict(Username::new(name), ContentKind::Sticker);
        state
    }

    #[test]
    fn test_restricted_kind_is_suppressed() {
        let state = state_with_sticker_lock("alice");
        let alice = Username::new("alice");
        assert!(should_suppress(&state, Some(&alice), ContentKind::Sticker));
    }

    #[test]
    fn test_untouched_kind_is_allowed() {
        let state = state_with_sticker_lock("alice");
        let alice = Username::new("alice");
        assert!(!should_suppress(
            &state,
            Some(&alice),
            ContentKind::AnimatedImage
        ));
    }

    #[test]
    fn test_unknown_sender_is_allowed() {
        let state = state_with_sticker_lock("alice");
        let bob = Username::new("bob");
        assert!(!should_suppress(&state, Some(&bob), ContentKind::Sticker));
    }

    #[test]
    fn test_anonymous_sender_is_never_suppressed() {
        let state = state_with_sticker_lock("alice");
        assert!(!should_suppress(&state, None, ContentKind::Sticker));
        assert!(!should_suppress(&state, None, ContentKind::AnimatedImage));
    }
}
