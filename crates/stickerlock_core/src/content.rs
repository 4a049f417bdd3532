//! Restrictable content kinds and per-user restriction flags.

use serde::{Deserialize, Serialize};

/// The content kinds a user can be restricted from posting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum ContentKind {
    /// Sticker messages
    Sticker,
    /// Animated images (GIFs)
    #[strum(serialize = "GIF")]
    AnimatedImage,
}

/// Per-username restriction record.
///
/// Absence of a record implies both flags false; a record with both flags
/// false is valid and equivalent to absence.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct RestrictionFlags {
    /// Whether sticker posting is blocked
    #[serde(default)]
    #[new(default)]
    sticker: bool,
    /// Whether GIF posting is blocked
    #[serde(default)]
    #[new(default)]
    gif: bool,
}

impl RestrictionFlags {
    /// Block the given content kind.
    pub fn restrict(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Sticker => self.sticker = true,
            ContentKind::AnimatedImage => self.gif = true,
        }
    }

    /// Block both content kinds.
    pub fn restrict_all(&mut self) {
        self.sticker = true;
        self.gif = true;
    }

    /// Lift both restrictions.
    pub fn clear(&mut self) {
        self.sticker = false;
        self.gif = false;
    }

    /// Whether the given content kind is blocked.
    pub fn restricts(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Sticker => self.sticker,
            ContentKind::AnimatedImage => self.gif,
        }
    }

    /// Whether any content kind is blocked.
    pub fn any(&self) -> bool {
        self.sticker || self.gif
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_flags_block_nothing() {
        let flags = RestrictionFlags::default();
        for kind in ContentKind::iter() {
            assert!(!flags.restricts(kind));
        }
        assert!(!flags.any());
    }

    #[test]
    fn test_restrict_single_kind_leaves_other_untouched() {
        let mut flags = RestrictionFlags::default();
        flags.restrict(ContentKind::Sticker);
        assert!(flags.restricts(ContentKind::Sticker));
        assert!(!flags.restricts(ContentKind::AnimatedImage));
    }

    #[test]
    fn test_restrict_all_then_clear() {
        let mut flags = RestrictionFlags::default();
        flags.restrict_all();
        assert!(flags.restricts(ContentKind::Sticker));
        assert!(flags.restricts(ContentKind::AnimatedImage));

        flags.clear();
        assert!(!flags.any());
    }

    #[test]
    fn test_restrict_is_idempotent() {
        let mut once = RestrictionFlags::default();
        once.restrict(ContentKind::Sticker);
        let mut twice = once;
        twice.restrict(ContentKind::Sticker);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ContentKind::Sticker.to_string(), "Sticker");
        assert_eq!(ContentKind::AnimatedImage.to_string(), "GIF");
    }
}
