//! The authoritative moderation state.

use crate::{ContentKind, RestrictionFlags, UserId, Username};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The entire durable state: admin roster, sudo roster, per-user locks.
///
/// Serde field names match the legacy persisted JSON record
/// (`admins`, `sudoUsers`, `userLocks`).
///
/// Admin and sudo membership behave as sets at the mutation boundary;
/// the rosters are independent (sudo does not imply admin).
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ModerationState {
    /// User ids permitted to manage content restrictions
    #[serde(default)]
    admins: Vec<UserId>,
    /// User ids permitted to manage the admin roster
    #[serde(default, rename = "sudoUsers")]
    sudo_users: Vec<UserId>,
    /// Restriction flags keyed by username
    #[serde(default, rename = "userLocks")]
    user_locks: BTreeMap<Username, RestrictionFlags>,
}

impl ModerationState {
    /// Creates a state with the given rosters and no locks.
    pub fn new(admins: Vec<UserId>, sudo_users: Vec<UserId>) -> Self {
        Self {
            admins,
            sudo_users,
            user_locks: BTreeMap::new(),
        }
    }

    /// Whether the user holds the admin role.
    pub fn is_admin(&self, id: UserId) -> bool {
        self.admins.contains(&id)
    }

    /// Whether the user holds the sudo role.
    pub fn is_sudo(&self, id: UserId) -> bool {
        self.sudo_users.contains(&id)
    }

    /// Adds a user to the admin roster.
    ///
    /// Returns false without modifying the roster if the id is already
    /// present (set semantics).
    pub fn add_admin(&mut self, id: UserId) -> bool {
        if self.admins.contains(&id) {
            return false;
        }
        self.admins.push(id);
        true
    }

    /// Removes a user from the admin roster.
    ///
    /// Returns false if the id was not present.
    pub fn remove_admin(&mut self, id: UserId) -> bool {
        let before = self.admins.len();
        self.admins.retain(|admin| *admin != id);
        self.admins.len() != before
    }

    /// The restriction flags for a username, defaulting to both-false when
    /// no entry exists.
    pub fn flags_for(&self, username: &Username) -> RestrictionFlags {
        self.user_locks.get(username).copied().unwrap_or_default()
    }

    /// Blocks one content kind for a username, creating the entry if absent.
    pub fn restrict(&mut self, username: Username, kind: ContentKind) {
        self.user_locks.entry(username).or_default().restrict(kind);
    }

    /// Blocks both content kinds for a username, creating the entry if absent.
    pub fn restrict_all(&mut self, username: Username) {
        self.user_locks.entry(username).or_default().restrict_all();
    }

    /// Lifts all restrictions for a username.
    ///
    /// Returns false if no entry exists. An existing entry is cleared in
    /// place, not removed; a both-false entry is equivalent to absence.
    pub fn free(&mut self, username: &Username) -> bool {
        match self.user_locks.get_mut(username) {
            Some(flags) => {
                flags.clear();
                true
            }
            None => false,
        }
    }

    /// Usernames with at least one active restriction, in stable map order.
    pub fn restricted(&self) -> impl Iterator<Item = (&Username, &RestrictionFlags)> {
        self.user_locks.iter().filter(|(_, flags)| flags.any())
    }
}
