//! User identity types.
//!
//! Role membership keys on the stable numeric [`UserId`], while restriction
//! lookups key on the platform-provided [`Username`] handle. The two
//! identifier spaces are independent; no mapping between them is maintained.

use serde::{Deserialize, Serialize};

/// Opaque numeric identifier for a platform account.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Returns the raw numeric id.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// String handle for a platform account, without the leading `@` marker.
///
/// The constructor normalizes by stripping one leading `@`, so stored
/// usernames never carry the marker.
///
/// # Examples
///
/// ```
/// use stickerlock_core::Username;
///
/// assert_eq!(Username::new("@alice"), Username::new("alice"));
/// assert_eq!(Username::new("alice").as_str(), "alice");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a username, stripping one leading `@` marker if present.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.strip_prefix('@') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(raw),
        }
    }

    /// Returns the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
