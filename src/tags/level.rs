use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Keyword for visibility tags (`hidden`, `hidden1`..`hidden6`)
pub const HIDDEN_KEYWORD: &str = "hidden";

/// Keyword for lock tags (`locked`, `locked1`..`locked6`)
pub const LOCKED_KEYWORD: &str = "locked";

/// Internal level to displayed access level
const ACCESS_TABLE: [u8; 7] = [0, 6, 9, 10, 11, 12, 13];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level {0} is out of range (expected 0..=6)")]
    OutOfRange(u8),
}

/// A graded hidden/locked level
///
/// `0` means "not hidden" / "not locked"; `1..=6` are the graded levels.
/// Serialized as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const NONE: Self = Self(0);
    pub const MAX: u8 = 6;

    /// Construct a level, rejecting anything above 6
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for levels 1..=6
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 > 0
    }

    /// The externally displayed access number (see [`to_access_level`])
    #[must_use]
    pub const fn access_level(self) -> u8 {
        ACCESS_TABLE[self.0 as usize]
    }

    /// Levels 1..=6 in ascending order
    pub fn graded() -> impl Iterator<Item = Self> {
        (1..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(LevelError::OutOfRange(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve the graded level for `keyword` from a tag list
///
/// Scans levels 1 through 6 and returns the first one whose graded tag
/// (`keyword` + digit) is present, so the lowest level wins. The bare
/// keyword counts as level 1 only when no graded tag matched. Matching
/// ignores ASCII case.
///
/// # Examples
/// ```
/// # use dbcat::tags::{parse_tags, resolve_level, Level};
/// let tags = parse_tags("hidden3:hidden1");
/// assert_eq!(resolve_level(&tags, "hidden"), Level::new(1).unwrap());
/// assert_eq!(resolve_level(&[], "hidden"), Level::NONE);
/// ```
#[must_use]
pub fn resolve_level(tags: &[String], keyword: &str) -> Level {
    let present = |wanted: &str| tags.iter().any(|t| t.eq_ignore_ascii_case(wanted));

    for level in Level::graded() {
        if present(&format!("{keyword}{level}")) {
            return level;
        }
    }

    if present(keyword) { Level(1) } else { Level::NONE }
}

/// Map an internal level onto its displayed access number
///
/// `{0→0, 1→6, 2→9, 3→10, 4→11, 5→12, 6→13}`
#[must_use]
pub const fn to_access_level(level: Level) -> u8 {
    level.access_level()
}
