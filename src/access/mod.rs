//! Access policy
//!
//! Pure decisions about what a session may see and open at its current
//! special access level. Raising the level only ever reveals or unlocks more.
//!
//! Locking is a presentation gate. Nothing here protects content.

use crate::tags::Level;

/// Prefix of the phrases that select a special access level (`code1`..`code6`)
pub const CODE_PREFIX: &str = "code";

/// Whether an item with `hidden` is listed at `access`
#[must_use]
pub fn is_visible(hidden: Level, access: Level) -> bool {
    !hidden.is_set() || hidden <= access
}

/// Whether an item with `locked` can be opened at `access`
#[must_use]
pub fn is_unlocked(locked: Level, access: Level) -> bool {
    !locked.is_set() || locked <= access
}

/// Match a code phrase against `code1`..`code6`
///
/// The phrase is trimmed and compared case-insensitively.
///
/// # Examples
/// ```
/// # use dbcat::access::parse_code;
/// # use dbcat::tags::Level;
/// assert_eq!(parse_code(" CODE4 "), Level::new(4));
/// assert_eq!(parse_code("code7"), None);
/// ```
#[must_use]
pub fn parse_code(phrase: &str) -> Option<Level> {
    let code = phrase.trim().to_lowercase();
    Level::graded().find(|level| code == format!("{CODE_PREFIX}{level}"))
}

/// `Level <n> Access` for a level, using the displayed access number
#[must_use]
pub fn level_name(level: Level) -> String {
    format!("Level {} Access", level.access_level())
}

/// Short hidden/locked markers such as `H9 L11`
///
/// Level 6 shows the bare letter. Returns `None` when the item is neither
/// hidden nor locked.
#[must_use]
pub fn badges(hidden: Level, locked: Level) -> Option<String> {
    let badge = |letter: char, level: Level| {
        level.is_set().then(|| {
            if level.get() == Level::MAX {
                letter.to_string()
            } else {
                format!("{letter}{}", level.access_level())
            }
        })
    };

    let parts: Vec<String> = [badge('H', hidden), badge('L', locked)]
        .into_iter()
        .flatten()
        .collect();

    (!parts.is_empty()).then(|| parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> impl Iterator<Item = Level> {
        (0..=Level::MAX).filter_map(Level::new)
    }

    #[test]
    fn test_unhidden_always_visible() {
        for access in levels() {
            assert!(is_visible(Level::NONE, access));
            assert!(is_unlocked(Level::NONE, access));
        }
    }

    #[test]
    fn test_visibility_threshold() {
        let hidden = Level::new(3).unwrap();
        assert!(!is_visible(hidden, Level::NONE));
        assert!(!is_visible(hidden, Level::new(2).unwrap()));
        assert!(is_visible(hidden, Level::new(3).unwrap()));
        assert!(is_visible(hidden, Level::new(6).unwrap()));
    }

    #[test]
    fn test_policies_are_monotonic() {
        for item in levels() {
            for low in levels() {
                for high in levels().filter(|h| *h > low) {
                    if is_visible(item, low) {
                        assert!(is_visible(item, high), "item {item} low {low} high {high}");
                    }
                    if is_unlocked(item, low) {
                        assert!(is_unlocked(item, high));
                    }
                }
            }
        }
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("code1"), Level::new(1));
        assert_eq!(parse_code("Code6\n"), Level::new(6));
        assert_eq!(parse_code("code0"), None);
        assert_eq!(parse_code("code"), None);
        assert_eq!(parse_code("letmein"), None);
    }

    #[test]
    fn test_level_name_uses_access_number() {
        assert_eq!(level_name(Level::new(1).unwrap()), "Level 6 Access");
        assert_eq!(level_name(Level::new(3).unwrap()), "Level 10 Access");
    }

    #[test]
    fn test_badges() {
        let l = |n| Level::new(n).unwrap();
        assert_eq!(badges(l(0), l(0)), None);
        assert_eq!(badges(l(2), l(0)).as_deref(), Some("H9"));
        assert_eq!(badges(l(0), l(4)).as_deref(), Some("L11"));
        assert_eq!(badges(l(6), l(6)).as_deref(), Some("H L"));
    }
}
