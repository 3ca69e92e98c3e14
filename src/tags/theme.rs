use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Presentation color carried by a folder tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Red,
    Red2,
    Red3,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    White,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub const ALL: [Self; 11] = [
        Self::Red,
        Self::Red2,
        Self::Red3,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::White,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Red2 => "red2",
            Self::Red3 => "red3",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::White => "white",
        }
    }

    /// First tag naming a theme, ignoring case
    #[must_use]
    pub fn from_tags(tags: &[String]) -> Option<Self> {
        tags.iter().find_map(|tag| tag.parse().ok())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::parse_tags;

    #[test]
    fn test_parse_theme_ignores_case() {
        assert_eq!("RED2".parse::<Theme>(), Ok(Theme::Red2));
        assert_eq!("Purple".parse::<Theme>(), Ok(Theme::Purple));
        assert!("magenta".parse::<Theme>().is_err());
    }

    #[test]
    fn test_first_matching_tag_wins() {
        let tags = parse_tags("hidden:Cyan:red");
        assert_eq!(Theme::from_tags(&tags), Some(Theme::Cyan));
        assert_eq!(Theme::from_tags(&parse_tags("locked")), None);
    }

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Red3).unwrap(), "\"red3\"");
        let theme: Theme = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(theme, Theme::White);
    }
}
