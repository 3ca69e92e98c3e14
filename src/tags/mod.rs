//! Inline tag micro-language
//!
//! Every descriptor entry is a label of the form `name:tag1:tag2,tag3`. This
//! module splits labels into a display name and an ordered tag list, and
//! resolves the graded `hidden`/`locked` levels and theme colors carried by
//! those tags.
//!
//! # Grammar
//!
//! ```text
//! label    := name [ ':' segments ]
//! segments := segment { ':' segment }
//! segment  := tag { ',' tag }
//! ```
//!
//! Tags are trimmed, empty tags are dropped, order is preserved and duplicates
//! are kept.

pub mod level;
pub mod parser;
pub mod theme;

pub use level::{HIDDEN_KEYWORD, LOCKED_KEYWORD, Level, LevelError, resolve_level, to_access_level};
pub use parser::{EntryKind, ParsedLabel, RawEntry, parse_label, parse_tags, split_label};
pub use theme::{ParseThemeError, Theme};
