use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A descriptor entry as it appears in `folders.json` or `files.json`
///
/// Descriptors accept either bare label strings or objects carrying a
/// `name` and/or `label` field. Anything else (numbers, nulls, nested arrays)
/// is accepted as an object with neither field, so one bad entry never
/// invalidates the whole descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// `"name:tag1:tag2"`
    Plain(String),
    /// `{ "name": "...", "label": "..." }`
    Labeled {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

/// Which side of the catalog an entry describes
///
/// Folders and files disagree on which field of a structured entry wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Prefers `label`, then `name`
    Folder,
    /// Prefers `name`, then `label`
    File,
}

/// A label split into its display name and tags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLabel {
    pub name: String,
    pub tags: Vec<String>,
}

impl ParsedLabel {
    /// Case-insensitive membership test
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl RawEntry {
    /// The label string this entry contributes for the given kind
    ///
    /// Empty fields are skipped the same way a missing field is.
    #[must_use]
    pub fn label(&self, kind: EntryKind) -> &str {
        match self {
            Self::Plain(label) => label,
            Self::Labeled { name, label } => {
                let (first, second) = match kind {
                    EntryKind::Folder => (label, name),
                    EntryKind::File => (name, label),
                };
                first
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .or_else(|| second.as_deref().filter(|s| !s.is_empty()))
                    .unwrap_or("")
            }
        }
    }

    /// Parse this entry into name and tags
    #[must_use]
    pub fn parse(&self, kind: EntryKind) -> ParsedLabel {
        split_label(self.label(kind))
    }
}

impl From<&Value> for RawEntry {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Plain(s.clone()),
            Value::Object(map) => {
                let field = |key: &str| map.get(key).and_then(Value::as_str).map(String::from);
                Self::Labeled {
                    name: field("name"),
                    label: field("label"),
                }
            }
            _ => Self::Labeled {
                name: None,
                label: None,
            },
        }
    }
}

impl From<&str> for RawEntry {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RawEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

/// Split a tag segment into its tags
///
/// The segment is split on `:`, each part on `,`, and every trimmed,
/// non-empty piece becomes a tag in left-to-right order.
///
/// # Examples
/// ```
/// # use dbcat::tags::parse_tags;
/// assert_eq!(parse_tags("red:hidden2, locked"), vec!["red", "hidden2", "locked"]);
/// assert!(parse_tags(" : , :").is_empty());
/// ```
#[must_use]
pub fn parse_tags(segment: &str) -> Vec<String> {
    segment
        .split(':')
        .flat_map(|part| part.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Split a raw label at its first colon
///
/// Without a colon the whole trimmed label is the name and there are no tags.
#[must_use]
pub fn split_label(raw: &str) -> ParsedLabel {
    match raw.split_once(':') {
        Some((name, segment)) => ParsedLabel {
            name: name.trim().to_string(),
            tags: parse_tags(segment),
        },
        None => ParsedLabel {
            name: raw.trim().to_string(),
            tags: Vec::new(),
        },
    }
}

/// Parse a descriptor entry for the given kind
#[must_use]
pub fn parse_label(entry: &RawEntry, kind: EntryKind) -> ParsedLabel {
    entry.parse(kind)
}
