//! Shared label parse errors for model enums.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Label parse errors for roles, statuses, plans and sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelParseError {
    EmptyLabel { kind: &'static str },
    UnsupportedLabel { kind: &'static str, value: String },
}

impl Display for LabelParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel { kind } => write!(f, "{kind} label must not be empty"),
            Self::UnsupportedLabel { kind, value } => {
                write!(f, "{kind} label is unsupported: {value}")
            }
        }
    }
}

impl Error for LabelParseError {}

/// Matches a trimmed, non-empty label against `(label, value)` pairs.
///
/// Comparison is ASCII case-insensitive so `"finance officer"` and
/// `"Finance Officer"` resolve to the same value.
pub(crate) fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    table: &[(&'static str, T)],
) -> Result<T, LabelParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(LabelParseError::EmptyLabel { kind });
    }

    table
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(normalized))
        .map(|(_, parsed)| *parsed)
        .ok_or_else(|| LabelParseError::UnsupportedLabel {
            kind,
            value: normalized.to_string(),
        })
}

/// Decodes a label string through [`parse_label`], so wire values match
/// with the same case-insensitivity as the string entry points.
pub(crate) fn deserialize_label<'de, D, T>(
    deserializer: D,
    kind: &'static str,
    table: &[(&'static str, T)],
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Copy,
{
    let raw = String::deserialize(deserializer)?;
    parse_label(kind, &raw, table).map_err(D::Error::custom)
}
