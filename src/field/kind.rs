use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The discriminator of a field. A field's kind never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Text, FieldKind::Select, FieldKind::Checkbox];

    /// The wire name, as used in the `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
        }
    }

    /// Human-readable name shown by editing front-ends.
    pub fn title(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Select => "Select",
            FieldKind::Checkbox => "Checkbox",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FieldKind::Text),
            "select" => Ok(FieldKind::Select),
            "checkbox" => Ok(FieldKind::Checkbox),
            other => Err(StoreError::InvalidFieldKind(other.to_string())),
        }
    }
}
