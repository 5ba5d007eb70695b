use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of constraint that can be attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Required => write!(f, "required"),
        }
    }
}

/// A named constraint attached to a field, serialized as `{"type": "required"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
}

impl ValidationRule {
    pub fn new(kind: RuleKind) -> Self {
        Self { kind }
    }

    pub fn required() -> Self {
        Self::new(RuleKind::Required)
    }
}

/// How `add_validation_rule` treats a rule kind that is already attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RulePolicy {
    /// Rules form a sequence; repeated adds append duplicates.
    #[default]
    Sequence,
    /// Rules form a set keyed by kind; repeated adds are ignored.
    Deduplicate,
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub message: String,
}

/// Outcome of the last validation pass over a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValidationResult {
    /// Not validated since the field was created or last edited.
    #[default]
    Negative,
    /// Validated; an empty `errors` list means every rule passed.
    Positive { errors: Vec<ValidationError> },
}

impl ValidationResult {
    pub fn is_validated(&self) -> bool {
        matches!(self, ValidationResult::Positive { .. })
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Negative => &[],
            ValidationResult::Positive { errors } => errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Positive { errors } if errors.is_empty())
    }
}
