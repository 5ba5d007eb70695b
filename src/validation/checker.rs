use super::{RuleKind, ValidationError, ValidationResult};
use crate::field::{Field, FieldId};
use crate::form::FormField;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A value submitted for one field of the rendered form.
///
/// Select fields are answered with the chosen option's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Checked(bool),
    Text(String),
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<bool> for Answer {
    fn from(checked: bool) -> Self {
        Answer::Checked(checked)
    }
}

/// Submitted answers keyed by field id.
pub type Answers = AHashMap<FieldId, Answer>;

/// Checks a field's rules against a submitted answer.
pub struct FieldChecker;

impl FieldChecker {
    /// Validates one field. A missing answer falls back to the field's
    /// default value, which is what the rendered form submits untouched.
    pub fn check(field: &FormField, answer: Option<&Answer>) -> ValidationResult {
        let errors = field
            .rules
            .iter()
            .map(|rule| rule.kind)
            .unique()
            .filter_map(|kind| match kind {
                RuleKind::Required => Self::check_required(&field.field, answer),
            })
            .collect();
        ValidationResult::Positive { errors }
    }

    fn check_required(field: &Field, answer: Option<&Answer>) -> Option<ValidationError> {
        let satisfied = match (field, answer) {
            (Field::Text(_), Some(Answer::Text(value))) => !value.trim().is_empty(),
            (Field::Text(text), None) => text
                .default_value
                .as_deref()
                .is_some_and(|v| !v.trim().is_empty()),
            (Field::Checkbox(_), Some(Answer::Checked(checked))) => *checked,
            (Field::Checkbox(checkbox), None) => checkbox.default_value,
            (Field::Select(select), Some(Answer::Text(value))) => {
                !value.is_empty() && select.has_value(value)
            }
            (Field::Select(select), None) => select.selected().is_some(),
            (_, Some(other)) => {
                return Some(ValidationError {
                    kind: RuleKind::Required,
                    message: format!(
                        "Expected a {} answer for this {} field, got {:?}",
                        Self::expected_answer(field),
                        field.kind(),
                        other
                    ),
                });
            }
        };

        (!satisfied).then(|| ValidationError {
            kind: RuleKind::Required,
            message: match field {
                Field::Checkbox(_) => "This box must be checked".to_string(),
                Field::Select(_) => "Please select one of the options".to_string(),
                Field::Text(_) => "This field is required".to_string(),
            },
        })
    }

    fn expected_answer(field: &Field) -> &'static str {
        match field {
            Field::Checkbox(_) => "checked/unchecked",
            Field::Text(_) | Field::Select(_) => "text",
        }
    }
}
