use crate::field::{
    CheckboxFieldEditables, FieldId, FieldKind, OptionId, SelectFieldEditables,
    TextFieldEditables,
};
use crate::validation::{Answers, RuleKind};
use serde::{Deserialize, Serialize};

/// A partial update addressed to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targeted<E> {
    pub id: FieldId,
    #[serde(flatten)]
    pub edit: E,
}

impl<E> Targeted<E> {
    pub fn new(id: impl Into<FieldId>, edit: E) -> Self {
        Self {
            id: id.into(),
            edit,
        }
    }
}

/// Reference to an existing option. Only the id is used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRef {
    pub id: OptionId,
}

/// Every state transition the store accepts, in dispatchable form.
///
/// Serialized as `{"type": "addField", "payload": "text"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    AddField(FieldKind),
    RemoveField(FieldId),
    UpdateTextField(Targeted<TextFieldEditables>),
    UpdateSelectField(Targeted<SelectFieldEditables>),
    UpdateCheckboxField(Targeted<CheckboxFieldEditables>),
    AddSelectOption {
        id: FieldId,
        value: String,
    },
    RemoveSelectOption {
        id: FieldId,
        option: OptionRef,
    },
    AddValidationRule {
        #[serde(rename = "fieldId")]
        field_id: FieldId,
        #[serde(rename = "type")]
        kind: RuleKind,
    },
    RemoveValidationRule {
        #[serde(rename = "fieldId")]
        field_id: FieldId,
        #[serde(rename = "type")]
        kind: RuleKind,
    },
    Validate(Answers),
}

impl Action {
    /// The `type` tag of the action, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddField(_) => "addField",
            Action::RemoveField(_) => "removeField",
            Action::UpdateTextField(_) => "updateTextField",
            Action::UpdateSelectField(_) => "updateSelectField",
            Action::UpdateCheckboxField(_) => "updateCheckboxField",
            Action::AddSelectOption { .. } => "addSelectOption",
            Action::RemoveSelectOption { .. } => "removeSelectOption",
            Action::AddValidationRule { .. } => "addValidationRule",
            Action::RemoveValidationRule { .. } => "removeValidationRule",
            Action::Validate(_) => "validate",
        }
    }
}
