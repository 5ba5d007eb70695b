//! Read-only projection of a form definition, shaped for rendering.

use crate::field::{Field, FieldId, FieldKind};
use crate::form::{FormBuilderState, FormField};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// The value a rendered input starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreviewDefault {
    Text(String),
    Checked(bool),
    /// The value of the preselected option, if any.
    Selected(Option<String>),
}

/// Everything a renderer needs to draw one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    pub default_value: PreviewDefault,
    pub options: Vec<String>,
    pub required: bool,
}

impl From<&FormField> for PreviewField {
    fn from(form_field: &FormField) -> Self {
        let (default_value, options) = match &form_field.field {
            Field::Text(text) => (
                PreviewDefault::Text(text.default_value.clone().unwrap_or_default()),
                Vec::new(),
            ),
            Field::Checkbox(checkbox) => {
                (PreviewDefault::Checked(checkbox.default_value), Vec::new())
            }
            Field::Select(select) => (
                PreviewDefault::Selected(select.selected().map(str::to_string)),
                select.options.iter().map(|o| o.value.clone()).collect(),
            ),
        };

        Self {
            id: form_field.id().clone(),
            kind: form_field.kind(),
            label: form_field.field.label().unwrap_or_default().to_string(),
            default_value,
            options,
            required: form_field.is_required(),
        }
    }
}

impl fmt::Display for PreviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.required { "*" } else { "" };
        write!(f, "[{}] {}{}", self.kind, self.label, marker)?;
        match &self.default_value {
            PreviewDefault::Text(value) => write!(f, " = {:?}", value),
            PreviewDefault::Checked(checked) => {
                write!(f, " = {}", if *checked { "checked" } else { "unchecked" })
            }
            PreviewDefault::Selected(selected) => {
                write!(f, " = {}", selected.as_deref().unwrap_or("(none)"))?;
                write!(f, " {{{}}}", self.options.iter().join(" | "))
            }
        }
    }
}

/// The rendered form, one entry per field in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormPreview {
    pub fields: Vec<PreviewField>,
}

impl FormPreview {
    pub fn from_state(state: &FormBuilderState) -> Self {
        Self {
            fields: state.fields().iter().map(PreviewField::from).collect(),
        }
    }

    pub fn required_ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().filter(|f| f.required).map(|f| &f.id)
    }
}

impl fmt::Display for FormPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "(empty form)");
        }
        write!(f, "{}", self.fields.iter().join("\n"))
    }
}
