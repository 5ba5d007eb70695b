use super::{FieldId, FieldKind, OptionId};
use serde::{Deserialize, Serialize};

/// A free-text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    pub id: FieldId,
    pub label: Option<String>,
    pub default_value: Option<String>,
}

impl TextField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            label: None,
            default_value: Some(String::new()),
        }
    }
}

/// A single checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxField {
    pub id: FieldId,
    pub label: Option<String>,
    pub default_value: bool,
}

impl CheckboxField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            label: None,
            default_value: false,
        }
    }
}

/// One selectable choice belonging to a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub value: String,
}

/// A drop-down with an ordered list of options.
///
/// The default is stored as an option *value*, not an option id, so two
/// options sharing a value are indistinguishable as defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    pub id: FieldId,
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
    pub default_value: Option<String>,
}

impl SelectField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            label: None,
            options: Vec::new(),
            default_value: None,
        }
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn has_option(&self, id: &OptionId) -> bool {
        self.options.iter().any(|o| &o.id == id)
    }

    /// The default, provided some option still carries that value.
    pub fn selected(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .filter(|value| self.has_value(value))
    }

    /// Removes the option with the given id. Returns `false` if none matched.
    pub fn remove_option(&mut self, id: &OptionId) -> bool {
        let before = self.options.len();
        self.options.retain(|o| &o.id != id);
        self.options.len() != before
    }
}

/// One configurable element of the form being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    Text(TextField),
    Select(SelectField),
    Checkbox(CheckboxField),
}

impl Field {
    /// Creates a field of the requested kind with default attributes.
    pub fn new(kind: FieldKind, id: FieldId) -> Self {
        match kind {
            FieldKind::Text => Field::Text(TextField::new(id)),
            FieldKind::Select => Field::Select(SelectField::new(id)),
            FieldKind::Checkbox => Field::Checkbox(CheckboxField::new(id)),
        }
    }

    pub fn id(&self) -> &FieldId {
        match self {
            Field::Text(f) => &f.id,
            Field::Select(f) => &f.id,
            Field::Checkbox(f) => &f.id,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Text(_) => FieldKind::Text,
            Field::Select(_) => FieldKind::Select,
            Field::Checkbox(_) => FieldKind::Checkbox,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Field::Text(f) => f.label.as_deref(),
            Field::Select(f) => f.label.as_deref(),
            Field::Checkbox(f) => f.label.as_deref(),
        }
    }
}

/// Ties a variant struct to its `Field` alternative, so that operations can be
/// written once and restricted to a single variant by their type parameter.
pub trait FieldVariant: Sized {
    const KIND: FieldKind;

    fn from_field(field: &Field) -> Option<&Self>;
    fn from_field_mut(field: &mut Field) -> Option<&mut Self>;
}

macro_rules! impl_field_variant {
    ($ty:ty, $variant:ident) => {
        impl FieldVariant for $ty {
            const KIND: FieldKind = FieldKind::$variant;

            fn from_field(field: &Field) -> Option<&Self> {
                match field {
                    Field::$variant(f) => Some(f),
                    _ => None,
                }
            }

            fn from_field_mut(field: &mut Field) -> Option<&mut Self> {
                match field {
                    Field::$variant(f) => Some(f),
                    _ => None,
                }
            }
        }
    };
}

impl_field_variant!(TextField, Text);
impl_field_variant!(SelectField, Select);
impl_field_variant!(CheckboxField, Checkbox);
