//! Partial-update payloads for each field variant.
//!
//! Every attribute is optional: a missing key means "not supplied" and leaves
//! the current value untouched. Attributes that may be absent on the field
//! (labels, text and select defaults) also accept an explicit `null`, which
//! clears them.

use super::{CheckboxField, FieldVariant, SelectField, SelectOption, TextField};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

/// A partial update that can only be applied to one field variant.
pub trait FieldEdit {
    type Variant: FieldVariant;

    /// Merges the supplied attributes into the variant.
    fn apply_to(self, variant: &mut Self::Variant);
}

// Maps a present key to `Some`, so `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextFieldEditables {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub label: Option<Option<String>>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Option<String>>,
}

impl TextFieldEditables {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(Some(label.into())),
            ..Self::default()
        }
    }

    pub fn default_value(value: impl Into<String>) -> Self {
        Self {
            default_value: Some(Some(value.into())),
            ..Self::default()
        }
    }

    pub fn clear_label() -> Self {
        Self {
            label: Some(None),
            ..Self::default()
        }
    }

    pub fn clear_default() -> Self {
        Self {
            default_value: Some(None),
            ..Self::default()
        }
    }
}

impl FieldEdit for TextFieldEditables {
    type Variant = TextField;

    fn apply_to(self, field: &mut TextField) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(value) = self.default_value {
            field.default_value = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectFieldEditables {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub label: Option<Option<String>>,
    /// Value of the option to preselect. It is stored even when no option
    /// carries it yet; see [`SelectField::selected`].
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Option<String>>,
    /// Replaces the whole option list. Ignored if two options share an id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl SelectFieldEditables {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(Some(label.into())),
            ..Self::default()
        }
    }

    pub fn default_value(value: impl Into<String>) -> Self {
        Self {
            default_value: Some(Some(value.into())),
            ..Self::default()
        }
    }

    pub fn options(options: Vec<SelectOption>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }

    pub fn clear_label() -> Self {
        Self {
            label: Some(None),
            ..Self::default()
        }
    }

    pub fn clear_default() -> Self {
        Self {
            default_value: Some(None),
            ..Self::default()
        }
    }
}

impl FieldEdit for SelectFieldEditables {
    type Variant = SelectField;

    fn apply_to(self, field: &mut SelectField) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(value) = self.default_value {
            field.default_value = value;
        }
        if let Some(options) = self.options {
            if options.iter().map(|o| &o.id).all_unique() {
                field.options = options;
            } else {
                log::debug!(
                    "Ignoring options for select field '{}': option ids are not unique",
                    field.id
                );
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxFieldEditables {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub label: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

impl CheckboxFieldEditables {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(Some(label.into())),
            ..Self::default()
        }
    }

    pub fn default_value(checked: bool) -> Self {
        Self {
            default_value: Some(checked),
            ..Self::default()
        }
    }

    pub fn clear_label() -> Self {
        Self {
            label: Some(None),
            ..Self::default()
        }
    }
}

impl FieldEdit for CheckboxFieldEditables {
    type Variant = CheckboxField;

    fn apply_to(self, field: &mut CheckboxField) {
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(checked) = self.default_value {
            field.default_value = checked;
        }
    }
}
