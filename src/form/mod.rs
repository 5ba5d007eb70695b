use crate::error::StoreError;
use crate::field::{Field, FieldId, FieldKind, FieldVariant, SelectField};
use crate::validation::{RuleKind, ValidationResult, ValidationRule};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A field together with its validation rules and last validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(flatten)]
    pub field: Field,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
    #[serde(default)]
    pub result: ValidationResult,
}

impl FormField {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
            result: ValidationResult::Negative,
        }
    }

    pub fn id(&self) -> &FieldId {
        self.field.id()
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind()
    }

    pub fn has_rule(&self, kind: RuleKind) -> bool {
        self.rules.iter().any(|r| r.kind == kind)
    }

    /// A field is required when at least one `required` rule is attached.
    pub fn is_required(&self) -> bool {
        self.has_rule(RuleKind::Required)
    }

    /// Borrows the field as a specific variant, if it is one.
    pub fn as_variant<V: FieldVariant>(&self) -> Option<&V> {
        V::from_field(&self.field)
    }
}

/// The ordered collection of every field in the form being built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBuilderState {
    pub value: Vec<FormField>,
}

impl FormBuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&FormField> {
        self.value.iter().find(|f| f.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.value.iter().map(FormField::id)
    }

    /// Checks the id-uniqueness invariants: field ids across the form and
    /// option ids within every select field.
    pub fn has_unique_ids(&self) -> bool {
        self.ids().all_unique()
            && self
                .value
                .iter()
                .filter_map(|f| f.as_variant::<SelectField>())
                .all(|select| select.options.iter().map(|o| &o.id).all_unique())
    }

    /// Index of the field with the given id.
    pub(crate) fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.value
            .iter()
            .position(|f| f.id().as_str() == id)
            .ok_or_else(|| StoreError::FieldNotFound { id: id.to_string() })
    }

    /// Index of the field with the given id, checked against the expected variant.
    pub(crate) fn position_of<V: FieldVariant>(&self, id: &str) -> Result<usize, StoreError> {
        let index = self.position(id)?;
        let found = self.value[index].kind();
        if found != V::KIND {
            return Err(StoreError::TypeMismatch {
                id: id.to_string(),
                expected: V::KIND,
                found,
            });
        }
        Ok(index)
    }
}
