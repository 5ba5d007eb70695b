//! Pure state transitions over a `FormBuilderState`.
//!
//! No function here mutates its input. Addressing a field that does not
//! exist, or one of the wrong variant, yields a copy of the input state.

use super::IdGenerator;
use crate::error::StoreError;
use crate::field::{
    CheckboxFieldEditables, Field, FieldEdit, FieldId, FieldKind, FieldVariant, OptionId,
    SelectField, SelectFieldEditables, SelectOption, TextFieldEditables,
};
use crate::form::{FormBuilderState, FormField};
use crate::validation::{
    Answers, FieldChecker, RuleKind, RulePolicy, ValidationResult, ValidationRule,
};

// Fresh draws before falling back to suffixing a taken id.
const MAX_DRAWS: usize = 16;

/// Appends a new field of the requested kind with default attributes.
pub fn add_field(
    state: &FormBuilderState,
    kind: FieldKind,
    ids: &mut dyn IdGenerator,
) -> FormBuilderState {
    append_field(state, kind, ids).0
}

/// Like [`add_field`], also returning the id assigned to the new field.
pub fn append_field(
    state: &FormBuilderState,
    kind: FieldKind,
    ids: &mut dyn IdGenerator,
) -> (FormBuilderState, FieldId) {
    let id = fresh_field_id(state, ids);
    log::debug!("Adding {} field '{}'", kind, id);
    let mut next = state.clone();
    next.value.push(FormField::new(Field::new(kind, id.clone())));
    (next, id)
}

/// Removes the field with the given id, if present.
pub fn remove_field(state: &FormBuilderState, id: &str) -> FormBuilderState {
    let mut next = state.clone();
    next.value.retain(|f| f.id().as_str() != id);
    if next.len() == state.len() {
        log::debug!("remove_field: field '{}' not found; state unchanged", id);
    }
    next
}

/// Merges a partial update into the field, provided it is of the edit's variant.
pub fn update_field<E: FieldEdit>(
    state: &FormBuilderState,
    id: &str,
    edit: E,
) -> FormBuilderState {
    modify_variant::<E::Variant>(state, id, "update_field", |variant| {
        edit.apply_to(variant);
        true
    })
}

pub fn update_text_field(
    state: &FormBuilderState,
    id: &str,
    edit: TextFieldEditables,
) -> FormBuilderState {
    update_field(state, id, edit)
}

pub fn update_select_field(
    state: &FormBuilderState,
    id: &str,
    edit: SelectFieldEditables,
) -> FormBuilderState {
    update_field(state, id, edit)
}

pub fn update_checkbox_field(
    state: &FormBuilderState,
    id: &str,
    edit: CheckboxFieldEditables,
) -> FormBuilderState {
    update_field(state, id, edit)
}

/// Appends an option with a fresh id. Equal values are not deduplicated.
pub fn add_select_option(
    state: &FormBuilderState,
    id: &str,
    value: impl Into<String>,
    ids: &mut dyn IdGenerator,
) -> FormBuilderState {
    let value = value.into();
    modify_variant::<SelectField>(state, id, "add_select_option", |select| {
        let option_id = fresh_option_id(select, ids);
        select.options.push(SelectOption {
            id: option_id,
            value,
        });
        true
    })
}

/// Removes the option with the given id from a select field.
pub fn remove_select_option(
    state: &FormBuilderState,
    id: &str,
    option: &OptionId,
) -> FormBuilderState {
    modify_variant::<SelectField>(state, id, "remove_select_option", |select| {
        let removed = select.remove_option(option);
        if !removed {
            log::debug!(
                "remove_select_option: option '{}' not found on field '{}'",
                option,
                id
            );
        }
        removed
    })
}

/// Attaches a rule to any field. Under `RulePolicy::Sequence` a rule of a
/// kind that is already attached is appended again.
pub fn add_validation_rule(
    state: &FormBuilderState,
    field_id: &str,
    kind: RuleKind,
    policy: RulePolicy,
) -> FormBuilderState {
    modify(state, state.position(field_id), "add_validation_rule", |field| {
        if policy == RulePolicy::Deduplicate && field.has_rule(kind) {
            return false;
        }
        field.rules.push(ValidationRule::new(kind));
        true
    })
}

/// Detaches every rule of the given kind from a field.
pub fn remove_validation_rule(
    state: &FormBuilderState,
    field_id: &str,
    kind: RuleKind,
) -> FormBuilderState {
    modify(state, state.position(field_id), "remove_validation_rule", |field| {
        let before = field.rules.len();
        field.rules.retain(|r| r.kind != kind);
        field.rules.len() != before
    })
}

/// Runs every field's rules against the submitted answers and records the
/// outcome in each field's `result`.
pub fn validate(state: &FormBuilderState, answers: &Answers) -> FormBuilderState {
    let value = state
        .value
        .iter()
        .map(|field| FormField {
            result: FieldChecker::check(field, answers.get(field.id().as_str())),
            ..field.clone()
        })
        .collect();
    FormBuilderState { value }
}

/// Applies `edit` to the located field. A successful edit invalidates the
/// field's previous validation result.
fn modify<F>(
    state: &FormBuilderState,
    located: Result<usize, StoreError>,
    operation: &str,
    edit: F,
) -> FormBuilderState
where
    F: FnOnce(&mut FormField) -> bool,
{
    let index = match located {
        Ok(index) => index,
        Err(e) => {
            log::debug!("{}: {}; state unchanged", operation, e);
            return state.clone();
        }
    };

    let mut next = state.clone();
    let field = &mut next.value[index];
    if edit(field) {
        field.result = ValidationResult::Negative;
    }
    next
}

fn modify_variant<V: FieldVariant>(
    state: &FormBuilderState,
    id: &str,
    operation: &str,
    edit: impl FnOnce(&mut V) -> bool,
) -> FormBuilderState {
    modify(state, state.position_of::<V>(id), operation, |field| {
        V::from_field_mut(&mut field.field).is_some_and(edit)
    })
}

fn fresh_field_id(state: &FormBuilderState, ids: &mut dyn IdGenerator) -> FieldId {
    let mut id = ids.field_id();
    let mut attempt = 0;
    while state.contains(id.as_str()) {
        attempt += 1;
        id = if attempt < MAX_DRAWS {
            ids.field_id()
        } else {
            FieldId::new(format!("{}-{}", id, attempt))
        };
    }
    id
}

fn fresh_option_id(select: &SelectField, ids: &mut dyn IdGenerator) -> OptionId {
    let mut id = ids.option_id();
    let mut attempt = 0;
    while select.has_option(&id) {
        attempt += 1;
        id = if attempt < MAX_DRAWS {
            ids.option_id()
        } else {
            OptionId::new(format!("{}-{}", id, attempt))
        };
    }
    id
}
