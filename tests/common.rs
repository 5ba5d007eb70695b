//! Common test utilities for building stores and form definitions.
use formdef::prelude::*;

/// A store with deterministic `field-N` / `option-N` ids.
#[allow(dead_code)]
pub fn sequential_store() -> FormStore {
    FormStore::builder()
        .with_id_generator(SequentialIds::new())
        .build()
}

/// A store that treats validation rules as a set.
#[allow(dead_code)]
pub fn dedupe_store() -> FormStore {
    FormStore::builder()
        .with_id_generator(SequentialIds::new())
        .with_rule_policy(RulePolicy::Deduplicate)
        .build()
}

/// A small sign-up form:
///
/// - `field-1`: text "Name", required
/// - `field-2`: select "Plan" with options Free (`option-1`) and Pro (`option-2`), default Free
/// - `field-3`: checkbox "Accept terms", required
#[allow(dead_code)]
pub fn create_signup_store() -> FormStore {
    let mut store = sequential_store();

    let name = store.add_field(FieldKind::Text);
    store.update_text_field(&name, TextFieldEditables::label("Name"));
    store.add_validation_rule(&name, RuleKind::Required);

    let plan = store.add_field(FieldKind::Select);
    store.update_select_field(&plan, SelectFieldEditables::label("Plan"));
    store.add_select_option(&plan, "Free");
    store.add_select_option(&plan, "Pro");
    store.update_select_field(&plan, SelectFieldEditables::default_value("Free"));

    let terms = store.add_field(FieldKind::Checkbox);
    store.update_checkbox_field(&terms, CheckboxFieldEditables::label("Accept terms"));
    store.add_validation_rule(&terms, RuleKind::Required);

    store
}

/// Looks up a field that the test expects to exist.
#[allow(dead_code)]
pub fn field<'a>(state: &'a FormBuilderState, id: &str) -> &'a FormField {
    state
        .find(id)
        .unwrap_or_else(|| panic!("field '{}' should exist", id))
}

#[allow(dead_code)]
pub fn select<'a>(state: &'a FormBuilderState, id: &str) -> &'a SelectField {
    field(state, id)
        .as_variant::<SelectField>()
        .unwrap_or_else(|| panic!("field '{}' should be a select field", id))
}

#[allow(dead_code)]
pub fn text<'a>(state: &'a FormBuilderState, id: &str) -> &'a TextField {
    field(state, id)
        .as_variant::<TextField>()
        .unwrap_or_else(|| panic!("field '{}' should be a text field", id))
}

/// The option values of a select field, in display order.
#[allow(dead_code)]
pub fn option_values(state: &FormBuilderState, id: &str) -> Vec<String> {
    select(state, id)
        .options
        .iter()
        .map(|o| o.value.clone())
        .collect()
}

/// An action script using the sign-up form's ids, in its JSON form.
#[allow(dead_code)]
pub const SIGNUP_SCRIPT_JSON: &str = r#"{
  "actions": [
    { "type": "addField", "payload": "text" },
    { "type": "updateTextField", "payload": { "id": "field-1", "label": "Name" } },
    { "type": "addValidationRule", "payload": { "fieldId": "field-1", "type": "required" } },
    { "type": "addField", "payload": "select" },
    { "type": "updateSelectField", "payload": { "id": "field-2", "label": "Plan" } },
    { "type": "addSelectOption", "payload": { "id": "field-2", "value": "Free" } },
    { "type": "addSelectOption", "payload": { "id": "field-2", "value": "Pro" } },
    { "type": "updateSelectField", "payload": { "id": "field-2", "defaultValue": "Free" } },
    { "type": "addField", "payload": "checkbox" },
    { "type": "updateCheckboxField", "payload": { "id": "field-3", "label": "Accept terms" } },
    { "type": "addValidationRule", "payload": { "fieldId": "field-3", "type": "required" } }
  ]
}"#;
