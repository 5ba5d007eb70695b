//! Tests for the read-only preview projection.
mod common;
use common::*;
use formdef::prelude::*;

#[test]
fn test_preview_reflects_fields_in_order() {
    let store = create_signup_store();
    let preview = FormPreview::from_state(store.state());

    let kinds: Vec<_> = preview.fields.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Text, FieldKind::Select, FieldKind::Checkbox]
    );

    let plan = &preview.fields[1];
    assert_eq!(plan.label, "Plan");
    assert_eq!(plan.options, vec!["Free", "Pro"]);
    assert_eq!(plan.default_value, PreviewDefault::Selected(Some("Free".to_string())));
    assert!(!plan.required);
}

#[test]
fn test_preview_required_flag_follows_rules() {
    let mut store = create_signup_store();
    let required: Vec<_> = FormPreview::from_state(store.state())
        .required_ids()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(required, vec!["field-1", "field-3"]);

    store.remove_validation_rule(&FieldId::from("field-1"), RuleKind::Required);
    let preview = FormPreview::from_state(store.state());
    assert!(!preview.fields[0].required);
}

#[test]
fn test_preview_text_rendering() {
    let store = create_signup_store();
    let rendered = FormPreview::from_state(store.state()).to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[text] Name* = \"\"");
    assert_eq!(lines[1], "[select] Plan = Free {Free | Pro}");
    assert_eq!(lines[2], "[checkbox] Accept terms* = unchecked");
}

#[test]
fn test_preview_of_empty_form() {
    let preview = FormPreview::from_state(&FormBuilderState::new());
    assert!(preview.fields.is_empty());
    assert_eq!(preview.to_string(), "(empty form)");
}

#[test]
fn test_unlabelled_field_renders_empty_label() {
    let mut store = sequential_store();
    store.add_field(FieldKind::Select);
    let preview = FormPreview::from_state(store.state());
    assert_eq!(preview.fields[0].label, "");
    assert_eq!(preview.to_string(), "[select]  = (none) {}");
}

#[test]
fn test_default_without_matching_option_renders_as_none() {
    let mut store = create_signup_store();
    store.remove_select_option(&FieldId::from("field-2"), &OptionId::from("option-1"));

    let preview = FormPreview::from_state(store.state());
    assert_eq!(preview.fields[1].default_value, PreviewDefault::Selected(None));
    assert_eq!(preview.fields[1].to_string(), "[select] Plan = (none) {Pro}");
}
