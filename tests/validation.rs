//! Tests for the validation pass over submitted answers.
mod common;
use common::*;
use formdef::prelude::*;

fn answers(pairs: &[(&str, Answer)]) -> Answers {
    pairs
        .iter()
        .map(|(id, answer)| (FieldId::from(*id), answer.clone()))
        .collect()
}

#[test]
fn test_fields_start_unvalidated() {
    let store = create_signup_store();
    for f in store.fields() {
        assert!(!f.result.is_validated());
        assert!(f.result.errors().is_empty());
    }
}

#[test]
fn test_missing_answers_fall_back_to_defaults() {
    let mut store = create_signup_store();
    let state = store.validate(Answers::new()).clone();

    // Empty default text and an unchecked box fail; the select defaults to "Free".
    assert_eq!(field(&state, "field-1").result.errors().len(), 1);
    assert!(field(&state, "field-2").result.is_valid());
    let terms = &field(&state, "field-3").result;
    assert_eq!(terms.errors().len(), 1);
    assert_eq!(terms.errors()[0].kind, RuleKind::Required);
    assert_eq!(terms.errors()[0].message, "This box must be checked");
}

#[test]
fn test_complete_answers_pass() {
    let mut store = create_signup_store();
    let state = store
        .validate(answers(&[
            ("field-1", Answer::from("Ada")),
            ("field-2", Answer::from("Pro")),
            ("field-3", Answer::from(true)),
        ]))
        .clone();

    for f in state.fields() {
        assert!(f.result.is_valid(), "field {} should be valid", f.id());
    }
}

#[test]
fn test_blank_text_fails_required() {
    let mut store = create_signup_store();
    let state = store.validate(answers(&[("field-1", Answer::from("   "))]));
    let errors = field(state, "field-1").result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "This field is required");
}

#[test]
fn test_select_answer_must_be_an_option() {
    let mut store = create_signup_store();
    store.add_validation_rule(&FieldId::from("field-2"), RuleKind::Required);

    let state = store.validate(answers(&[("field-2", Answer::from("Enterprise"))]));
    let errors = field(state, "field-2").result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Please select one of the options");
}

#[test]
fn test_select_without_default_fails_required() {
    let mut store = sequential_store();
    let id = store.add_field(FieldKind::Select);
    store.add_select_option(&id, "Red");
    store.add_validation_rule(&id, RuleKind::Required);

    let state = store.validate(Answers::new());
    assert!(!field(state, id.as_str()).result.is_valid());
}

#[test]
fn test_default_without_matching_option_fails_required() {
    let mut store = create_signup_store();
    let plan = FieldId::from("field-2");
    store.add_validation_rule(&plan, RuleKind::Required);
    store.update_select_field(&plan, SelectFieldEditables::default_value("Enterprise"));

    let state = store.validate(Answers::new());
    let errors = field(state, "field-2").result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Please select one of the options");
}

#[test]
fn test_answer_of_wrong_shape_fails_required() {
    let mut store = create_signup_store();
    let state = store.validate(answers(&[("field-1", Answer::from(true))]));
    let errors = field(state, "field-1").result.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Expected a text answer"));
}

#[test]
fn test_optional_fields_always_pass() {
    let mut store = sequential_store();
    let id = store.add_field(FieldKind::Checkbox);
    let state = store.validate(answers(&[(id.as_str(), Answer::from("not a bool"))]));
    assert_eq!(
        field(state, id.as_str()).result,
        ValidationResult::Positive { errors: vec![] }
    );
}

#[test]
fn test_duplicate_rules_report_once() {
    let mut store = sequential_store();
    let id = store.add_field(FieldKind::Text);
    store.add_validation_rule(&id, RuleKind::Required);
    store.add_validation_rule(&id, RuleKind::Required);

    let state = store.validate(Answers::new());
    assert_eq!(field(state, id.as_str()).result.errors().len(), 1);
}

#[test]
fn test_editing_a_field_resets_its_result() {
    let mut store = create_signup_store();
    store.validate(Answers::new());
    assert!(field(store.state(), "field-1").result.is_validated());

    store.update_text_field(&FieldId::from("field-1"), TextFieldEditables::default_value("Ada"));
    assert_eq!(field(store.state(), "field-1").result, ValidationResult::Negative);
    // Untouched fields keep their result.
    assert!(field(store.state(), "field-3").result.is_validated());
}

#[test]
fn test_noop_edit_keeps_result() {
    let mut store = create_signup_store();
    store.validate(Answers::new());
    let before = store.snapshot();

    store.remove_select_option(&FieldId::from("field-2"), &OptionId::from("option-42"));
    store.remove_validation_rule(&FieldId::from("field-2"), RuleKind::Required);

    assert_eq!(store.state(), &before);
}

#[test]
fn test_checker_directly() {
    let mut form_field = FormField::new(Field::Checkbox(CheckboxField::new(FieldId::from("c"))));
    form_field.rules.push(ValidationRule::required());

    assert!(FieldChecker::check(&form_field, Some(&Answer::Checked(true))).is_valid());
    assert!(!FieldChecker::check(&form_field, Some(&Answer::Checked(false))).is_valid());
    assert!(!FieldChecker::check(&form_field, None).is_valid());
}
