//! Property tests for the reducer invariants.
mod common;
use common::*;
use formdef::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

/// One user interaction, addressed by index into the current field list.
#[derive(Debug, Clone)]
enum Op {
    Add(FieldKind),
    Remove(usize),
    Label(usize, String),
    AddOption(usize, String),
    RemoveOption(usize, usize),
    Require(usize),
    Unrequire(usize),
}

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Text),
        Just(FieldKind::Select),
        Just(FieldKind::Checkbox),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => kind_strategy().prop_map(Op::Add),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), "[a-z]{0,8}").prop_map(|(i, s)| Op::Label(i, s)),
        2 => (any::<usize>(), "[A-Z][a-z]{0,5}").prop_map(|(i, s)| Op::AddOption(i, s)),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(i, j)| Op::RemoveOption(i, j)),
        1 => any::<usize>().prop_map(Op::Require),
        1 => any::<usize>().prop_map(Op::Unrequire),
    ]
}

fn pick(store: &FormStore, index: usize) -> Option<FieldId> {
    let fields = store.fields();
    (!fields.is_empty()).then(|| fields[index % fields.len()].id().clone())
}

fn apply(store: &mut FormStore, op: &Op) {
    match op {
        Op::Add(kind) => {
            store.add_field(*kind);
        }
        Op::Remove(i) => {
            if let Some(id) = pick(store, *i) {
                store.remove_field(&id);
            }
        }
        Op::Label(i, label) => {
            if let Some(id) = pick(store, *i) {
                store.update_text_field(&id, TextFieldEditables::label(label.clone()));
                store.update_select_field(&id, SelectFieldEditables::label(label.clone()));
                store.update_checkbox_field(&id, CheckboxFieldEditables::label(label.clone()));
            }
        }
        Op::AddOption(i, value) => {
            if let Some(id) = pick(store, *i) {
                store.add_select_option(&id, value.clone());
            }
        }
        Op::RemoveOption(i, j) => {
            if let Some(id) = pick(store, *i) {
                let option = store
                    .state()
                    .find(id.as_str())
                    .and_then(|f| f.as_variant::<SelectField>())
                    .filter(|s| !s.options.is_empty())
                    .map(|s| s.options[j % s.options.len()].id.clone());
                if let Some(option) = option {
                    store.remove_select_option(&id, &option);
                }
            }
        }
        Op::Require(i) => {
            if let Some(id) = pick(store, *i) {
                store.add_validation_rule(&id, RuleKind::Required);
            }
        }
        Op::Unrequire(i) => {
            if let Some(id) = pick(store, *i) {
                store.remove_validation_rule(&id, RuleKind::Required);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn ids_stay_unique_and_kinds_never_change(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = sequential_store();
        let mut kinds: HashMap<FieldId, FieldKind> = HashMap::new();

        for op in &ops {
            let before: Vec<FieldId> = store.state().ids().cloned().collect();
            apply(&mut store, op);
            let after: Vec<FieldId> = store.state().ids().cloned().collect();

            prop_assert!(store.state().has_unique_ids());

            // Surviving fields keep their relative order.
            let survivors: Vec<&FieldId> = before.iter().filter(|id| after.contains(id)).collect();
            let prefix: Vec<&FieldId> = after.iter().take(survivors.len()).collect();
            prop_assert_eq!(survivors, prefix);

            for f in store.fields() {
                let kind = *kinds.entry(f.id().clone()).or_insert(f.kind());
                prop_assert_eq!(kind, f.kind());
            }
        }
    }

    #[test]
    fn unknown_ids_never_change_state(
        ops in prop::collection::vec(op_strategy(), 0..30),
        value in "[a-z]{1,6}",
    ) {
        let mut store = sequential_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let state = store.snapshot();
        let ghost = "no-such-field";
        let mut ids = SequentialIds::new();

        prop_assert_eq!(&reducer::remove_field(&state, ghost), &state);
        let relabelled =
            reducer::update_text_field(&state, ghost, TextFieldEditables::label(value.clone()));
        prop_assert_eq!(&relabelled, &state);
        let with_option = reducer::add_select_option(&state, ghost, value.clone(), &mut ids);
        prop_assert_eq!(&with_option, &state);
        let with_rule =
            reducer::add_validation_rule(&state, ghost, RuleKind::Required, RulePolicy::Sequence);
        prop_assert_eq!(&with_rule, &state);
        let without_rule = reducer::remove_validation_rule(&state, ghost, RuleKind::Required);
        prop_assert_eq!(&without_rule, &state);
    }

    #[test]
    fn add_field_grows_by_exactly_one(
        ops in prop::collection::vec(op_strategy(), 0..30),
        kind in kind_strategy(),
    ) {
        let mut store = sequential_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let before = store.snapshot();
        let id = store.add_field(kind);

        prop_assert_eq!(store.state().len(), before.len() + 1);
        prop_assert!(!before.contains(id.as_str()));
        prop_assert_eq!(&store.fields()[..before.len()], before.fields());
    }

    #[test]
    fn remove_field_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 1..30),
        index in any::<usize>(),
    ) {
        let mut store = sequential_store();
        for op in &ops {
            apply(&mut store, op);
        }
        if let Some(id) = pick(&store, index) {
            let once = reducer::remove_field(store.state(), id.as_str());
            let twice = reducer::remove_field(&once, id.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
