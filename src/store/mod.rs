pub mod action;
mod builder;
mod ids;
pub mod reducer;
mod shared;

pub use action::{Action, OptionRef, Targeted};
pub use builder::StoreBuilder;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use shared::SharedStore;

use crate::field::{
    CheckboxFieldEditables, FieldId, FieldKind, OptionId, SelectField, SelectFieldEditables,
    TextFieldEditables,
};
use crate::form::{FormBuilderState, FormField};
use crate::script::ActionScript;
use crate::validation::{Answers, RuleKind, RulePolicy};

/// The single owner and writer of a form definition.
///
/// Every transition replaces the held state with the value computed by the
/// matching function in [`reducer`]; readers only ever see whole states.
pub struct FormStore {
    state: FormBuilderState,
    ids: Box<dyn IdGenerator>,
    rule_policy: RulePolicy,
}

impl FormStore {
    /// An empty store with random ids and the `Sequence` rule policy.
    pub fn new() -> Self {
        StoreBuilder::new().build()
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub fn state(&self) -> &FormBuilderState {
        &self.state
    }

    pub fn fields(&self) -> &[FormField] {
        self.state.fields()
    }

    pub fn snapshot(&self) -> FormBuilderState {
        self.state.clone()
    }

    pub fn rule_policy(&self) -> RulePolicy {
        self.rule_policy
    }

    /// Applies one action and returns the resulting state.
    pub fn dispatch(&mut self, action: Action) -> &FormBuilderState {
        log::trace!("Dispatching '{}'", action.name());
        let state = &self.state;
        let next = match action {
            Action::AddField(kind) => reducer::add_field(state, kind, self.ids.as_mut()),
            Action::RemoveField(id) => reducer::remove_field(state, id.as_str()),
            Action::UpdateTextField(Targeted { id, edit }) => {
                reducer::update_text_field(state, id.as_str(), edit)
            }
            Action::UpdateSelectField(Targeted { id, edit }) => {
                reducer::update_select_field(state, id.as_str(), edit)
            }
            Action::UpdateCheckboxField(Targeted { id, edit }) => {
                reducer::update_checkbox_field(state, id.as_str(), edit)
            }
            Action::AddSelectOption { id, value } => {
                reducer::add_select_option(state, id.as_str(), value, self.ids.as_mut())
            }
            Action::RemoveSelectOption { id, option } => {
                reducer::remove_select_option(state, id.as_str(), &option.id)
            }
            Action::AddValidationRule { field_id, kind } => {
                reducer::add_validation_rule(state, field_id.as_str(), kind, self.rule_policy)
            }
            Action::RemoveValidationRule { field_id, kind } => {
                reducer::remove_validation_rule(state, field_id.as_str(), kind)
            }
            Action::Validate(answers) => reducer::validate(state, &answers),
        };
        self.state = next;
        &self.state
    }

    /// Applies every action of a script in order.
    pub fn replay(&mut self, script: &ActionScript) -> &FormBuilderState {
        log::info!("Replaying script with {} actions", script.actions.len());
        for action in &script.actions {
            self.dispatch(action.clone());
        }
        log::info!("Script finished; form has {} fields", self.state.len());
        &self.state
    }

    /// Adds a field and returns its id.
    pub fn add_field(&mut self, kind: FieldKind) -> FieldId {
        let (next, id) = reducer::append_field(&self.state, kind, self.ids.as_mut());
        self.state = next;
        id
    }

    pub fn remove_field(&mut self, id: &FieldId) -> &FormBuilderState {
        self.dispatch(Action::RemoveField(id.clone()))
    }

    pub fn update_text_field(
        &mut self,
        id: &FieldId,
        edit: TextFieldEditables,
    ) -> &FormBuilderState {
        self.dispatch(Action::UpdateTextField(Targeted::new(id.clone(), edit)))
    }

    pub fn update_select_field(
        &mut self,
        id: &FieldId,
        edit: SelectFieldEditables,
    ) -> &FormBuilderState {
        self.dispatch(Action::UpdateSelectField(Targeted::new(id.clone(), edit)))
    }

    pub fn update_checkbox_field(
        &mut self,
        id: &FieldId,
        edit: CheckboxFieldEditables,
    ) -> &FormBuilderState {
        self.dispatch(Action::UpdateCheckboxField(Targeted::new(id.clone(), edit)))
    }

    /// Adds an option to a select field and returns the new option's id, or
    /// `None` when no select field has that id.
    pub fn add_select_option(
        &mut self,
        id: &FieldId,
        value: impl Into<String>,
    ) -> Option<OptionId> {
        self.dispatch(Action::AddSelectOption {
            id: id.clone(),
            value: value.into(),
        });
        self.state
            .find(id.as_str())
            .and_then(|f| f.as_variant::<SelectField>())
            .and_then(|select| select.options.last())
            .map(|option| option.id.clone())
    }

    pub fn remove_select_option(
        &mut self,
        id: &FieldId,
        option: &OptionId,
    ) -> &FormBuilderState {
        self.dispatch(Action::RemoveSelectOption {
            id: id.clone(),
            option: OptionRef { id: option.clone() },
        })
    }

    pub fn add_validation_rule(
        &mut self,
        field_id: &FieldId,
        kind: RuleKind,
    ) -> &FormBuilderState {
        self.dispatch(Action::AddValidationRule {
            field_id: field_id.clone(),
            kind,
        })
    }

    pub fn remove_validation_rule(
        &mut self,
        field_id: &FieldId,
        kind: RuleKind,
    ) -> &FormBuilderState {
        self.dispatch(Action::RemoveValidationRule {
            field_id: field_id.clone(),
            kind,
        })
    }

    pub fn validate(&mut self, answers: Answers) -> &FormBuilderState {
        self.dispatch(Action::Validate(answers))
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
