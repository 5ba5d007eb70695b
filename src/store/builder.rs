use super::{FormStore, IdGenerator, RandomIds};
use crate::form::FormBuilderState;
use crate::validation::RulePolicy;

/// Configures a `FormStore` before it takes ownership of its state.
pub struct StoreBuilder {
    ids: Option<Box<dyn IdGenerator>>,
    rule_policy: RulePolicy,
    initial: FormBuilderState,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            ids: None,
            rule_policy: RulePolicy::default(),
            initial: FormBuilderState::new(),
        }
    }

    /// Replaces the default random id generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn with_rule_policy(mut self, policy: RulePolicy) -> Self {
        self.rule_policy = policy;
        self
    }

    /// Starts the store from an existing definition instead of an empty one.
    pub fn with_state(mut self, state: FormBuilderState) -> Self {
        self.initial = state;
        self
    }

    pub fn build(self) -> FormStore {
        FormStore {
            state: self.initial,
            ids: self.ids.unwrap_or_else(|| Box::new(RandomIds::new())),
            rule_policy: self.rule_policy,
        }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
