//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the formdef crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use formdef::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let script = ActionScript::from_file("path/to/script.json")?;
//! let mut store = FormStore::builder()
//!     .with_id_generator(SequentialIds::new())
//!     .build();
//! let state = store.replay(&script);
//! println!("{}", serde_json::to_string_pretty(state)?);
//! # Ok(())
//! # }
//! ```

// Store and reducers
pub use crate::store::{
    Action, FormStore, IdGenerator, OptionRef, RandomIds, SequentialIds, SharedStore,
    StoreBuilder, Targeted, reducer,
};

// Model types
pub use crate::field::{
    CheckboxField, CheckboxFieldEditables, Field, FieldEdit, FieldId, FieldKind, FieldVariant,
    OptionId, SelectField, SelectFieldEditables, SelectOption, TextField, TextFieldEditables,
};
pub use crate::form::{FormBuilderState, FormField};

// Validation
pub use crate::validation::{
    Answer, Answers, FieldChecker, RuleKind, RulePolicy, ValidationError, ValidationResult,
    ValidationRule,
};

// Rendering and scripts
pub use crate::preview::{FormPreview, PreviewDefault, PreviewField};
pub use crate::script::ActionScript;

// Error types
pub use crate::error::{ScriptError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
