//! # formdef - Form Definition Store
//!
//! **formdef** holds the definition of a form while it is being built: an ordered
//! list of text, select and checkbox fields, their editable attributes and the
//! validation rules attached to them. Every change goes through a pure reducer
//! that takes the current state and returns a new one, so a front-end can render
//! the editor and a live preview from the same value.
//!
//! ## Core Workflow
//!
//! 1.  **Create a store**: `FormStore::builder()` picks the id generator and the
//!     rule policy, `build()` hands you an empty definition.
//! 2.  **Dispatch actions**: add fields, update their labels and defaults, manage
//!     select options and toggle the `required` rule. Actions addressed to an id
//!     that does not exist (or to a field of another kind) leave the state as is.
//! 3.  **Preview**: `FormPreview::from_state` projects the definition into what a
//!     renderer needs, including the `required` flag derived from the rules.
//! 4.  **Validate** (optional): run the submitted answers through
//!     `FormStore::validate` to fill each field's `result`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formdef::prelude::*;
//!
//! let mut store = FormStore::builder()
//!     .with_id_generator(SequentialIds::new())
//!     .build();
//!
//! let name = store.add_field(FieldKind::Text);
//! store.update_text_field(&name, TextFieldEditables::label("Name"));
//! store.add_validation_rule(&name, RuleKind::Required);
//!
//! let color = store.add_field(FieldKind::Select);
//! store.update_select_field(&color, SelectFieldEditables::label("Favourite colour"));
//! store.add_select_option(&color, "Red");
//! store.add_select_option(&color, "Green");
//!
//! println!("{}", FormPreview::from_state(store.state()));
//!
//! let mut answers = Answers::new();
//! answers.insert(name.clone(), Answer::from(""));
//! let state = store.validate(answers);
//! let errors = state.find(name.as_str()).map(|f| f.result.errors().len());
//! assert_eq!(errors, Some(1));
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod prelude;
pub mod preview;
pub mod script;
pub mod store;
pub mod validation;
