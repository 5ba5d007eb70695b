use crate::field::FieldKind;
use thiserror::Error;

/// Errors that can occur while addressing fields in the form definition.
///
/// Reducers never return `FieldNotFound` or `TypeMismatch` to their caller;
/// they are produced while locating a field and absorbed as no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown field kind '{0}', expected one of: text, select, checkbox")]
    InvalidFieldKind(String),

    #[error("Field '{id}' not found in the form definition")]
    FieldNotFound { id: String },

    #[error("Field '{id}' is a {found} field, but the operation expects a {expected} field")]
    TypeMismatch {
        id: String,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Errors that can occur when loading an action script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not read script file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse action script JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
