use crate::error::ScriptError;
use crate::store::Action;
use serde::{Deserialize, Serialize};
use std::fs;

/// An ordered list of actions, as read from a JSON file.
///
/// ```json
/// {
///   "actions": [
///     { "type": "addField", "payload": "select" },
///     { "type": "addSelectOption", "payload": { "id": "field-1", "value": "Red" } }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ActionScript {
    pub actions: Vec<Action>,
}

impl ActionScript {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Load a script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
