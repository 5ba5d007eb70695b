use super::{Action, FormStore};
use crate::form::FormBuilderState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle to one `FormStore` for callers on several threads.
///
/// Transitions are serialized by a mutex and applied one at a time in the
/// order the lock is acquired.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<FormStore>>,
}

impl SharedStore {
    pub fn new(store: FormStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Applies one action and returns a snapshot of the resulting state.
    pub fn dispatch(&self, action: Action) -> FormBuilderState {
        self.lock().dispatch(action).clone()
    }

    pub fn snapshot(&self) -> FormBuilderState {
        self.lock().snapshot()
    }

    /// Runs `f` against the current state without copying it.
    pub fn read<R>(&self, f: impl FnOnce(&FormBuilderState) -> R) -> R {
        f(self.lock().state())
    }

    // Reducers never leave a half-applied state behind, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, FormStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<FormStore> for SharedStore {
    fn from(store: FormStore) -> Self {
        Self::new(store)
    }
}
