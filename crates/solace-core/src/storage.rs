//! Browser-local key-value storage abstraction

use crate::CoreResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value store with the semantics of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// Non-empty value under `key`. An empty string is treated as never written,
/// which is how both persisted flags decide whether the visitor has answered.
pub fn recorded(store: &dyn KeyValueStore, key: &str) -> CoreResult<Option<String>> {
    Ok(store.get(key)?.filter(|value| !value.is_empty()))
}

/// Store handle shared between controllers of one page.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// In-memory store. Clones share one storage scope, like two components
/// reading the same origin's local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> SharedStore {
        Rc::new(self.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
