use std::collections::HashMap;

use crate::error::Result;

use super::storage::Storage;

/// In-process storage, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
  items: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Storage for MemoryStorage {
  fn has(&self, key: &str) -> bool {
    self.items.contains_key(key)
  }

  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.items.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    self.items.insert(key.to_owned(), value.to_owned());
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::{MemoryStorage, Storage};

  #[test]
  fn set_then_get() {
    let mut storage = MemoryStorage::new();
    assert!(!storage.has("tasks"));
    assert_eq!(storage.get("tasks").unwrap(), None);

    storage.set("tasks", "{}").unwrap();
    assert!(storage.has("tasks"));
    assert_eq!(storage.get("tasks").unwrap().as_deref(), Some("{}"));
  }
}
