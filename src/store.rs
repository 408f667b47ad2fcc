//! Typed access to the "tasks" and "projects" collections of a [`Storage`].

use log::debug;

use crate::{
  collection::Mapping,
  error::{Error, Result},
  project::ProjectRecord,
  storage::Storage,
  task::TaskRecord,
};

pub const TASKS_KEY: &str = "tasks";
pub const PROJECTS_KEY: &str = "projects";

pub struct Store<S: Storage> {
  storage: S,
}

impl<S: Storage> Store<S> {
  pub fn new(storage: S) -> Self {
    Self { storage }
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn into_storage(self) -> S {
    self.storage
  }

  pub fn check_tasks_exist(&self) -> bool {
    self.storage.has(TASKS_KEY)
  }

  pub fn check_projects_exist(&self) -> bool {
    self.storage.has(PROJECTS_KEY)
  }

  pub fn store_tasks(&mut self, tasks: &Mapping<TaskRecord>) -> Result<()> {
    self.store(TASKS_KEY, tasks)
  }

  pub fn store_projects(&mut self, projects: &Mapping<ProjectRecord>) -> Result<()> {
    self.store(PROJECTS_KEY, projects)
  }

  /// Stored tasks, or an empty mapping when nothing was stored yet.
  pub fn retrieve_tasks(&self) -> Result<Mapping<TaskRecord>> {
    self.retrieve(TASKS_KEY)
  }

  /// Stored projects, or an empty mapping when nothing was stored yet.
  pub fn retrieve_projects(&self) -> Result<Mapping<ProjectRecord>> {
    self.retrieve(PROJECTS_KEY)
  }

  fn store<R: serde::Serialize>(&mut self, key: &str, mapping: &Mapping<R>) -> Result<()> {
    let value = serde_json::to_string(mapping).map_err(|source| Error::Serialization {
      key: key.to_owned(),
      source,
    })?;
    self.storage.set(key, &value)?;

    debug!("stored {} items under: {}", mapping.len(), key);
    Ok(())
  }

  fn retrieve<R: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Mapping<R>> {
    let value = match self.storage.get(key)? {
      Some(value) => value,
      None => return Ok(Mapping::new()),
    };

    let mapping: Mapping<R> =
      serde_json::from_str(&value).map_err(|source| Error::Serialization {
        key: key.to_owned(),
        source,
      })?;

    debug!("restored {} items from: {}", mapping.len(), key);
    Ok(mapping)
  }
}

#[cfg(test)]
mod test {
  use super::{Store, PROJECTS_KEY, TASKS_KEY};
  use crate::{
    collection::Mapping,
    error::Error,
    storage::{MemoryStorage, Storage},
    task::TaskRecord,
  };

  #[test]
  fn missing_collections_are_empty() {
    let store = Store::new(MemoryStorage::new());
    assert!(!store.check_tasks_exist());
    assert!(!store.check_projects_exist());
    assert!(store.retrieve_tasks().unwrap().is_empty());
    assert!(store.retrieve_projects().unwrap().is_empty());
  }

  #[test]
  fn stores_and_retrieves_tasks() {
    let mut store = Store::new(MemoryStorage::new());
    let mut tasks = Mapping::new();
    tasks.insert(
      "t1".to_owned(),
      TaskRecord {
        title: "Write report".to_owned(),
        due_date: "2024-06-15".to_owned(),
        ..Default::default()
      },
    );

    store.store_tasks(&tasks).unwrap();

    assert!(store.check_tasks_exist());
    assert_eq!(store.retrieve_tasks().unwrap(), tasks);
  }

  #[test]
  fn storing_twice_is_byte_identical() {
    let mut store = Store::new(MemoryStorage::new());
    let mut tasks = Mapping::new();
    for id in ["b", "a", "c"] {
      tasks.insert(id.to_owned(), TaskRecord::default());
    }
    store.store_tasks(&tasks).unwrap();
    let first = store.storage().get(TASKS_KEY).unwrap();

    let tasks = store.retrieve_tasks().unwrap();
    store.store_tasks(&tasks).unwrap();
    assert_eq!(store.storage().get(TASKS_KEY).unwrap(), first);
  }

  #[test]
  fn corrupt_collection_is_reported() {
    let mut storage = MemoryStorage::new();
    storage.set(PROJECTS_KEY, "[1, 2, 3]").unwrap();
    storage.set(TASKS_KEY, "not json").unwrap();
    let store = Store::new(storage);

    match store.retrieve_projects() {
      Err(Error::Serialization { key, .. }) => assert_eq!(key, PROJECTS_KEY),
      other => panic!("unexpected result: {:?}", other),
    }
    match store.retrieve_tasks() {
      Err(Error::Serialization { key, .. }) => assert_eq!(key, TASKS_KEY),
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn wrong_record_shape_is_reported() {
    let mut storage = MemoryStorage::new();
    storage.set(TASKS_KEY, r#"{"t1": {"title": 5}}"#).unwrap();
    let store = Store::new(storage);

    assert!(matches!(store.retrieve_tasks(), Err(Error::Serialization { .. })));
  }
}
