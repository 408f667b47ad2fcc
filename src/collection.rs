//! Conversion between the in-memory entity list and the persisted id -> record mapping.

use std::collections::BTreeMap;

use log::warn;

use crate::traits::Entity;

pub type Mapping<R> = BTreeMap<String, R>;

/// Builds a mapping keyed by entity id.
///
/// Ids are expected to be unique. If two entities share one, the later entity's record
/// replaces the earlier one and a warning is logged.
pub fn collection_to_mapping<E: Entity>(entities: &[E]) -> Mapping<E::Record> {
  let mut mapping = Mapping::new();
  for entity in entities.iter() {
    if mapping
      .insert(entity.id().to_owned(), entity.to_record())
      .is_some()
    {
      warn!("duplicate id {} in collection, keeping the later record", entity.id());
    }
  }
  return mapping;
}

/// Rebuilds entities from a mapping, passing each key back in as the entity id.
///
/// The result follows key order, not the order entities were added in.
pub fn mapping_to_collection<E: Entity>(mapping: Mapping<E::Record>) -> Vec<E> {
  mapping
    .into_iter()
    .map(|(id, record)| E::from_record(id, record))
    .collect()
}

#[cfg(test)]
mod test {
  use super::{collection_to_mapping, mapping_to_collection};
  use crate::{project::Project, task::Task, traits::Indexable};

  fn sorted_by_id<T: Indexable + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort_by(|a, b| a.id().cmp(b.id()));
    items
  }

  #[test]
  fn tasks_round_trip() {
    let mut done = Task::new("done", "2024-06-15", "1", "notes");
    done.toggle_done();
    let mut archived = Task::new("archived", "", "", "");
    archived.toggle_archived();
    let tasks = vec![Task::new("plain", "2024-06-20", "3", ""), done, archived];

    let restored: Vec<Task> = mapping_to_collection(collection_to_mapping(&tasks));

    assert_eq!(sorted_by_id(&restored), sorted_by_id(&tasks));
  }

  #[test]
  fn projects_round_trip() {
    let mut project = Project::new("Home");
    project.add_task_id("t1");
    project.add_task_id("t2");
    let projects = vec![project, Project::new("Work")];

    let restored: Vec<Project> = mapping_to_collection(collection_to_mapping(&projects));

    assert_eq!(sorted_by_id(&restored), sorted_by_id(&projects));
  }

  #[test]
  fn duplicate_id_keeps_later_entity() {
    let first = Task::with_id("same".to_owned(), "first", "", "", "", false, false);
    let second = Task::with_id("same".to_owned(), "second", "", "", "", false, false);

    let mapping = collection_to_mapping(&[first, second]);

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping["same"].title, "second");
  }

  #[test]
  fn empty_collection() {
    let mapping = collection_to_mapping::<Task>(&[]);
    assert!(mapping.is_empty());
    assert!(mapping_to_collection::<Task>(mapping).is_empty());
  }
}
