use crate::traits::{Entity, Indexable};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
  pub title: String,
  #[serde(rename = "taskIDs")]
  pub task_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
  id: String,
  title: String,
  task_ids: Vec<String>,
}

impl Indexable for Project {
  fn id(&self) -> &str {
    self.id.as_str()
  }
}

impl Entity for Project {
  type Record = ProjectRecord;

  fn to_record(&self) -> ProjectRecord {
    ProjectRecord {
      title: self.title.clone(),
      task_ids: self.task_ids.clone(),
    }
  }

  fn from_record(id: String, record: ProjectRecord) -> Self {
    Self::with_id(id, &record.title, record.task_ids)
  }
}

impl Project {
  pub fn new(title: &str) -> Self {
    Self::with_id(crate::id::new_id(), title, Vec::new())
  }

  pub fn with_id(id: String, title: &str, task_ids: Vec<String>) -> Self {
    Self {
      id,
      title: title.to_owned(),
      task_ids,
    }
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn set_title(&mut self, title: &str) {
    self.title = title.to_owned();
  }

  /// Member task ids in insertion order. May reference deleted tasks.
  pub fn task_ids(&self) -> &[String] {
    &self.task_ids
  }

  pub fn add_task_id(&mut self, task_id: &str) {
    self.task_ids.push(task_id.to_owned());
  }

  /// Removes the member at `index`, returning it. Out of range is `None`.
  pub fn remove_task_id_at_index(&mut self, index: usize) -> Option<String> {
    if index >= self.task_ids.len() {
      return None;
    }
    Some(self.task_ids.remove(index))
  }

  pub fn position_of_task(&self, task_id: &str) -> Option<usize> {
    self.task_ids.iter().position(|id| id == task_id)
  }

  pub fn contains_task(&self, task_id: &str) -> bool {
    self.task_ids.iter().any(|id| id == task_id)
  }
}

#[cfg(test)]
mod test {
  use super::{Project, ProjectRecord};
  use crate::traits::Entity;

  #[test]
  fn membership_keeps_insertion_order() {
    let mut project = Project::new("Home");
    project.add_task_id("a");
    project.add_task_id("b");
    project.add_task_id("c");

    assert_eq!(project.task_ids(), ["a", "b", "c"]);
    assert_eq!(project.position_of_task("b"), Some(1));
    assert!(project.contains_task("c"));
    assert!(!project.contains_task("d"));
  }

  #[test]
  fn remove_at_index() {
    let task_ids = vec!["a".to_owned(), "b".to_owned()];
    let mut project = Project::with_id("p".to_owned(), "Home", task_ids);

    assert_eq!(project.remove_task_id_at_index(0), Some("a".to_owned()));
    assert_eq!(project.remove_task_id_at_index(5), None);
    assert_eq!(project.task_ids(), ["b"]);
  }

  #[test]
  fn record_uses_task_ids_key() {
    let project = Project::with_id("p".to_owned(), "Work", vec!["t1".to_owned()]);
    let json = serde_json::to_value(project.to_record()).unwrap();
    assert_eq!(json, serde_json::json!({"title": "Work", "taskIDs": ["t1"]}));
  }

  #[test]
  fn record_without_task_ids_loads_empty() {
    let record: ProjectRecord = serde_json::from_str(r#"{"title": "Work"}"#).unwrap();
    let project = Project::from_record("p".to_owned(), record);
    assert!(project.task_ids().is_empty());
  }
}
