use crate::traits::{Entity, Indexable};

/// Persisted field-set of a task, keyed by the task id in the "tasks" mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskRecord {
  pub title: String,
  pub due_date: String,
  pub priority: String,
  pub notes: String,
  pub is_done: bool,
  pub is_archived: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
  id: String,
  title: String,
  due_date: String,
  priority: String,
  notes: String,
  is_done: bool,
  is_archived: bool,
}

impl Indexable for Task {
  fn id(&self) -> &str {
    self.id.as_str()
  }
}

impl Entity for Task {
  type Record = TaskRecord;

  fn to_record(&self) -> TaskRecord {
    TaskRecord {
      title: self.title.clone(),
      due_date: self.due_date.clone(),
      priority: self.priority.clone(),
      notes: self.notes.clone(),
      is_done: self.is_done,
      is_archived: self.is_archived,
    }
  }

  fn from_record(id: String, record: TaskRecord) -> Self {
    Self {
      id,
      title: record.title,
      due_date: record.due_date,
      priority: record.priority,
      notes: record.notes,
      is_done: record.is_done,
      is_archived: record.is_archived,
    }
  }
}

impl Task {
  /// A new, not done, not archived task with a fresh id.
  pub fn new(title: &str, due_date: &str, priority: &str, notes: &str) -> Self {
    Self::with_id(crate::id::new_id(), title, due_date, priority, notes, false, false)
  }

  /// Rebuilds a task around an existing id.
  pub fn with_id(
    id: String,
    title: &str,
    due_date: &str,
    priority: &str,
    notes: &str,
    is_done: bool,
    is_archived: bool,
  ) -> Self {
    Self {
      id,
      title: title.to_owned(),
      due_date: due_date.to_owned(),
      priority: priority.to_owned(),
      notes: notes.to_owned(),
      is_done,
      is_archived,
    }
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn set_title(&mut self, title: &str) {
    self.title = title.to_owned();
  }

  pub fn due_date(&self) -> &str {
    self.due_date.as_str()
  }

  pub fn set_due_date(&mut self, due_date: &str) {
    self.due_date = due_date.to_owned();
  }

  /// The parsed due date, `None` when unset or malformed.
  pub fn due(&self) -> Option<chrono::NaiveDate> {
    crate::time::parse_due_date(&self.due_date)
  }

  pub fn priority(&self) -> &str {
    self.priority.as_str()
  }

  pub fn set_priority(&mut self, priority: &str) {
    self.priority = priority.to_owned();
  }

  pub fn notes(&self) -> &str {
    self.notes.as_str()
  }

  pub fn set_notes(&mut self, notes: &str) {
    self.notes = notes.to_owned();
  }

  pub fn is_done(&self) -> bool {
    self.is_done
  }

  pub fn is_archived(&self) -> bool {
    self.is_archived
  }

  pub fn toggle_done(&mut self) {
    self.is_done = !self.is_done;
  }

  pub fn toggle_archived(&mut self) {
    self.is_archived = !self.is_archived;
  }
}

#[cfg(test)]
mod test {
  use super::{Task, TaskRecord};
  use crate::traits::{Entity, Indexable};

  #[test]
  fn new_task_defaults() {
    let task = Task::new("Buy milk", "2024-06-15", "2", "");
    assert!(!task.is_done());
    assert!(!task.is_archived());
    assert!(!task.id().is_empty());
    assert_eq!(task.due(), chrono::NaiveDate::from_ymd_opt(2024, 6, 15));
  }

  #[test]
  fn with_id_reuses_id() {
    let task = Task::with_id("abc".to_owned(), "t", "", "", "", true, false);
    assert_eq!(task.id(), "abc");
    assert!(task.is_done());
  }

  #[test]
  fn setters_overwrite_fields() {
    let mut task = Task::new("a", "", "", "");
    task.set_title("b");
    task.set_due_date("2024-01-01");
    task.set_priority("3");
    task.set_notes("note");

    assert_eq!(task.title(), "b");
    assert_eq!(task.due_date(), "2024-01-01");
    assert_eq!(task.priority(), "3");
    assert_eq!(task.notes(), "note");
  }

  #[test]
  fn toggles_flip_back() {
    let mut task = Task::new("a", "", "", "");
    task.toggle_done();
    task.toggle_archived();
    assert!(task.is_done() && task.is_archived());

    task.toggle_done();
    task.toggle_archived();
    assert!(!task.is_done() && !task.is_archived());
  }

  #[test]
  fn record_omits_id() {
    let task = Task::new("a", "2024-06-15", "1", "n");
    let json = serde_json::to_value(task.to_record()).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "title": "a",
        "dueDate": "2024-06-15",
        "priority": "1",
        "notes": "n",
        "isDone": false,
        "isArchived": false,
      })
    );
  }

  #[test]
  fn record_without_flags_loads_with_defaults() {
    let json = r#"{"title": "old", "dueDate": "2024-06-15", "priority": "1"}"#;
    let record: TaskRecord = serde_json::from_str(json).unwrap();
    let task = Task::from_record("id-1".to_owned(), record);

    assert_eq!(task.title(), "old");
    assert_eq!(task.notes(), "");
    assert!(!task.is_done());
    assert!(!task.is_archived());
  }
}
