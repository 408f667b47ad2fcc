//! Board selection and the filter that derives a board's visible tasks.

use crate::{project::Project, task::Task, traits::Indexable};

pub const GENERAL: &str = "general";
pub const TODAY: &str = "today";
pub const UPCOMING: &str = "upcoming";
pub const ARCHIVE: &str = "archive";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
  General,
  Today,
  Upcoming,
  Archive,
  Project(String),
}

impl Board {
  /// Maps a reserved board name to its board; any other name selects the project board of
  /// `project_id`.
  pub fn new(name: &str, project_id: &str) -> Self {
    match name {
      GENERAL => Board::General,
      TODAY => Board::Today,
      UPCOMING => Board::Upcoming,
      ARCHIVE => Board::Archive,
      _ => Board::Project(project_id.to_owned()),
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Board::General => GENERAL,
      Board::Today => TODAY,
      Board::Upcoming => UPCOMING,
      Board::Archive => ARCHIVE,
      Board::Project(id) => id.as_str(),
    }
  }

  /// Whether `task` belongs on this board. `projects` is only consulted for project boards.
  pub fn matches(&self, task: &Task, projects: &[Project], today: chrono::NaiveDate) -> bool {
    match self {
      Board::General => !task.is_archived(),
      Board::Today => !task.is_archived() && task.due().map_or(false, |due| due == today),
      Board::Upcoming => !task.is_archived() && task.due().map_or(false, |due| due > today),
      Board::Archive => task.is_archived(),
      Board::Project(project_id) => projects
        .iter()
        .find(|p| p.id() == project_id)
        .map_or(false, |p| p.contains_task(task.id())),
    }
  }
}

/// Tasks visible on `board` as of the calendar date `today`, in collection order.
pub fn filter_board(
  tasks: &[Task],
  projects: &[Project],
  board: &Board,
  today: chrono::NaiveDate,
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|t| board.matches(t, projects, today))
    .cloned()
    .collect()
}

/// Orders tasks by due date, undated or malformed ones last, then by title.
pub fn sort_by_due_date(tasks: &mut [Task]) {
  tasks.sort_by(|a, b| match (a.due(), b.due()) {
    (Some(a_due), Some(b_due)) => a_due.cmp(&b_due).then_with(|| a.title().cmp(b.title())),
    (Some(_), None) => std::cmp::Ordering::Less,
    (None, Some(_)) => std::cmp::Ordering::Greater,
    (None, None) => a.title().cmp(b.title()),
  });
}
