use log::{debug, warn};

use crate::{
  board::{filter_board, Board},
  collection::{collection_to_mapping, mapping_to_collection},
  error::{Error, Result},
  project::Project,
  storage::Storage,
  store::Store,
  task::Task,
  traits::Indexable,
};

/// Editable fields of a task, as shown in an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
  pub title: String,
  pub due_date: String,
  pub priority: String,
  pub notes: String,
}

/// Task and project repository.
///
/// Holds no entities between calls: every operation loads the whole collection it touches,
/// changes it and writes it back before returning.
pub struct Todo<S: Storage> {
  store: Store<S>,
}

impl<S: Storage> Todo<S> {
  pub fn new(storage: S) -> Self {
    Self {
      store: Store::new(storage),
    }
  }

  pub fn storage(&self) -> &S {
    self.store.storage()
  }

  pub fn into_storage(self) -> S {
    self.store.into_storage()
  }

  pub fn list_tasks(&self) -> Result<Vec<Task>> {
    if !self.store.check_tasks_exist() {
      return Ok(Vec::new());
    }
    Ok(mapping_to_collection(self.store.retrieve_tasks()?))
  }

  pub fn list_projects(&self) -> Result<Vec<Project>> {
    if !self.store.check_projects_exist() {
      return Ok(Vec::new());
    }
    Ok(mapping_to_collection(self.store.retrieve_projects()?))
  }

  /// Adds a new task and returns its id.
  pub fn add_task(
    &mut self,
    title: &str,
    due_date: &str,
    priority: &str,
    notes: &str,
  ) -> Result<String> {
    let mut tasks = self.list_tasks()?;
    let task = Task::new(title, due_date, priority, notes);
    let task_id = task.id().to_owned();
    tasks.push(task);
    self.save_tasks(&tasks)?;

    debug!("added task: {} title: {}", task_id, title);
    return Ok(task_id);
  }

  /// Adds a new project with no tasks and returns its id.
  pub fn add_project(&mut self, title: &str) -> Result<String> {
    let mut projects = self.list_projects()?;
    let project = Project::new(title);
    let project_id = project.id().to_owned();
    projects.push(project);
    self.save_projects(&projects)?;

    debug!("added project: {} title: {}", project_id, title);
    return Ok(project_id);
  }

  /// Adds a new task and appends it to the project's members.
  ///
  /// Fails with [`Error::ProjectNotFound`] before anything is written if the project is unknown.
  pub fn add_task_to_project(
    &mut self,
    project_id: &str,
    title: &str,
    due_date: &str,
    priority: &str,
    notes: &str,
  ) -> Result<String> {
    let mut projects = self.list_projects()?;
    let position = position_by_id(&projects, project_id)
      .ok_or_else(|| Error::ProjectNotFound(project_id.to_owned()))?;

    let task_id = self.add_task(title, due_date, priority, notes)?;
    projects[position].add_task_id(&task_id);
    self.save_projects(&projects)?;

    debug!("task: {} joined project: {}", task_id, project_id);
    return Ok(task_id);
  }

  /// Removes the task. Projects keep listing its id.
  pub fn delete_task(&mut self, task_id: &str) -> Result<()> {
    let mut tasks = self.list_tasks()?;
    let position = task_position(&tasks, task_id)?;
    tasks.remove(position);
    self.save_tasks(&tasks)
  }

  /// Removes the project. Its tasks stay in the task collection.
  pub fn delete_project(&mut self, project_id: &str) -> Result<()> {
    let mut projects = self.list_projects()?;
    let position = project_position(&projects, project_id)?;
    projects.remove(position);
    self.save_projects(&projects)
  }

  pub fn toggle_task_done(&mut self, task_id: &str) -> Result<()> {
    self.modify_task(task_id, |task| task.toggle_done())
  }

  /// Flips the archived flag, so archiving twice restores the task.
  pub fn archive_task(&mut self, task_id: &str) -> Result<()> {
    self.modify_task(task_id, |task| task.toggle_archived())
  }

  pub fn update_task(
    &mut self,
    title: &str,
    due_date: &str,
    priority: &str,
    notes: &str,
    task_id: &str,
  ) -> Result<()> {
    self.modify_task(task_id, |task| {
      task.set_title(title);
      task.set_due_date(due_date);
      task.set_priority(priority);
      task.set_notes(notes);
    })
  }

  pub fn update_project(&mut self, title: &str, project_id: &str) -> Result<()> {
    let mut projects = self.list_projects()?;
    let position = project_position(&projects, project_id)?;
    projects[position].set_title(title);
    self.save_projects(&projects)
  }

  /// Drops `task_id` from the project's members. The task itself is kept.
  pub fn remove_task_from_project(&mut self, project_id: &str, task_id: &str) -> Result<()> {
    let mut projects = self.list_projects()?;
    let position = project_position(&projects, project_id)?;
    let project = &mut projects[position];
    let index = project
      .position_of_task(task_id)
      .ok_or_else(|| Error::TaskNotFound(task_id.to_owned()))?;
    project.remove_task_id_at_index(index);
    self.save_projects(&projects)
  }

  /// Whether the project lists `task_id`. An unknown project lists nothing.
  pub fn check_task_in_project(&self, project_id: &str, task_id: &str) -> Result<bool> {
    let projects = self.list_projects()?;
    let in_project = projects
      .iter()
      .find(|p| p.id() == project_id)
      .map_or(false, |p| p.contains_task(task_id));
    return Ok(in_project);
  }

  pub fn get_task_info(&self, task_id: &str) -> Result<TaskInfo> {
    let tasks = self.list_tasks()?;
    let task = &tasks[task_position(&tasks, task_id)?];
    Ok(TaskInfo {
      title: task.title().to_owned(),
      due_date: task.due_date().to_owned(),
      priority: task.priority().to_owned(),
      notes: task.notes().to_owned(),
    })
  }

  pub fn get_project_info(&self, project_id: &str) -> Result<String> {
    let projects = self.list_projects()?;
    let project = &projects[project_position(&projects, project_id)?];
    Ok(project.title().to_owned())
  }

  /// Tasks visible on `board` as of `now`'s calendar date.
  pub fn board<Tz: chrono::TimeZone>(
    &self,
    board: &Board,
    now: &chrono::DateTime<Tz>,
  ) -> Result<Vec<Task>> {
    let tasks = self.list_tasks()?;
    let projects = match board {
      Board::Project(_) => self.list_projects()?,
      _ => Vec::new(),
    };
    Ok(filter_board(&tasks, &projects, board, now.date_naive()))
  }

  /// Heading for `board`: the project title, or the id itself for an unknown project.
  pub fn board_title(&self, board: &Board) -> Result<String> {
    match board {
      Board::Project(project_id) => match self.get_project_info(project_id) {
        Err(err) if err.is_not_found() => Ok(project_id.to_owned()),
        other => other,
      },
      _ => Ok(board.name().to_owned()),
    }
  }

  fn modify_task<F: FnOnce(&mut Task)>(&mut self, task_id: &str, modify: F) -> Result<()> {
    let mut tasks = self.list_tasks()?;
    let position = task_position(&tasks, task_id)?;
    modify(&mut tasks[position]);
    self.save_tasks(&tasks)
  }

  fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
    self.store.store_tasks(&collection_to_mapping(tasks))
  }

  fn save_projects(&mut self, projects: &[Project]) -> Result<()> {
    self.store.store_projects(&collection_to_mapping(projects))
  }
}

fn position_by_id<T: Indexable>(items: &[T], id: &str) -> Option<usize> {
  items.iter().position(|item| item.id() == id)
}

fn task_position(tasks: &[Task], task_id: &str) -> Result<usize> {
  position_by_id(tasks, task_id).ok_or_else(|| {
    warn!("task with id: {} not found", task_id);
    Error::TaskNotFound(task_id.to_owned())
  })
}

fn project_position(projects: &[Project], project_id: &str) -> Result<usize> {
  position_by_id(projects, project_id).ok_or_else(|| {
    warn!("project with id: {} not found", project_id);
    Error::ProjectNotFound(project_id.to_owned())
  })
}
