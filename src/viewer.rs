use std::{cell::RefCell, rc::Rc};

use colored::{ColoredString, Colorize};

use taskboard::{
  board::{sort_by_due_date, Board},
  storage::FileStorage,
  task::Task,
  time::format_due_date,
  traits::Indexable,
  Todo,
};

pub struct Viewer {
  todo: Rc<RefCell<Todo<FileStorage>>>,
}

impl Viewer {
  pub fn new(todo: Rc<RefCell<Todo<FileStorage>>>) -> Self {
    Self { todo }
  }

  pub fn print_projects(&self) -> taskboard::Result<()> {
    let projects = self.todo.borrow().list_projects()?;
    if projects.is_empty() {
      println!("no projects to show");
      return Ok(());
    }

    for project in projects.iter() {
      println!(
        "{}: {} {}",
        project.id().dimmed(),
        project.title().bold(),
        format!("({} tasks)", project.task_ids().len()).bright_black()
      );
    }
    Ok(())
  }

  pub fn print_board(&self, board: &Board) -> taskboard::Result<()> {
    let todo = self.todo.borrow();
    let header = todo.board_title(board)?;
    let mut tasks = todo.board(board, &chrono::Local::now())?;
    sort_by_due_date(&mut tasks);

    println!("{}", header.bold().cyan());
    if tasks.is_empty() {
      println!("no tasks to show");
      return Ok(());
    }

    for task in tasks.iter() {
      self.log_task(task);
    }
    Ok(())
  }

  pub fn log_task(&self, task: &Task) {
    let checkbox = match task.is_done() {
      true => "[x]".green(),
      false => "[ ]".normal(),
    };

    let mut title = task.title().normal();
    if task.is_done() {
      title = title.strikethrough();
    }
    if task.is_archived() {
      title = title.dimmed();
    }

    let due_date = match (task.due(), task.due_date().is_empty()) {
      (Some(due), _) => format!(" due {}", format_due_date(due)),
      (None, true) => String::new(),
      (None, false) => format!(" due {} (unreadable)", task.due_date()),
    };

    println!(
      "{} {}{} {} {}",
      checkbox,
      title,
      due_date.yellow(),
      format_priority(task.priority()),
      task.id().dimmed()
    );

    if !task.notes().is_empty() {
      println!("    {}", task.notes().italic());
    }
  }
}

fn format_priority(priority: &str) -> ColoredString {
  match priority {
    "" => "".normal(),
    "1" => "!1".red().bold(),
    "2" => "!2".bright_yellow(),
    "3" => "!3".blue(),
    other => format!("!{}", other).normal(),
  }
}
