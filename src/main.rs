extern crate chrono;
extern crate colored;

use std::{cell::RefCell, rc::Rc};

use log::debug;
use taskboard::{board::Board, storage::FileStorage, Config, Todo};
use viewer::Viewer;

mod viewer;

fn build_cli() -> clap::Command<'static> {
  let task_fields = || {
    [
      clap::Arg::new("due").long("due").takes_value(true),
      clap::Arg::new("priority").long("priority").takes_value(true),
      clap::Arg::new("notes").long("notes").takes_value(true),
    ]
  };

  clap::Command::new("taskboard")
    .arg_required_else_help(true)
    .subcommand(
      clap::Command::new("add")
        .arg(clap::Arg::new("title").required(true).index(1))
        .args(&task_fields())
        .arg(clap::Arg::new("project").long("project").takes_value(true)),
    )
    .subcommand(
      clap::Command::new("edit")
        .arg(clap::Arg::new("task_id").required(true).index(1))
        .arg(clap::Arg::new("title").long("title").takes_value(true))
        .args(&task_fields()),
    )
    .subcommand(clap::Command::new("done").arg(clap::Arg::new("task_id").required(true).index(1)))
    .subcommand(
      clap::Command::new("archive").arg(clap::Arg::new("task_id").required(true).index(1)),
    )
    .subcommand(
      clap::Command::new("delete").arg(clap::Arg::new("task_id").required(true).index(1)),
    )
    .subcommand(clap::Command::new("list").args(&[
      clap::Arg::new("board")
        .long("board")
        .takes_value(true)
        .possible_values(["general", "today", "upcoming", "archive"]),
      clap::Arg::new("project")
        .long("project")
        .takes_value(true)
        .conflicts_with("board"),
    ]))
    .subcommand(clap::Command::new("projects"))
    .subcommand(
      clap::Command::new("add-project").arg(clap::Arg::new("title").required(true).index(1)),
    )
    .subcommand(clap::Command::new("rename-project").args(&[
      clap::Arg::new("project_id").required(true).index(1),
      clap::Arg::new("title").required(true).index(2),
    ]))
    .subcommand(
      clap::Command::new("delete-project")
        .arg(clap::Arg::new("project_id").required(true).index(1)),
    )
    .subcommand(clap::Command::new("unlink").args(&[
      clap::Arg::new("project_id").required(true).index(1),
      clap::Arg::new("task_id").required(true).index(2),
    ]))
    .subcommand(
      clap::Command::new("completions").arg(
        clap::Arg::new("shell")
          .required(true)
          .index(1)
          .possible_values(["bash", "elvish", "fish", "powershell", "zsh"]),
      ),
    )
}

fn main() {
  env_logger::init();

  if let Err(err) = run(build_cli().get_matches()) {
    eprintln!("taskboard err: {}", err);
    std::process::exit(1);
  }
}

fn run(matches: clap::ArgMatches) -> taskboard::Result<()> {
  if let Some(("completions", command_matches)) = matches.subcommand() {
    let shell: clap_complete::Shell = command_matches
      .value_of("shell")
      .unwrap_or_default()
      .parse()
      .map_err(taskboard::Error::Config)?;
    clap_complete::generate(shell, &mut build_cli(), "taskboard", &mut std::io::stdout());
    return Ok(());
  }

  let config = Config::new()?;
  debug!("taskboard data folder: {}", config.storage_dir_path);

  let todo = Rc::new(RefCell::new(Todo::new(FileStorage::new(
    &config.storage_dir_path,
  )?)));
  let viewer = Viewer::new(Rc::clone(&todo));

  match matches.subcommand() {
    Some(("add", command_matches)) => {
      let title = command_matches.value_of("title").unwrap_or_default();
      let due_date = command_matches.value_of("due").unwrap_or_default();
      let priority = command_matches.value_of("priority").unwrap_or_default();
      let notes = command_matches.value_of("notes").unwrap_or_default();

      let task_id = {
        let mut todo = todo.borrow_mut();
        match command_matches.value_of("project") {
          Some(project_id) => {
            todo.add_task_to_project(project_id, title, due_date, priority, notes)?
          }
          None => todo.add_task(title, due_date, priority, notes)?,
        }
      };
      println!("task added: {}", task_id);
    }

    Some(("edit", command_matches)) => {
      let task_id = command_matches.value_of("task_id").unwrap_or_default();
      let mut todo = todo.borrow_mut();
      let info = todo.get_task_info(task_id)?;

      todo.update_task(
        command_matches.value_of("title").unwrap_or(info.title.as_str()),
        command_matches.value_of("due").unwrap_or(info.due_date.as_str()),
        command_matches.value_of("priority").unwrap_or(info.priority.as_str()),
        command_matches.value_of("notes").unwrap_or(info.notes.as_str()),
        task_id,
      )?;
      println!("task updated: {}", task_id);
    }

    Some(("done", command_matches)) => {
      let task_id = command_matches.value_of("task_id").unwrap_or_default();
      todo.borrow_mut().toggle_task_done(task_id)?;
      println!("task toggled: {}", task_id);
    }

    Some(("archive", command_matches)) => {
      let task_id = command_matches.value_of("task_id").unwrap_or_default();
      todo.borrow_mut().archive_task(task_id)?;
      println!("task archive toggled: {}", task_id);
    }

    Some(("delete", command_matches)) => {
      let task_id = command_matches.value_of("task_id").unwrap_or_default();
      todo.borrow_mut().delete_task(task_id)?;
      println!("task deleted: {}", task_id);
    }

    Some(("list", command_matches)) => {
      let board = match command_matches.value_of("project") {
        Some(project_id) => Board::Project(project_id.to_owned()),
        None => Board::new(command_matches.value_of("board").unwrap_or("general"), ""),
      };
      viewer.print_board(&board)?;
    }

    Some(("projects", _)) => {
      viewer.print_projects()?;
    }

    Some(("add-project", command_matches)) => {
      let title = command_matches.value_of("title").unwrap_or_default();
      let project_id = todo.borrow_mut().add_project(title)?;
      println!("project added: {}", project_id);
    }

    Some(("rename-project", command_matches)) => {
      let project_id = command_matches.value_of("project_id").unwrap_or_default();
      let title = command_matches.value_of("title").unwrap_or_default();
      todo.borrow_mut().update_project(title, project_id)?;
      println!("project renamed: {}", project_id);
    }

    Some(("delete-project", command_matches)) => {
      let project_id = command_matches.value_of("project_id").unwrap_or_default();
      todo.borrow_mut().delete_project(project_id)?;
      println!("project deleted: {}", project_id);
    }

    Some(("unlink", command_matches)) => {
      let project_id = command_matches.value_of("project_id").unwrap_or_default();
      let task_id = command_matches.value_of("task_id").unwrap_or_default();
      todo
        .borrow_mut()
        .remove_task_from_project(project_id, task_id)?;
      println!("task: {} removed from project: {}", task_id, project_id);
    }

    _ => {}
  }

  Ok(())
}
