/// Errors surfaced by the task/project data layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("task with id: {0} not found")]
  TaskNotFound(String),

  #[error("project with id: {0} not found")]
  ProjectNotFound(String),

  /// The value stored under `key` is not an id -> record mapping.
  #[error("malformed '{key}' collection: {source}")]
  Serialization {
    key: String,
    source: serde_json::Error,
  },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config error: {0}")]
  Config(String),
}

impl Error {
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::TaskNotFound(_) | Error::ProjectNotFound(_))
  }
}

pub type Result<T> = std::result::Result<T, Error>;
