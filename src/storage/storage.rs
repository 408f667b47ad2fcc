use crate::error::Result;

/// Durable string-keyed store the repository persists its collections through.
pub trait Storage {
  fn has(&self, key: &str) -> bool;
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
