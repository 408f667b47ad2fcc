/// Returns a fresh random identifier for a new task or project.
pub fn new_id() -> String {
  uuid::Uuid::new_v4().hyphenated().to_string()
}
