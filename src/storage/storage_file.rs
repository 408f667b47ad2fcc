use std::io::Write;

use log::debug;

use crate::error::Result;

use super::storage::Storage;

/// Keeps every key in its own `<key>.json` file inside a directory.
pub struct FileStorage {
  folder: std::path::PathBuf,
}

impl FileStorage {
  pub fn new(database_folder: &str) -> Result<Self> {
    std::fs::create_dir_all(database_folder)?;
    debug!("file storage folder: {}", database_folder);

    Ok(Self {
      folder: std::path::Path::new(database_folder).to_path_buf(),
    })
  }

  pub fn filepath(&self, key: &str) -> std::path::PathBuf {
    self.folder.join(format!("{}.json", key))
  }
}

impl Storage for FileStorage {
  fn has(&self, key: &str) -> bool {
    self.filepath(key).is_file()
  }

  fn get(&self, key: &str) -> Result<Option<String>> {
    match std::fs::read_to_string(self.filepath(key)) {
      Ok(content) => Ok(Some(content)),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    // write next to the target so the final rename stays on one filesystem
    let mut file = tempfile::NamedTempFile::new_in(&self.folder)?;
    file.write_all(value.as_bytes())?;
    file.flush()?;
    file.persist(self.filepath(key)).map_err(|err| err.error)?;

    debug!("stored {} bytes under key: {}", value.len(), key);
    Ok(())
  }
}
