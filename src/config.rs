use crate::error::{Error, Result};

const TASKBOARD_DEFAULT_STORAGE_DIR: &str = ".taskboard";
const TASKBOARD_DEFAULT_CONFIG_NAME: &str = ".taskboard.json";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: String,
}

impl Config {
  /// Reads the config from `$TASKBOARD_CONFIG` or `~/.taskboard.json`, writing a default one
  /// on first use.
  pub fn new() -> Result<Self> {
    let home_env =
      std::env::var("HOME").map_err(|_| Error::Config("HOME is not set".to_owned()))?;
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var("TASKBOARD_CONFIG") {
      Ok(file_path) => std::path::Path::new(&file_path).to_path_buf(),
      Err(_) => home.join(TASKBOARD_DEFAULT_CONFIG_NAME),
    };

    let storage_dir = home.join(TASKBOARD_DEFAULT_STORAGE_DIR);
    let default_config = Self {
      storage_dir_path: storage_dir
        .to_str()
        .ok_or_else(|| Error::Config(format!("non utf-8 path: {}", storage_dir.display())))?
        .to_owned(),
    };

    Self::load_or_create(&config_file_path, default_config)
  }

  pub fn load_or_create(path: &std::path::Path, default_config: Config) -> Result<Self> {
    if !path.exists() {
      let file = std::fs::File::create(path)?;
      serde_json::to_writer_pretty(file, &default_config)
        .map_err(|err| Error::Config(format!("can't write {}: {}", path.display(), err)))?;
      return Ok(default_config);
    }

    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file)
      .map_err(|err| Error::Config(format!("malformed {}: {}", path.display(), err)))
  }
}
