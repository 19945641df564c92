//! Runtime server configuration.
//!
//! Layered lowest to highest: built-in defaults, the TOML file, `TASKBOARD_*`
//! environment variables, and finally the bare `PORT` variable that hosting
//! platforms commonly inject.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::labels::Locale;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  pub store_path:     PathBuf,
  /// Load the demo dataset when the store is empty at startup.
  pub seed_demo_data: bool,
  pub locale:         Locale,
}

impl ServerConfig {
  /// Read configuration from `file` (optional) and the environment.
  /// `port_env` is the value of the `PORT` variable, if set.
  pub fn load(file: &Path, port_env: Option<String>) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000)?
      .set_default("store_path", "tasks.db")?
      .set_default("seed_demo_data", true)?
      .set_default("locale", "en")?
      .add_source(File::from(file).required(false))
      .add_source(Environment::with_prefix("TASKBOARD"))
      .set_override_option("port", port_env)?
      .build()?
      .try_deserialize()
  }

  /// `store_path` with a leading `~/` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
