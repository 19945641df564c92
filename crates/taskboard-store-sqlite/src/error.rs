//! Error type for `taskboard-store-sqlite`.

use taskboard_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] taskboard_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored column held a value the domain types cannot represent.
  #[error("decode error: {0}")]
  Decode(String),
}

impl From<taskboard_core::ValidationError> for Error {
  fn from(e: taskboard_core::ValidationError) -> Self { Self::Core(e.into()) }
}

impl StoreError for Error {
  fn as_domain(&self) -> Option<&taskboard_core::Error> {
    match self {
      Self::Core(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
