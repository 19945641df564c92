//! Error types for `taskboard-core`.

use thiserror::Error;

/// Why a task submission was refused before anything was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("task title is required")]
  EmptyTitle,

  #[error("invalid due date {0:?}, expected YYYY-MM-DD")]
  InvalidDueDate(String),

  #[error("unknown priority: {0:?}")]
  UnknownPriority(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(#[from] ValidationError),

  #[error("invalid status: {0:?}")]
  InvalidStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
