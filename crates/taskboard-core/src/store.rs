//! The `TaskStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `taskboard-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  Error,
  task::{NewTask, Status, Task, TaskInput},
};

// ─── Error bridge ────────────────────────────────────────────────────────────

/// Implemented by every backend's error type so callers can tell domain
/// failures (validation, bad status) apart from storage failures without
/// knowing the concrete backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The domain error behind this failure, if it is one.
  fn as_domain(&self) -> Option<&Error>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Taskboard storage backend.
///
/// Each call is self-contained: a backend acquires its connection for the
/// duration of one statement (or one transaction for seeding) and releases it
/// before returning.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TaskStore: Send + Sync {
  type Error: StoreError;

  /// Create the backing table if it does not exist. Safe to call repeatedly.
  fn initialize(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Validate `input` and persist it with status [`Status::New`].
  ///
  /// Fails with [`Error::Validation`] on an empty title, a malformed due date
  /// or an unknown priority. Nothing is written in that case.
  fn create(
    &self,
    input: TaskInput,
  ) -> impl Future<Output = Result<Task, Self::Error>> + Send + '_;

  /// Every task, ordered by priority rank, then due date (undated last),
  /// then id.
  fn list_all(&self) -> impl Future<Output = Result<Vec<Task>, Self::Error>> + Send + '_;

  /// Retrieve one task. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Task>, Self::Error>> + Send + '_;

  /// Overwrite the status of `id`. Updating a missing id is a no-op.
  fn update_status(
    &self,
    id: i64,
    status: Status,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove `id` if present. Deleting a missing id is a no-op.
  fn delete(&self, id: i64) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Number of stored tasks.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Insert `dataset` in order, with each record's explicit status, if and
  /// only if the store holds no tasks. Returns how many rows were inserted.
  fn seed_if_empty(
    &self,
    dataset: Vec<NewTask>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
