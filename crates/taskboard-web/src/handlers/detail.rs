//! Single-task view with due-date arithmetic.

use axum::{
  Json,
  extract::{Path, State},
};
use taskboard_core::{report::TaskDetail, store::TaskStore};

use crate::{AppState, error::Error, handlers::now};

/// `GET /task/{id}`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<TaskDetail>, Error>
where
  S: TaskStore + Clone + 'static,
{
  let task = state
    .store
    .get(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound(state.config.locale.task_not_found()))?;

  Ok(Json(TaskDetail::new(task, now())))
}
