//! Task listing.

use axum::{Json, extract::State};
use taskboard_core::{store::TaskStore, task::Task};

use crate::{AppState, error::Error};

/// `GET /`
pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Task>>, Error>
where
  S: TaskStore + Clone + 'static,
{
  let tasks = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(Json(tasks))
}
