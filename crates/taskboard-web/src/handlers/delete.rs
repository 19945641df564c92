//! Task deletion. Deleting an id that does not exist still succeeds.

use axum::{
  Json,
  extract::{Path, State},
};
use serde_json::{Value, json};
use taskboard_core::store::TaskStore;

use crate::{AppState, error::Error};

/// `POST /task/{id}/delete`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, Error>
where
  S: TaskStore + Clone + 'static,
{
  state
    .store
    .delete(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::info!(id, "task deleted");
  Ok(Json(json!({ "success": true })))
}
