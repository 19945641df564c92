//! Status changes.

use axum::{
  Form,
  extract::{Path, State},
  response::Redirect,
};
use serde::Deserialize;
use taskboard_core::{store::TaskStore, task::Status};

use crate::{AppState, error::Error};

#[derive(Debug, Deserialize)]
pub struct StatusForm {
  #[serde(default)]
  pub status: String,
}

/// `POST /task/{id}/status` with form body `status=<tag>`.
///
/// Anything outside [`Status::ALL`] is refused before the store is touched.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<i64>,
  Form(form): Form<StatusForm>,
) -> Result<Redirect, Error>
where
  S: TaskStore + Clone + 'static,
{
  let status: Status = form
    .status
    .parse()
    .map_err(|_| Error::BadRequest(state.config.locale.invalid_status()))?;

  state
    .store
    .update_status(id, status)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Redirect::to(&format!("/task/{id}")))
}
