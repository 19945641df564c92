//! Aggregate report.

use axum::{Json, extract::State};
use serde::Serialize;
use taskboard_core::{
  report::{Tally, tally},
  store::TaskStore,
  task::Task,
};

use crate::{AppState, error::Error, handlers::now};

#[derive(Debug, Serialize)]
pub struct Report {
  pub tasks: Vec<Task>,
  #[serde(flatten)]
  pub tally: Tally,
}

/// `GET /reports`
pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Json<Report>, Error>
where
  S: TaskStore + Clone + 'static,
{
  let tasks = state
    .store
    .list_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let tally = tally(&tasks, now());
  Ok(Json(Report { tasks, tally }))
}
