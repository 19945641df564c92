//! Task creation.

use axum::{
  Form, Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use taskboard_core::{
  Error as CoreError,
  store::{StoreError as _, TaskStore},
  task::TaskInput,
};

use crate::{
  AppState,
  error::Error,
  labels::FormOptions,
};

/// Body returned when a submission is refused: the message plus what the
/// user typed, so the form can be shown again pre-filled.
#[derive(Debug, Serialize)]
pub struct FormRejection {
  pub error: &'static str,
  pub form:  TaskInput,
}

/// `GET /create`
pub async fn form<S>(State(state): State<AppState<S>>) -> Json<FormOptions>
where
  S: TaskStore + Clone + 'static,
{
  Json(FormOptions::new(state.config.locale))
}

/// `POST /create` with a form body with `title`, `description`, `assignee`,
/// `priority`, `due_date`.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(input): Form<TaskInput>,
) -> Result<Response, Error>
where
  S: TaskStore + Clone + 'static,
{
  match state.store.create(input.clone()).await {
    Ok(task) => {
      tracing::info!(id = task.id, "task created");
      Ok(Redirect::to("/").into_response())
    }
    Err(e) => match e.as_domain() {
      Some(CoreError::Validation(v)) => {
        let error = state.config.locale.validation(v);
        Ok((StatusCode::OK, Json(FormRejection { error, form: input })).into_response())
      }
      _ => Err(Error::Store(Box::new(e))),
    },
  }
}
