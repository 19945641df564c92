//! HTTP layer for Taskboard.
//!
//! Exposes an axum [`Router`] backed by any [`TaskStore`]. Responses are JSON
//! or redirects; page rendering is left to the client.

pub mod error;
pub mod handlers;
pub mod labels;
pub mod settings;

pub use settings::ServerConfig;
pub use error::Error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use taskboard_core::store::TaskStore;
use tower_http::trace::TraceLayer;

use handlers::{create, delete, detail, list, reports, status};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: TaskStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the task tracker.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: TaskStore + Clone + 'static,
{
  Router::new()
    .route("/",                  get(list::handler::<S>))
    .route("/create",            get(create::form::<S>).post(create::submit::<S>))
    .route("/task/{id}",         get(detail::handler::<S>))
    .route("/task/{id}/status",  post(status::handler::<S>))
    .route("/task/{id}/delete",  post(delete::handler::<S>))
    .route("/reports",           get(reports::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use serde_json::Value;
  use taskboard_core::task::{Status, TaskInput};
  use taskboard_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use crate::labels::Locale;

  async fn make_state(locale: Locale) -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState {
      store:  Arc::new(store),
      config: Arc::new(ServerConfig {
        host:           "127.0.0.1".to_string(),
        port:           5000,
        store_path:     PathBuf::from(":memory:"),
        seed_demo_data: false,
        locale,
      }),
    }
  }

  async fn add_task(state: &AppState<SqliteStore>, title: &str, priority: &str, due: &str) -> i64 {
    state
      .store
      .create(TaskInput {
        title: title.into(),
        priority: priority.into(),
        due_date: due.into(),
        ..TaskInput::default()
      })
      .await
      .unwrap()
      .id
  }

  async fn send(state: AppState<SqliteStore>, method: &str, uri: &str) -> Response {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn post_form(state: AppState<SqliteStore>, uri: &str, body: &str) -> Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
      .body(Body::from(body.to_string()))
      .unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn location(resp: &Response) -> &str {
    resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
  }

  // ── Listing ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_lists_tasks_by_priority() {
    let state = make_state(Locale::En).await;
    add_task(&state, "low", "Low", "").await;
    add_task(&state, "high", "High", "").await;
    add_task(&state, "medium", "Medium", "").await;

    let resp = send(state, "GET", "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let titles: Vec<&str> = json
      .as_array()
      .unwrap()
      .iter()
      .map(|t| t["title"].as_str().unwrap())
      .collect();
    assert_eq!(titles, ["high", "medium", "low"]);
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_form_lists_localized_choices() {
    let state = make_state(Locale::Ru).await;
    let resp = send(state, "GET", "/create").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["priorities"][0]["value"], "High");
    assert_eq!(json["priorities"][0]["label"], "Высокий");
    assert_eq!(json["statuses"][1]["value"], "In Progress");
  }

  #[tokio::test]
  async fn create_redirects_to_index() {
    let state = make_state(Locale::En).await;
    let resp = post_form(
      state.clone(),
      "/create",
      "title=Record+demo+video&description=&assignee=Artem&priority=High&due_date=2025-12-10",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let tasks = state.store.list_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Record demo video");
    assert_eq!(tasks[0].assignee, "Artem");
    assert_eq!(tasks[0].status, Status::New);
  }

  #[tokio::test]
  async fn create_with_blank_title_re_presents_form() {
    let state = make_state(Locale::Ru).await;
    let resp = post_form(state.clone(), "/create", "title=+++&priority=Low&due_date=").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Название задачи обязательно");
    assert_eq!(json["form"]["priority"], "Low");
    assert_eq!(state.store.count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn create_with_bad_date_re_presents_form() {
    let state = make_state(Locale::En).await;
    let resp = post_form(state.clone(), "/create", "title=x&priority=High&due_date=2025-13-40").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Invalid date format");
    assert_eq!(json["form"]["due_date"], "2025-13-40");
    assert_eq!(state.store.count().await.unwrap(), 0);
  }

  // ── Detail ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn detail_reports_overdue_task() {
    let state = make_state(Locale::En).await;
    let id = add_task(&state, "old", "High", "2000-01-01").await;

    let resp = send(state, "GET", &format!("/task/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["task"]["id"], id);
    assert_eq!(json["task"]["status"], "New");
    assert_eq!(json["is_overdue"], true);
    assert!(json["days_left"].as_i64().unwrap() < 0);
  }

  #[tokio::test]
  async fn detail_without_due_date_has_null_days_left() {
    let state = make_state(Locale::En).await;
    let id = add_task(&state, "open-ended", "Low", "").await;

    let json = body_json(send(state, "GET", &format!("/task/{id}")).await).await;
    assert!(json["days_left"].is_null());
    assert_eq!(json["is_overdue"], false);
  }

  #[tokio::test]
  async fn detail_of_missing_task_is_404() {
    let state = make_state(Locale::Ru).await;
    let resp = send(state, "GET", "/task/77").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Задача не найдена");
  }

  // ── Status ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn status_update_redirects_to_detail() {
    let state = make_state(Locale::En).await;
    let id = add_task(&state, "x", "Medium", "").await;

    let resp = post_form(state.clone(), &format!("/task/{id}/status"), "status=In+Progress").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/task/{id}"));

    let task = state.store.get(id).await.unwrap().unwrap();
    assert_eq!(task.status, Status::InProgress);
  }

  #[tokio::test]
  async fn bogus_status_is_400_and_leaves_task_unchanged() {
    let state = make_state(Locale::En).await;
    let id = add_task(&state, "x", "Medium", "").await;

    let resp = post_form(state.clone(), &format!("/task/{id}/status"), "status=Bogus").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "Invalid status");

    let task = state.store.get(id).await.unwrap().unwrap();
    assert_eq!(task.status, Status::New);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_acknowledges_existing_and_missing_ids() {
    let state = make_state(Locale::En).await;
    let id = add_task(&state, "x", "Low", "").await;

    for target in [id, 9999] {
      let resp = send(state.clone(), "POST", &format!("/task/{target}/delete")).await;
      assert_eq!(resp.status(), StatusCode::OK);
      assert_eq!(body_json(resp).await, serde_json::json!({ "success": true }));
    }
    assert_eq!(state.store.count().await.unwrap(), 0);
  }

  // ── Reports ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn reports_tally_seeded_store() {
    let state = make_state(Locale::En).await;
    state
      .store
      .seed_if_empty(taskboard_core::seed::demo_dataset())
      .await
      .unwrap();

    let resp = send(state, "GET", "/reports").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;

    assert_eq!(json["total"], 18);
    assert_eq!(json["completed"], 7);
    assert_eq!(json["tasks"].as_array().unwrap().len(), 18);
    assert_eq!(json["status_counts"]["In Progress"], 3);
    assert_eq!(json["priority_counts"]["High"], 10);
    assert_eq!(json["assignees"], serde_json::json!(["Артём", "Василий", "Георгий"]));
    assert_eq!(json["statuses"], serde_json::json!(["Done", "In Progress", "New"]));
  }
}
