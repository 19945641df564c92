//! [`SqliteStore`], the SQLite implementation of [`TaskStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use taskboard_core::{
  store::TaskStore,
  task::{NewTask, Status, Task, TaskInput},
};

use crate::{
  Result,
  encode::{EncodedTask, RawTask, TASK_COLUMNS},
  schema::SCHEMA,
};

const INSERT_TASK: &str = "INSERT INTO tasks (
     title, description, assignee, priority, due_date, status, created_at
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

fn insert(conn: &rusqlite::Connection, row: &EncodedTask) -> rusqlite::Result<i64> {
  let mut stmt = conn.prepare_cached(INSERT_TASK)?;
  stmt.execute(rusqlite::params![
    row.title,
    row.description,
    row.assignee,
    row.priority,
    row.due_date,
    row.status,
    row.created_at,
  ])?;
  Ok(conn.last_insert_rowid())
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A task store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection handle is reference-counted. Each
/// operation holds the connection only for the duration of its closure.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("task schema ready");
    Ok(())
  }
}

// ─── TaskStore impl ──────────────────────────────────────────────────────────

impl TaskStore for SqliteStore {
  type Error = crate::Error;

  async fn initialize(&self) -> Result<()> { self.init_schema().await }

  async fn create(&self, input: TaskInput) -> Result<Task> {
    let new = input.validate()?;
    let created_at = Utc::now();
    let row = EncodedTask::new(&new, created_at);

    let id = self.conn.call(move |conn| Ok(insert(conn, &row)?)).await?;

    Ok(Task {
      id,
      title: new.title,
      description: new.description,
      assignee: new.assignee,
      priority: new.priority,
      due_date: new.due_date,
      status: new.status,
      created_at,
    })
  }

  async fn list_all(&self) -> Result<Vec<Task>> {
    let raws: Vec<RawTask> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawTask::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut tasks: Vec<Task> = raws
      .into_iter()
      .map(RawTask::into_task)
      .collect::<Result<_>>()?;

    // Rows arrive in id order and the sort is stable, so id breaks ties.
    tasks.sort_by_key(|t| (t.priority.rank(), t.due_date.is_none(), t.due_date));
    Ok(tasks)
  }

  async fn get(&self, id: i64) -> Result<Option<Task>> {
    let raw: Option<RawTask> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
              rusqlite::params![id],
              RawTask::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTask::into_task).transpose()
  }

  async fn update_status(&self, id: i64, status: Status) -> Result<()> {
    let status_str = status.as_str();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE tasks SET status = ?1 WHERE id = ?2",
          rusqlite::params![status_str, id],
        )?)
      })
      .await?;

    if changed == 0 {
      tracing::debug!(id, "status update matched no task");
    }
    Ok(())
  }

  async fn delete(&self, id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM tasks WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))?))
      .await?;
    Ok(n.max(0) as u64)
  }

  async fn seed_if_empty(&self, dataset: Vec<NewTask>) -> Result<usize> {
    let created_at = Utc::now();
    let rows: Vec<EncodedTask> = dataset
      .iter()
      .map(|t| EncodedTask::new(t, created_at))
      .collect();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        for row in &rows {
          insert(&tx, row)?;
        }
        tx.commit()?;
        Ok(rows.len())
      })
      .await?;

    if inserted > 0 {
      tracing::info!(inserted, "seeded demo tasks into empty store");
    } else {
      tracing::debug!("store already has tasks; skipping seed");
    }
    Ok(inserted)
  }
}
