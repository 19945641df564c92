//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, due dates as `YYYY-MM-DD`, and
//! priority/status as their display tags.
//!
//! Decoding also accepts rows written by the earlier Russian-language app that
//! shared the same `tasks` table: Russian priority/status tags and SQLite
//! `CURRENT_TIMESTAMP` values (`YYYY-MM-DD HH:MM:SS`, UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use taskboard_core::task::{DUE_DATE_FORMAT, NewTask, Priority, Status, Task};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

/// Format of SQLite's `CURRENT_TIMESTAMP`.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT)
    .map(|dt| dt.and_utc())
    .map_err(|e| Error::Decode(format!("created_at {s:?}: {e}")))
}

// ─── Due date ────────────────────────────────────────────────────────────────

pub fn encode_due_date(d: Option<NaiveDate>) -> Option<String> {
  d.map(|d| d.format(DUE_DATE_FORMAT).to_string())
}

/// `NULL` and the empty string both mean "no due date".
pub fn decode_due_date(s: Option<&str>) -> Result<Option<NaiveDate>> {
  match s {
    None | Some("") => Ok(None),
    Some(raw) => NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
      .map(Some)
      .map_err(|e| Error::Decode(format!("due_date {raw:?}: {e}"))),
  }
}

// ─── Priority / Status ───────────────────────────────────────────────────────

const LEGACY_PRIORITIES: [(&str, Priority); 3] = [
  ("Высокий", Priority::High),
  ("Средний", Priority::Medium),
  ("Низкий", Priority::Low),
];

const LEGACY_STATUSES: [(&str, Status); 4] = [
  ("Новая", Status::New),
  ("В работе", Status::InProgress),
  ("Готово", Status::Done),
  ("Отложено", Status::Deferred),
];

fn legacy_tag<T: Copy>(table: &[(&str, T)], s: &str) -> Option<T> {
  table.iter().find(|(tag, _)| *tag == s).map(|&(_, v)| v)
}

/// `NULL` and the empty string fall into the lowest rank, as a blank
/// submission does.
pub fn decode_priority(s: Option<&str>) -> Result<Priority> {
  let s = match s {
    None | Some("") => return Ok(Priority::Low),
    Some(s) => s,
  };
  s.parse()
    .ok()
    .or_else(|| legacy_tag(&LEGACY_PRIORITIES, s))
    .ok_or_else(|| Error::Decode(format!("unknown priority: {s:?}")))
}

pub fn decode_status(s: &str) -> Result<Status> {
  s.parse()
    .ok()
    .or_else(|| legacy_tag(&LEGACY_STATUSES, s))
    .ok_or_else(|| Error::Decode(format!("unknown status: {s:?}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that feeds [`RawTask::from_row`].
pub const TASK_COLUMNS: &str =
  "id, title, description, assignee, priority, due_date, status, created_at";

/// Raw values read directly from a `tasks` row.
pub struct RawTask {
  pub id:          i64,
  pub title:       String,
  pub description: Option<String>,
  pub assignee:    Option<String>,
  pub priority:    Option<String>,
  pub due_date:    Option<String>,
  pub status:      String,
  pub created_at:  String,
}

impl RawTask {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      assignee:    row.get(3)?,
      priority:    row.get(4)?,
      due_date:    row.get(5)?,
      status:      row.get(6)?,
      created_at:  row.get(7)?,
    })
  }

  pub fn into_task(self) -> Result<Task> {
    Ok(Task {
      id:          self.id,
      title:       self.title,
      description: self.description.unwrap_or_default(),
      assignee:    self.assignee.unwrap_or_default(),
      priority:    decode_priority(self.priority.as_deref())?,
      due_date:    decode_due_date(self.due_date.as_deref())?,
      status:      decode_status(&self.status)?,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Column values for one `INSERT`, owned so they can cross into the
/// connection thread.
pub struct EncodedTask {
  pub title:       String,
  pub description: String,
  pub assignee:    String,
  pub priority:    &'static str,
  pub due_date:    Option<String>,
  pub status:      &'static str,
  pub created_at:  String,
}

impl EncodedTask {
  pub fn new(task: &NewTask, created_at: DateTime<Utc>) -> Self {
    Self {
      title:       task.title.clone(),
      description: task.description.clone(),
      assignee:    task.assignee.clone(),
      priority:    task.priority.as_str(),
      due_date:    encode_due_date(task.due_date),
      status:      task.status.as_str(),
      created_at:  encode_dt(created_at),
    }
  }
}
