//! Derived values computed from already-fetched tasks.
//!
//! Nothing here touches storage; every function takes the reference time
//! explicitly so results are reproducible.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::task::{Priority, Status, Task};

// ─── Due dates ───────────────────────────────────────────────────────────────

/// Whole days from `now` until midnight at the start of `due_date`, rounded
/// toward negative infinity. `None` when there is no due date.
///
/// A task due today yields `-1` at any moment after midnight.
pub fn days_remaining(due_date: Option<NaiveDate>, now: NaiveDateTime) -> Option<i64> {
  let delta = due_date?.and_time(NaiveTime::MIN) - now;
  let days = delta.num_days();
  // `num_days` truncates toward zero.
  if delta < Duration::days(days) {
    Some(days - 1)
  } else {
    Some(days)
  }
}

/// A task is overdue when its due date has passed and it is not `Done`.
pub fn is_overdue(due_date: Option<NaiveDate>, status: Status, now: NaiveDateTime) -> bool {
  !status.is_done() && days_remaining(due_date, now).is_some_and(|d| d < 0)
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// Read model for a single task view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
  pub task:       Task,
  pub days_left:  Option<i64>,
  pub is_overdue: bool,
}

impl TaskDetail {
  pub fn new(task: Task, now: NaiveDateTime) -> Self {
    let days_left = days_remaining(task.due_date, now);
    let is_overdue = is_overdue(task.due_date, task.status, now);
    Self { task, days_left, is_overdue }
  }
}

// ─── Tally ───────────────────────────────────────────────────────────────────

/// Aggregate report over a task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
  pub total:           usize,
  /// Tasks whose status is `Done`.
  pub completed:       usize,
  pub overdue:         usize,
  /// Only statuses that occur at least once are present.
  pub status_counts:   BTreeMap<Status, usize>,
  /// Only priorities that occur at least once are present.
  pub priority_counts: BTreeMap<Priority, usize>,
  /// Distinct non-empty assignees, sorted lexicographically.
  pub assignees:       Vec<String>,
  /// Distinct statuses present, sorted lexicographically by tag.
  pub statuses:        Vec<Status>,
}

/// Count everything the report view needs in one pass over `tasks`.
pub fn tally(tasks: &[Task], now: NaiveDateTime) -> Tally {
  let mut out = Tally { total: tasks.len(), ..Tally::default() };
  let mut assignees = BTreeSet::new();

  for task in tasks {
    if task.status.is_done() {
      out.completed += 1;
    }
    if is_overdue(task.due_date, task.status, now) {
      out.overdue += 1;
    }
    *out.status_counts.entry(task.status).or_default() += 1;
    *out.priority_counts.entry(task.priority).or_default() += 1;
    if !task.assignee.is_empty() {
      assignees.insert(task.assignee.as_str());
    }
  }

  out.assignees = assignees.into_iter().map(str::to_owned).collect();
  out.statuses = out.status_counts.keys().copied().collect();
  out.statuses.sort_by_key(|s| s.as_str());
  out
}
