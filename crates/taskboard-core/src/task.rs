//! Task types: the single entity tracked by Taskboard.
//!
//! Priority and status are closed sets. They are stored and serialised as
//! opaque English tags; human-facing labels belong to the presentation layer.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, ValidationError};

/// Accepted textual form of a due date.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Priority ────────────────────────────────────────────────────────────────

/// How urgent a task is. Declaration order is rank order.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
  High,
  Medium,
  Low,
}

impl Priority {
  pub const ALL: [Priority; 3] = [Self::High, Self::Medium, Self::Low];

  /// Sort rank used by task listings; lower sorts first.
  pub fn rank(self) -> u8 {
    match self {
      Self::High => 1,
      Self::Medium => 2,
      Self::Low => 3,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::High => "High",
      Self::Medium => "Medium",
      Self::Low => "Low",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Priority {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| ValidationError::UnknownPriority(s.to_owned()))
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a task is in its lifecycle. `Done` is the only terminal value.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
pub enum Status {
  #[default]
  New,
  #[serde(rename = "In Progress")]
  InProgress,
  Done,
  Deferred,
}

impl Status {
  /// The allow-list for status updates.
  pub const ALL: [Status; 4] =
    [Self::New, Self::InProgress, Self::Done, Self::Deferred];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::New => "New",
      Self::InProgress => "In Progress",
      Self::Done => "Done",
      Self::Deferred => "Deferred",
    }
  }

  pub fn is_done(self) -> bool { matches!(self, Self::Done) }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Status {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|st| st.as_str() == s)
      .ok_or_else(|| Error::InvalidStatus(s.to_owned()))
  }
}

// ─── Task ────────────────────────────────────────────────────────────────────

/// A stored task. Only `status` ever changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub assignee:    String,
  pub priority:    Priority,
  pub due_date:    Option<NaiveDate>,
  pub status:      Status,
  /// Store-assigned timestamp; never changes after creation.
  pub created_at:  DateTime<Utc>,
}

// ─── NewTask ─────────────────────────────────────────────────────────────────

/// A validated task ready to be inserted. `id` and `created_at` are always
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
  pub title:       String,
  pub description: String,
  pub assignee:    String,
  pub priority:    Priority,
  pub due_date:    Option<NaiveDate>,
  pub status:      Status,
}

impl NewTask {
  /// Convenience constructor with the optional fields left empty and the
  /// status set to [`Status::New`].
  pub fn new(title: impl Into<String>, priority: Priority) -> Self {
    Self {
      title: title.into(),
      description: String::new(),
      assignee: String::new(),
      priority,
      due_date: None,
      status: Status::default(),
    }
  }
}

// ─── TaskInput ───────────────────────────────────────────────────────────────

/// Raw, untrusted task fields as submitted by a user.
///
/// Every field may be missing; missing fields are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInput {
  pub title:       String,
  pub description: String,
  pub assignee:    String,
  pub priority:    String,
  pub due_date:    String,
}

impl TaskInput {
  /// Check the submission and turn it into a [`NewTask`] with status `New`.
  ///
  /// Text fields are trimmed. A blank priority falls into the lowest rank; a
  /// blank due date means "no due date".
  pub fn validate(self) -> Result<NewTask, ValidationError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(ValidationError::EmptyTitle);
    }

    let priority = match self.priority.trim() {
      "" => Priority::Low,
      other => other.parse()?,
    };

    let due_date = match self.due_date.trim() {
      "" => None,
      raw => Some(parse_due_date(raw)?),
    };

    Ok(NewTask {
      title: title.to_owned(),
      description: self.description.trim().to_owned(),
      assignee: self.assignee.trim().to_owned(),
      priority,
      due_date,
      status: Status::New,
    })
  }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// chrono alone accepts short, signed and unpadded fields, so the shape is
/// checked first: four-digit year, two-digit month and day.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, ValidationError> {
  let invalid = || ValidationError::InvalidDueDate(raw.to_owned());
  if !has_date_shape(raw) {
    return Err(invalid());
  }
  NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(raw: &str) -> bool {
  let bytes = raw.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input(title: &str, priority: &str, due_date: &str) -> TaskInput {
    TaskInput {
      title: title.into(),
      priority: priority.into(),
      due_date: due_date.into(),
      ..TaskInput::default()
    }
  }

  #[test]
  fn validate_trims_and_defaults_status() {
    let new = TaskInput {
      title:       "  Write report ".into(),
      description: " draft first ".into(),
      assignee:    " Ann ".into(),
      priority:    "High".into(),
      due_date:    "2025-11-20".into(),
    }
    .validate()
    .unwrap();

    assert_eq!(new.title, "Write report");
    assert_eq!(new.description, "draft first");
    assert_eq!(new.assignee, "Ann");
    assert_eq!(new.priority, Priority::High);
    assert_eq!(new.due_date, NaiveDate::from_ymd_opt(2025, 11, 20));
    assert_eq!(new.status, Status::New);
  }

  #[test]
  fn blank_title_is_rejected() {
    assert_eq!(input("", "High", "").validate(), Err(ValidationError::EmptyTitle));
    assert_eq!(
      input("  \t ", "High", "").validate(),
      Err(ValidationError::EmptyTitle)
    );
  }

  #[test]
  fn impossible_due_date_is_rejected() {
    assert_eq!(
      input("x", "Low", "2025-13-40").validate(),
      Err(ValidationError::InvalidDueDate("2025-13-40".into()))
    );
    assert!(input("x", "Low", "2025-02-30").validate().is_err());
    assert!(input("x", "Low", "10/09/2025").validate().is_err());
  }

  #[test]
  fn due_date_needs_full_width_fields() {
    for raw in ["25-1-1", "0-1-1", "+12025-01-01", "-0001-01-01", "2025-1-5", "2025-01-5"] {
      assert_eq!(
        input("x", "Low", raw).validate(),
        Err(ValidationError::InvalidDueDate(raw.into())),
        "{raw} should be rejected"
      );
    }
    assert_eq!(
      parse_due_date("0025-01-01"),
      Ok(NaiveDate::from_ymd_opt(25, 1, 1).unwrap())
    );
  }

  #[test]
  fn due_date_surrounding_whitespace_is_trimmed() {
    let new = input("x", "Low", " 2025-01-01 ").validate().unwrap();
    assert_eq!(new.due_date, NaiveDate::from_ymd_opt(2025, 1, 1));
    assert!(parse_due_date(" 2025-01-01").is_err());
  }

  #[test]
  fn blank_due_date_means_none() {
    let new = input("x", "Medium", "   ").validate().unwrap();
    assert_eq!(new.due_date, None);
  }

  #[test]
  fn unknown_priority_is_rejected_and_blank_is_low() {
    assert_eq!(
      input("x", "Urgent", "").validate(),
      Err(ValidationError::UnknownPriority("Urgent".into()))
    );
    assert_eq!(input("x", "", "").validate().unwrap().priority, Priority::Low);
  }

  #[test]
  fn status_allow_list() {
    assert_eq!("In Progress".parse::<Status>(), Ok(Status::InProgress));
    assert_eq!("Deferred".parse::<Status>(), Ok(Status::Deferred));
    assert_eq!(
      "Bogus".parse::<Status>(),
      Err(Error::InvalidStatus("Bogus".into()))
    );
    // Tags are exact; no case folding.
    assert!("done".parse::<Status>().is_err());
  }

  #[test]
  fn priority_rank_table() {
    assert_eq!(Priority::High.rank(), 1);
    assert_eq!(Priority::Medium.rank(), 2);
    assert_eq!(Priority::Low.rank(), 3);
  }

  #[test]
  fn serde_uses_display_tags() {
    assert_eq!(
      serde_json::to_string(&Status::InProgress).unwrap(),
      "\"In Progress\""
    );
    assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Medium\"");
    let s: Status = serde_json::from_str("\"Done\"").unwrap();
    assert_eq!(s, Status::Done);
  }
}
