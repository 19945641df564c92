//! Human-facing labels and messages.
//!
//! The domain works with opaque English tags; this is the only place where
//! they are turned into words for a particular audience.

use serde::{Deserialize, Serialize};
use taskboard_core::{
  ValidationError,
  task::{Priority, Status},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Ru,
}

impl Locale {
  pub fn status(self, status: Status) -> &'static str {
    match (self, status) {
      (Self::En, s) => s.as_str(),
      (Self::Ru, Status::New) => "Новая",
      (Self::Ru, Status::InProgress) => "В работе",
      (Self::Ru, Status::Done) => "Готово",
      (Self::Ru, Status::Deferred) => "Отложено",
    }
  }

  pub fn priority(self, priority: Priority) -> &'static str {
    match (self, priority) {
      (Self::En, p) => p.as_str(),
      (Self::Ru, Priority::High) => "Высокий",
      (Self::Ru, Priority::Medium) => "Средний",
      (Self::Ru, Priority::Low) => "Низкий",
    }
  }

  /// Message shown above a re-presented creation form.
  pub fn validation(self, err: &ValidationError) -> &'static str {
    match (self, err) {
      (Self::En, ValidationError::EmptyTitle) => "Task title is required",
      (Self::En, ValidationError::InvalidDueDate(_)) => "Invalid date format",
      (Self::En, ValidationError::UnknownPriority(_)) => "Unknown priority",
      (Self::Ru, ValidationError::EmptyTitle) => "Название задачи обязательно",
      (Self::Ru, ValidationError::InvalidDueDate(_)) => "Неверный формат даты",
      (Self::Ru, ValidationError::UnknownPriority(_)) => "Неизвестный приоритет",
    }
  }

  pub fn task_not_found(self) -> &'static str {
    match self {
      Self::En => "Task not found",
      Self::Ru => "Задача не найдена",
    }
  }

  pub fn invalid_status(self) -> &'static str {
    match self {
      Self::En => "Invalid status",
      Self::Ru => "Неверный статус",
    }
  }
}

// ─── Choices ─────────────────────────────────────────────────────────────────

/// One option of a select input: the tag to submit and the label to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
  pub value: &'static str,
  pub label: &'static str,
}

/// Everything a client needs to render the creation and status forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
  pub priorities: Vec<Choice>,
  pub statuses:   Vec<Choice>,
}

impl FormOptions {
  pub fn new(locale: Locale) -> Self {
    Self {
      priorities: Priority::ALL
        .into_iter()
        .map(|p| Choice { value: p.as_str(), label: locale.priority(p) })
        .collect(),
      statuses:   Status::ALL
        .into_iter()
        .map(|s| Choice { value: s.as_str(), label: locale.status(s) })
        .collect(),
    }
  }
}
