//! Route handlers, one module per resource action.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Tasks by priority, then due date |
//! | `GET`  | `/create` | Select options for the forms |
//! | `POST` | `/create` | Form body; `303` to `/`, or `200` with the error and the echoed form |
//! | `GET`  | `/task/{id}` | Task with `days_left` / `is_overdue`; `404` if missing |
//! | `POST` | `/task/{id}/status` | Form body `status`; `400` if not an allowed value |
//! | `POST` | `/task/{id}/delete` | Always `{"success": true}` |
//! | `GET`  | `/reports` | All tasks plus the tally |

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod reports;
pub mod status;

use chrono::{Local, NaiveDateTime};

/// Wall-clock time used for due-date arithmetic.
pub(super) fn now() -> NaiveDateTime { Local::now().naive_local() }
