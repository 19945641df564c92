//! SQL schema for the Taskboard SQLite store.
//!
//! Executed at connection startup and on every explicit
//! [`TaskStore::initialize`](taskboard_core::store::TaskStore::initialize).

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT guarantees ids are never reused after a delete.
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    assignee    TEXT NOT NULL DEFAULT '',
    priority    TEXT NOT NULL,                -- 'High' | 'Medium' | 'Low'
    due_date    TEXT,                         -- YYYY-MM-DD or NULL
    status      TEXT NOT NULL DEFAULT 'New',  -- 'New' | 'In Progress' | 'Done' | 'Deferred'
    created_at  TEXT NOT NULL                 -- RFC 3339 UTC; store-assigned
);
";
