//! Core types and trait definitions for the Taskboard task tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod report;
pub mod seed;
pub mod store;
pub mod task;

pub use error::{Error, Result, ValidationError};
