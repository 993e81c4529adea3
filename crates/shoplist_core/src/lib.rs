//! Core domain logic for the shopping list.
//! This crate is the single source of truth for list-state invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{Entry, EntryId, Filter, FilterParseError};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, SNAPSHOT_KEY,
};
pub use service::list_store::{ListSnapshot, ListStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
