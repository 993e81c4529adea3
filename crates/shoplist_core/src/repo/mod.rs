//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the blob-store access contract the list store depends on.
//! - Isolate SQLite details from service orchestration.
//!
//! # Invariants
//! - Repository construction validates connection schema up front.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod snapshot_repo;
