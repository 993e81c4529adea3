//! Domain model for the shopping list.
//!
//! # Responsibility
//! - Define the canonical entry record and the view filter.
//! - Keep wire naming stable for the persisted snapshot format.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId` assigned at creation.
//! - The filter is session state and is never persisted.

pub mod entry;
