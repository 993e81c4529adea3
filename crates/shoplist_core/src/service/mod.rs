//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into list use-case APIs.
//! - Keep view layers decoupled from storage details.

pub mod list_store;
