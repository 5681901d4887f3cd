//! Persistence layer for reminder records.
//!
//! # Responsibility
//! - Define the record-store contract consumed by the repository.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Store implementations return semantic absence (`Ok(None)`) rather than
//!   inventing errors for missing rows.

pub mod reminder_store;
