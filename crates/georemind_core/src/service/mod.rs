//! Core use-case services.
//!
//! # Responsibility
//! - Adapt the record store to the reminder outcome contract.
//! - Keep UI-state and geofence layers decoupled from storage details.

pub mod reminder_repository;
