//! UI-observable state models.
//!
//! # Responsibility
//! - Hold loading/list/message state for screens behind observable cells.
//! - Orchestrate repository calls and publish outcomes for a reader to
//!   observe.
//!
//! # Invariants
//! - Each cell has a single writer (the owning model); readers observe
//!   through `get` or subscriptions.
//! - Models never bypass the repository's outcome contract.

mod list_model;
mod observable;
mod save_model;

pub use list_model::RemindersListModel;
pub use observable::Observable;
pub use save_model::SaveReminderModel;
