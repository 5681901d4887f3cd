//! Reminder domain model.
//!
//! # Responsibility
//! - Define the persisted reminder record and its draft counterpart.
//! - Centralize the save-time validation rules (title, then location).
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - Validation order is fixed: a missing title is reported before a
//!   missing location, regardless of other fields.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a reminder record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// A geofenced reminder: a place label plus coordinates and the text shown
/// when the perimeter is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID, also used as the geofence request id.
    pub id: ReminderId,
    /// Short text shown as the notification headline.
    pub title: String,
    /// Optional free-form body text.
    pub description: Option<String>,
    /// Human-readable label of the selected place.
    pub location: String,
    /// Latitude of the geofence center, decimal degrees.
    pub latitude: f64,
    /// Longitude of the geofence center, decimal degrees.
    pub longitude: f64,
}

impl Reminder {
    /// Creates a reminder with a freshly generated stable ID.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a reminder with a caller-provided stable ID.
    ///
    /// Used when identity already exists externally, e.g. rows read back
    /// from storage or records re-registered with the geofence service.
    pub fn with_id(
        id: ReminderId,
        title: impl Into<String>,
        description: Option<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            location: location.into(),
            latitude,
            longitude,
        }
    }
}

/// Save-flow validation failure, one variant per user-facing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is missing or empty.
    MissingTitle,
    /// Place label is missing or empty, or no point was actually picked.
    MissingLocation,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Please enter title"),
            Self::MissingLocation => write!(f, "Please select location"),
        }
    }
}

impl Error for ValidationError {}

/// In-progress reminder input, as the save screen assembles it.
///
/// Every field is optional here; `validate` is the only way to turn a draft
/// into a persistable [`Reminder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderDraft {
    /// Validates the draft and produces a reminder with a fresh ID.
    ///
    /// Rules are checked in order and the first failure wins:
    /// 1. `title` must be present and non-empty.
    /// 2. `location` must be present and non-empty, and coordinates must
    ///    have been captured alongside it.
    pub fn validate(&self) -> Result<Reminder, ValidationError> {
        let title = match self.title.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ValidationError::MissingTitle),
        };

        let location = match self.location.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ValidationError::MissingLocation),
        };

        // A label without coordinates means no point was actually selected.
        let (latitude, longitude) = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(ValidationError::MissingLocation),
        };

        Ok(Reminder::new(
            title,
            self.description.clone(),
            location,
            latitude,
            longitude,
        ))
    }

    /// Clears every slot, used after a completed save or abandoned flow.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
