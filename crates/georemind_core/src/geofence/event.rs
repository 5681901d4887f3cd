//! Platform geofence event shapes.

/// Transition kind reported by the platform geofence service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofenceTransition {
    Enter,
    Exit,
    Dwell,
}

/// One region whose perimeter triggered the event.
///
/// `request_id` is the identifier the region was registered under; this
/// core registers regions under the reminder's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggeringRegion {
    pub request_id: String,
}

impl TriggeringRegion {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// A geofence transition event as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeofencingEvent {
    /// Platform error code; `Some` means the event is unusable.
    pub error_code: Option<i32>,
    pub transition: GeofenceTransition,
    /// Regions in platform delivery order; only the first is resolved.
    pub triggering_regions: Vec<TriggeringRegion>,
}

impl GeofencingEvent {
    /// Builds a well-formed transition event.
    pub fn new(transition: GeofenceTransition, triggering_regions: Vec<TriggeringRegion>) -> Self {
        Self {
            error_code: None,
            transition,
            triggering_regions,
        }
    }

    /// Builds an errored event carrying the platform error code.
    pub fn with_error(error_code: i32, transition: GeofenceTransition) -> Self {
        Self {
            error_code: Some(error_code),
            transition,
            triggering_regions: Vec::new(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }
}
