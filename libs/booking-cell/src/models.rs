use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A persisted reservation. Appointments are never deleted, only
/// status-transitioned, so the past view keeps its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub account_id: Uuid,
    pub practitioner_id: Uuid,
    pub specialty_id: Uuid,
    pub instant: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A candidate bookable instant for a practitioner. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub practitioner_id: Uuid,
    pub instant: DateTime<Utc>,
    pub is_available: bool,
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub practitioner_id: Uuid,
    pub specialty_id: Uuid,
    pub instant: DateTime<Utc>,
}

// ==============================================================================
// BOOKING POLICY
// ==============================================================================

/// Business rules around booking and cancellation. The product copy
/// advertises a 24-hour cancellation cutoff that has never been enforced;
/// `cancellation_notice_hours` keeps that rule a configuration decision
/// instead of a silent hard-coding.
#[derive(Debug, Clone)]
pub struct BookingPolicy {
    pub cancellation_notice_hours: Option<i64>,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            cancellation_notice_hours: None,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Practitioner not found")]
    PractitionerNotFound,

    #[error("Specialty not found")]
    SpecialtyNotFound,

    #[error("Appointment slot conflicts with an existing booking")]
    Conflict,

    #[error("Not authorized to access this appointment")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),

    #[error("Storage error: {0}")]
    Dependency(String),
}
