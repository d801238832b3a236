use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable reference data, created at seed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
}

/// A practitioner always belongs to exactly one specialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: Uuid,
    pub name: String,
    pub specialty_id: Uuid,
}
