use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use shared_utils::clock::Clock;

use crate::models::{BookingError, Slot};
use crate::services::slots;
use crate::store::AppointmentStore;

/// Prunes the candidate grid down to slots that are actually free.
pub struct AvailabilityService {
    store: Arc<AppointmentStore>,
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    pub fn new(store: Arc<AppointmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Free slots for a practitioner on a day, ascending by instant.
    /// The ordering is load-bearing: callers group slots by time-of-day
    /// label and present them chronologically.
    pub async fn available_slots(
        &self,
        practitioner_id: Uuid,
        day: NaiveDate,
    ) -> Result<Vec<Slot>, BookingError> {
        let now = self.clock.now();
        let candidates = slots::candidate_slots(practitioner_id, day, now);

        // One snapshot of the booked instants, so the whole grid is
        // filtered against a consistent appointment set.
        let occupied = self
            .store
            .scheduled_instants_on(practitioner_id, day)
            .await;

        let available: Vec<Slot> = candidates
            .into_iter()
            .filter(|slot| !occupied.contains(&slots::slot_key(slot.instant)))
            .collect();

        debug!(
            "Found {} available slots for practitioner {} on {}",
            available.len(),
            practitioner_id,
            day
        );

        Ok(available)
    }
}
