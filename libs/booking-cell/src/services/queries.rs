use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_utils::clock::Clock;

use crate::models::{Appointment, AppointmentStatus};
use crate::store::AppointmentStore;

/// Derives the patient-facing "upcoming" and "past" views from the
/// appointment set. Pure reads over one store snapshot per call.
pub struct AppointmentQueryService {
    store: Arc<AppointmentStore>,
    clock: Arc<dyn Clock>,
}

impl AppointmentQueryService {
    pub fn new(store: Arc<AppointmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Scheduled appointments that have not started yet, soonest first.
    pub async fn upcoming(&self, account_id: Uuid) -> Vec<Appointment> {
        let now = self.clock.now();
        let mut appointments: Vec<Appointment> = self
            .store
            .for_account(account_id)
            .await
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled && a.instant >= now)
            .collect();

        appointments.sort_by(|a, b| a.instant.cmp(&b.instant));

        debug!(
            "Account {} has {} upcoming appointments",
            account_id,
            appointments.len()
        );
        appointments
    }

    /// History view: terminal appointments plus scheduled ones whose
    /// instant has passed, most recent first.
    pub async fn past(&self, account_id: Uuid) -> Vec<Appointment> {
        let now = self.clock.now();
        let mut appointments: Vec<Appointment> = self
            .store
            .for_account(account_id)
            .await
            .into_iter()
            .filter(|a| match a.status {
                AppointmentStatus::Completed | AppointmentStatus::Cancelled => true,
                AppointmentStatus::Scheduled => a.instant < now,
            })
            .collect();

        appointments.sort_by(|a, b| b.instant.cmp(&a.instant));

        debug!(
            "Account {} has {} past appointments",
            account_id,
            appointments.len()
        );
        appointments
    }
}
