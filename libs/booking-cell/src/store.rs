use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, BookingError};
use crate::services::slots::slot_key;

/// The appointment records, plus an index of scheduled reservations keyed
/// by (practitioner, minute-truncated instant). The index is what makes a
/// slot exclusive per practitioner per instant.
#[derive(Debug, Default)]
struct StoreInner {
    appointments: HashMap<Uuid, Appointment>,
    scheduled: HashMap<(Uuid, DateTime<Utc>), Uuid>,
}

/// The one shared mutable resource of the booking engine. Every write
/// happens under a single acquisition of the write lock, so the conflict
/// check and the insert of a new appointment form one serializable unit.
/// Reads take the read lock once and return owned snapshots; they run
/// concurrently with each other and never observe a torn appointment set.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    inner: RwLock<StoreInner>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic check-and-set: fails with `Conflict` if a scheduled
    /// appointment already holds the same (practitioner, instant) key.
    /// Two concurrent inserts for the same free slot serialize on the
    /// write lock, so at most one can succeed.
    pub async fn insert_scheduled(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, BookingError> {
        let key = (
            appointment.practitioner_id,
            slot_key(appointment.instant),
        );

        let mut inner = self.inner.write().await;
        if inner.scheduled.contains_key(&key) {
            debug!(
                "Slot {} already held for practitioner {}",
                appointment.instant, appointment.practitioner_id
            );
            return Err(BookingError::Conflict);
        }

        inner.scheduled.insert(key, appointment.id);
        inner
            .appointments
            .insert(appointment.id, appointment.clone());

        Ok(appointment)
    }

    pub async fn get(&self, id: Uuid) -> Option<Appointment> {
        self.inner.read().await.appointments.get(&id).cloned()
    }

    /// Apply a validated mutation to one appointment under the write lock.
    /// The closure sees a copy; the record and the scheduled index are only
    /// touched when it returns `Ok`, so a failed validation leaves the
    /// appointment unchanged.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<Appointment, BookingError>
    where
        F: FnOnce(&mut Appointment) -> Result<(), BookingError>,
    {
        let mut inner = self.inner.write().await;

        let mut updated = inner
            .appointments
            .get(&id)
            .cloned()
            .ok_or(BookingError::NotFound)?;

        apply(&mut updated)?;

        if updated.status != AppointmentStatus::Scheduled {
            inner
                .scheduled
                .remove(&(updated.practitioner_id, slot_key(updated.instant)));
        }
        inner.appointments.insert(id, updated.clone());

        Ok(updated)
    }

    /// Minute-truncated instants holding a scheduled appointment for the
    /// practitioner on the given day. One read-lock acquisition, so the
    /// availability grid is computed against a consistent snapshot.
    pub async fn scheduled_instants_on(
        &self,
        practitioner_id: Uuid,
        day: NaiveDate,
    ) -> HashSet<DateTime<Utc>> {
        let inner = self.inner.read().await;
        inner
            .scheduled
            .iter()
            .filter(|((pid, instant), _)| {
                *pid == practitioner_id && instant.date_naive() == day
            })
            .map(|((_, instant), _)| *instant)
            .collect()
    }

    /// Snapshot of every appointment owned by the account, in no
    /// particular order; callers sort per their view contract.
    pub async fn for_account(&self, account_id: Uuid) -> Vec<Appointment> {
        let inner = self.inner.read().await;
        inner
            .appointments
            .values()
            .filter(|a| a.account_id == account_id)
            .cloned()
            .collect()
    }
}
