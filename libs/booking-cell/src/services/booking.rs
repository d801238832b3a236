use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use catalog_cell::store::CatalogStore;
use shared_utils::clock::Clock;

use crate::models::{
    Appointment, AppointmentStatus, BookAppointmentRequest, BookingError, BookingPolicy,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::notify::Notifier;
use crate::services::slots;
use crate::store::AppointmentStore;

/// The sole writer of appointment state. Owns the validity checks around
/// booking and the lifecycle transitions out of `scheduled`.
pub struct BookingService {
    store: Arc<AppointmentStore>,
    catalog: Arc<CatalogStore>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    lifecycle: AppointmentLifecycleService,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(
        store: Arc<AppointmentStore>,
        catalog: Arc<CatalogStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            catalog,
            clock,
            notifier,
            lifecycle: AppointmentLifecycleService::new(),
            policy: BookingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reserve a slot. The future-dated check runs against the clock at
    /// commit time, never against a slot object the caller may have held
    /// across the availability query. The conflict check and the insert
    /// are one atomic unit inside the store.
    pub async fn book(
        &self,
        account_id: Uuid,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        info!(
            "Booking appointment for account {} with practitioner {}",
            account_id, request.practitioner_id
        );

        let specialty = self
            .catalog
            .specialty(request.specialty_id)
            .ok_or(BookingError::SpecialtyNotFound)?;
        let practitioner = self
            .catalog
            .practitioner(request.practitioner_id)
            .ok_or(BookingError::PractitionerNotFound)?;

        if practitioner.specialty_id != specialty.id {
            return Err(BookingError::Validation(format!(
                "Practitioner {} does not practice {}",
                practitioner.name, specialty.name
            )));
        }

        if !slots::is_grid_aligned(request.instant) {
            return Err(BookingError::Validation(
                "Appointment time is not on the booking grid".to_string(),
            ));
        }

        let now = self.clock.now();
        if request.instant <= now {
            return Err(BookingError::Validation(
                "Appointment time must be in the future".to_string(),
            ));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            account_id,
            practitioner_id: practitioner.id,
            specialty_id: specialty.id,
            instant: request.instant,
            status: AppointmentStatus::Scheduled,
            created_at: now,
        };

        let appointment = self.store.insert_scheduled(appointment).await?;

        self.notifier.appointment_booked(&appointment).await;

        info!(
            "Appointment {} booked for account {} at {}",
            appointment.id, account_id, appointment.instant
        );
        Ok(appointment)
    }

    /// Cancel a scheduled appointment. Ownership is checked before any
    /// state inspection, and a failed check leaves the record untouched.
    /// Re-cancelling is an error, never a silent success.
    pub async fn cancel(
        &self,
        account_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, BookingError> {
        debug!("Cancelling appointment: {}", appointment_id);

        let now = self.clock.now();
        let notice = self.policy.cancellation_notice_hours;
        let lifecycle = &self.lifecycle;

        let cancelled = self
            .store
            .update(appointment_id, |appointment| {
                if appointment.account_id != account_id {
                    return Err(BookingError::Unauthorized);
                }

                lifecycle.validate_status_transition(
                    &appointment.status,
                    &AppointmentStatus::Cancelled,
                )?;

                if appointment.instant <= now {
                    return Err(BookingError::InvalidTime(
                        "Appointment has already started".to_string(),
                    ));
                }

                if let Some(hours) = notice {
                    if appointment.instant - now < Duration::hours(hours) {
                        return Err(BookingError::InvalidTime(format!(
                            "Cancellations require {} hours notice",
                            hours
                        )));
                    }
                }

                appointment.status = AppointmentStatus::Cancelled;
                Ok(())
            })
            .await?;

        self.notifier.appointment_cancelled(&cancelled).await;

        info!("Appointment {} cancelled", appointment_id);
        Ok(cancelled)
    }

    /// Mark a scheduled appointment as completed. The transition is only
    /// legal once the appointment's instant has passed; the confirmation
    /// itself comes from outside the core, this is its entry point.
    pub async fn complete(
        &self,
        account_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, BookingError> {
        debug!("Completing appointment: {}", appointment_id);

        let now = self.clock.now();
        let lifecycle = &self.lifecycle;

        let completed = self
            .store
            .update(appointment_id, |appointment| {
                if appointment.account_id != account_id {
                    return Err(BookingError::Unauthorized);
                }

                lifecycle.validate_status_transition(
                    &appointment.status,
                    &AppointmentStatus::Completed,
                )?;

                if appointment.instant > now {
                    return Err(BookingError::InvalidTime(
                        "Appointment has not taken place yet".to_string(),
                    ));
                }

                appointment.status = AppointmentStatus::Completed;
                Ok(())
            })
            .await?;

        info!("Appointment {} completed", appointment_id);
        Ok(completed)
    }

    /// Fetch one appointment, visible only to its owner.
    pub async fn appointment(
        &self,
        account_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<Appointment, BookingError> {
        let appointment = self
            .store
            .get(appointment_id)
            .await
            .ok_or(BookingError::NotFound)?;

        if appointment.account_id != account_id {
            warn!(
                "Account {} attempted to read appointment {} it does not own",
                account_id, appointment_id
            );
            return Err(BookingError::Unauthorized);
        }

        Ok(appointment)
    }
}
