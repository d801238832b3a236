use async_trait::async_trait;
use tracing::info;

use crate::models::Appointment;

/// Outbound notification seam. Email/SMS delivery lives outside the core;
/// the engine only reports lifecycle events through this trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn appointment_booked(&self, appointment: &Appointment);
    async fn appointment_cancelled(&self, appointment: &Appointment);
}

/// Stub delivery channel that writes structured log lines.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn appointment_booked(&self, appointment: &Appointment) {
        info!(
            appointment_id = %appointment.id,
            account_id = %appointment.account_id,
            instant = %appointment.instant,
            "Appointment booked"
        );
    }

    async fn appointment_cancelled(&self, appointment: &Appointment) {
        info!(
            appointment_id = %appointment.id,
            account_id = %appointment.account_id,
            instant = %appointment.instant,
            "Appointment cancelled"
        );
    }
}
