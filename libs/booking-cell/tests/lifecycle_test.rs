use assert_matches::assert_matches;

use booking_cell::models::{AppointmentStatus, BookingError};
use booking_cell::services::lifecycle::AppointmentLifecycleService;

#[test]
fn scheduled_can_complete_or_cancel() {
    let lifecycle = AppointmentLifecycleService::new();

    assert!(lifecycle
        .validate_status_transition(
            &AppointmentStatus::Scheduled,
            &AppointmentStatus::Completed
        )
        .is_ok());
    assert!(lifecycle
        .validate_status_transition(
            &AppointmentStatus::Scheduled,
            &AppointmentStatus::Cancelled
        )
        .is_ok());
}

#[test]
fn terminal_states_reject_every_transition() {
    let lifecycle = AppointmentLifecycleService::new();

    for terminal in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
        assert!(lifecycle.is_terminal(&terminal));
        for target in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_matches!(
                lifecycle.validate_status_transition(&terminal, &target),
                Err(BookingError::InvalidStatusTransition(_))
            );
        }
    }
}

#[test]
fn scheduled_is_not_terminal_and_cannot_reenter_itself() {
    let lifecycle = AppointmentLifecycleService::new();

    assert!(!lifecycle.is_terminal(&AppointmentStatus::Scheduled));
    assert_matches!(
        lifecycle.validate_status_transition(
            &AppointmentStatus::Scheduled,
            &AppointmentStatus::Scheduled
        ),
        Err(BookingError::InvalidStatusTransition(_))
    );
}
