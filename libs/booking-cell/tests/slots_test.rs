use chrono::{TimeZone, Timelike, Utc};
use uuid::Uuid;

use booking_cell::services::slots::{candidate_slots, is_grid_aligned, slot_key};

#[test]
fn full_day_grid_has_twenty_candidates() {
    let practitioner_id = Uuid::new_v4();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap();

    let slots = candidate_slots(practitioner_id, day, now);

    assert_eq!(slots.len(), 20);
    assert_eq!(
        slots.first().unwrap().instant,
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    );
    assert_eq!(
        slots.last().unwrap().instant,
        Utc.with_ymd_and_hms(2024, 1, 1, 17, 30, 0).unwrap()
    );
    assert!(slots.iter().all(|s| s.is_available));
    assert!(slots.iter().all(|s| s.practitioner_id == practitioner_id));
}

#[test]
fn candidates_are_strictly_ascending() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let slots = candidate_slots(Uuid::new_v4(), day, now);

    for pair in slots.windows(2) {
        assert!(pair[0].instant < pair[1].instant);
    }
}

#[test]
fn instants_at_or_before_now_are_never_returned() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    // 09:00 exactly: not strictly after now, so excluded too
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    let slots = candidate_slots(Uuid::new_v4(), day, now);

    assert_eq!(slots.len(), 17);
    assert_eq!(
        slots.first().unwrap().instant,
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    );
}

#[test]
fn day_fully_in_the_past_yields_empty_grid() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    assert!(candidate_slots(Uuid::new_v4(), day, now).is_empty());
}

#[test]
fn last_slot_boundary() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let just_before_close = Utc.with_ymd_and_hms(2024, 1, 1, 17, 29, 0).unwrap();
    let slots = candidate_slots(Uuid::new_v4(), day, just_before_close);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].instant.hour(), 17);
    assert_eq!(slots[0].instant.minute(), 30);

    let at_last_start = Utc.with_ymd_and_hms(2024, 1, 1, 17, 30, 0).unwrap();
    assert!(candidate_slots(Uuid::new_v4(), day, at_last_start).is_empty());
}

#[test]
fn grid_alignment_checks() {
    assert!(is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    ));
    assert!(is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 17, 30, 0).unwrap()
    ));

    // off the half-hour marks
    assert!(!is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap()
    ));
    // sub-minute precision
    assert!(!is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 30).unwrap()
    ));
    // outside working hours
    assert!(!is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 7, 30, 0).unwrap()
    ));
    assert!(!is_grid_aligned(
        Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap()
    ));
}

#[test]
fn slot_key_truncates_to_the_minute() {
    let precise = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 45).unwrap();
    let truncated = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();

    assert_eq!(slot_key(precise), truncated);
    assert_eq!(slot_key(truncated), truncated);
}
