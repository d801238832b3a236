use chrono::{DateTime, NaiveDate, Timelike, Utc};
use uuid::Uuid;

use crate::models::Slot;

/// The clinic-wide booking grid: half-hour slots from 08:00 up to the
/// 18:00 close, last bookable start 17:30. A fixed policy constant for
/// every practitioner; per-practitioner working hours would hang off the
/// practitioner record instead.
pub const GRID_OPENING_HOUR: u32 = 8;
pub const GRID_CLOSING_HOUR: u32 = 18;
pub const GRID_MINUTE_MARKS: [u32; 2] = [0, 30];

/// Candidate slot instants for a practitioner on a day, ascending.
/// Instants that are not strictly after `now` are excluded entirely,
/// never returned as unavailable.
pub fn candidate_slots(practitioner_id: Uuid, day: NaiveDate, now: DateTime<Utc>) -> Vec<Slot> {
    let mut slots = Vec::new();

    for hour in GRID_OPENING_HOUR..GRID_CLOSING_HOUR {
        for minute in GRID_MINUTE_MARKS {
            let instant = day
                .and_hms_opt(hour, minute, 0)
                .expect("grid instant within day bounds")
                .and_utc();

            if instant <= now {
                continue;
            }

            slots.push(Slot {
                practitioner_id,
                instant,
                is_available: true,
            });
        }
    }

    slots
}

/// Whether an instant lands exactly on the booking grid.
pub fn is_grid_aligned(instant: DateTime<Utc>) -> bool {
    instant.hour() >= GRID_OPENING_HOUR
        && instant.hour() < GRID_CLOSING_HOUR
        && GRID_MINUTE_MARKS.contains(&instant.minute())
        && instant.second() == 0
        && instant.nanosecond() == 0
}

/// Truncate an instant to the minute. Grid instants are minute-aligned,
/// so appointment-to-slot comparison ignores seconds and below.
pub fn slot_key(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_hms_opt(instant.hour(), instant.minute(), 0)
        .expect("truncated instant within day bounds")
        .and_utc()
}
