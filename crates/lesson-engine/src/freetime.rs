//! Classify weekdays in a date range as fully or half free.
//!
//! Feeds the availability report: for each weekday in the range, a day with
//! no lessons is fully free, a day busy only after 14:00 is morning-free,
//! and a day busy only before 14:00 is afternoon-free. Weekends and fully
//! busy days are omitted from the output entirely.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::to_minutes;
use crate::model::Lesson;

/// The morning/afternoon boundary. A lesson starting at or after this hour
/// counts as an afternoon lesson. Fixed, consistent with the rest of the
/// system's morning/afternoon labeling.
pub const MORNING_SPLIT_HOUR: u32 = 14;

/// How much of a weekday is unscheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreeSlotKind {
    FullyFree,
    /// Free before 14:00; at least one afternoon lesson.
    MorningFree,
    /// Free from 14:00 on; at least one morning lesson.
    AfternoonFree,
}

/// One free (or half-free) weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// The day, as `YYYY-MM-DD`.
    pub date: String,
    pub kind: FreeSlotKind,
}

/// Derive the free weekdays between `start` and `end`, inclusive.
///
/// Saturdays and Sundays are skipped outright — neither free nor busy.
/// Days with lessons in both halves are fully busy and likewise omitted.
/// Output is ascending by date.
pub fn derive_free_slots(lessons: &[Lesson], start: NaiveDate, end: NaiveDate) -> Vec<FreeSlot> {
    let mut slots = Vec::new();

    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let date = day.format("%Y-%m-%d").to_string();
            let mut morning_busy = false;
            let mut afternoon_busy = false;
            for lesson in lessons.iter().filter(|l| l.date == date) {
                if to_minutes(&lesson.start_time) / 60 < MORNING_SPLIT_HOUR {
                    morning_busy = true;
                } else {
                    afternoon_busy = true;
                }
            }
            let kind = match (morning_busy, afternoon_busy) {
                (false, false) => Some(FreeSlotKind::FullyFree),
                (false, true) => Some(FreeSlotKind::MorningFree),
                (true, false) => Some(FreeSlotKind::AfternoonFree),
                (true, true) => None,
            };
            if let Some(kind) = kind {
                slots.push(FreeSlot { date, kind });
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    slots
}
