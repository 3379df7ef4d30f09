//! Read-only queries that feed list views, reminders, and filter dropdowns.

use std::collections::BTreeSet;

use crate::clock::to_minutes;
use crate::model::Lesson;

/// The lessons scheduled on one date, ordered by start time.
///
/// Feeds the day-detail list and the "lessons tomorrow" reminder.
pub fn lessons_on(lessons: &[Lesson], date: &str) -> Vec<Lesson> {
    let mut day: Vec<Lesson> = lessons.iter().filter(|l| l.date == date).cloned().collect();
    day.sort_by_key(|l| to_minutes(&l.start_time));
    day
}

/// The distinct dates in a given month that have at least one lesson,
/// sorted ascending. Month is 1-12.
pub fn dates_with_lessons(lessons: &[Lesson], month: u32, year: i32) -> Vec<String> {
    let prefix = format!("{:04}-{:02}-", year, month);
    let dates: BTreeSet<String> = lessons
        .iter()
        .filter(|l| l.date.starts_with(&prefix))
        .map(|l| l.date.clone())
        .collect();
    dates.into_iter().collect()
}

/// The distinct subject labels across the collection, sorted. Dropdown
/// source for the subject filter.
pub fn subject_names(lessons: &[Lesson]) -> Vec<String> {
    let names: BTreeSet<String> = lessons.iter().map(|l| l.name.clone()).collect();
    names.into_iter().collect()
}
