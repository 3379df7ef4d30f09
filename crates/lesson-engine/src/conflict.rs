//! Detect overlapping lessons on the same calendar day.
//!
//! Pairwise comparison between a candidate lesson and a population of
//! existing lessons. Adjacent lessons (one ends exactly when the other
//! starts) are NOT conflicts, and lessons on different dates never conflict.

use std::collections::HashSet;

use crate::clock::{intervals_overlap, overlap_minutes, to_minutes};
use crate::model::Lesson;

/// True when the two lessons fall on the same date and their `[start, end)`
/// intervals intersect.
pub fn lessons_overlap(a: &Lesson, b: &Lesson) -> bool {
    if a.date != b.date {
        return false;
    }
    intervals_overlap(
        to_minutes(&a.start_time),
        to_minutes(&a.end_time),
        to_minutes(&b.start_time),
        to_minutes(&b.end_time),
    )
}

/// Minutes of intersection between two lessons, 0 when they do not overlap.
pub fn lessons_overlap_minutes(a: &Lesson, b: &Lesson) -> u32 {
    if a.date != b.date {
        return 0;
    }
    overlap_minutes(
        to_minutes(&a.start_time),
        to_minutes(&a.end_time),
        to_minutes(&b.start_time),
        to_minutes(&b.end_time),
    )
}

/// Find every lesson in `population` that conflicts with `candidate`.
///
/// Lessons whose id is in `exclude_ids` are skipped, as is any lesson
/// sharing the candidate's own id — so an edit never conflicts with the
/// record it is replacing. All hits are returned, not just the first; the
/// caller presents the full list.
pub fn find_conflicts(
    candidate: &Lesson,
    population: &[Lesson],
    exclude_ids: &HashSet<String>,
) -> Vec<Lesson> {
    population
        .iter()
        .filter(|other| other.id != candidate.id && !exclude_ids.contains(&other.id))
        .filter(|other| lessons_overlap(candidate, other))
        .cloned()
        .collect()
}
