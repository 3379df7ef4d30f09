//! Workload and earnings aggregation over a filtered lesson subset.
//!
//! Month/year filtering reads the `YYYY-MM-DD` string components directly —
//! never through a timezone-bearing date type — so a lesson on the first or
//! last day of a month lands in the same month in every locale.

use serde::{Deserialize, Serialize};

use crate::clock::clamped_duration;
use crate::model::{Institute, Lesson, RateType};

/// Which lessons an aggregation (or payments view) looks at.
///
/// Every field is optional; `None` means "don't filter on this". A lesson
/// passes when it matches all set fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonFilter {
    pub institute_id: Option<String>,
    /// Exact match on the lesson's subject label.
    pub subject: Option<String>,
    /// Calendar month, 1-12.
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Settlement partition: `Some(false)` = still to pay, `Some(true)` =
    /// settled, `None` = both.
    pub paid: Option<bool>,
}

impl LessonFilter {
    /// True when the lesson passes every set field of the filter.
    pub fn matches(&self, lesson: &Lesson) -> bool {
        if let Some(institute_id) = &self.institute_id {
            if lesson.institute_id.as_deref() != Some(institute_id.as_str()) {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            if lesson.name != *subject {
                return false;
            }
        }
        if self.month.is_some() || self.year.is_some() {
            // A lesson with an unparseable date can't land in any month.
            let Some((year, month)) = date_parts(&lesson.date) else {
                return false;
            };
            if self.month.is_some_and(|m| m != month) {
                return false;
            }
            if self.year.is_some_and(|y| y != year) {
                return false;
            }
        }
        if self.paid.is_some_and(|p| p != lesson.is_paid) {
            return false;
        }
        true
    }
}

/// Split a `YYYY-MM-DD` string into `(year, month)` by component.
fn date_parts(date: &str) -> Option<(i32, u32)> {
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    Some((year, month))
}

/// Presentation-ready aggregate over a filtered lesson subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub total_minutes: u64,
    pub total_earnings: f64,
}

/// What one lesson is worth, given the institutes' rate configuration.
///
/// No institute, or an institute without a rate, contributes 0. A
/// `PerLesson` rate contributes the flat rate regardless of duration; an
/// `Hourly` rate contributes `rate * minutes / 60` with the duration
/// clamped to zero for malformed time ranges.
pub fn lesson_earnings(lesson: &Lesson, institutes: &[Institute]) -> f64 {
    let Some(institute) = lesson
        .institute_id
        .as_deref()
        .and_then(|id| institutes.iter().find(|i| i.id == id))
    else {
        return 0.0;
    };
    let Some(rate) = institute.default_rate else {
        return 0.0;
    };
    let minutes = clamped_duration(&lesson.start_time, &lesson.end_time);
    match institute.rate_type.unwrap_or_default() {
        RateType::PerLesson => rate,
        RateType::Hourly => rate * f64::from(minutes) / 60.0,
    }
}

/// Count, total duration, and earnings over the lessons passing `filter`.
///
/// Sums run in the lessons' natural collection order so floating-point
/// results are deterministic for a given input.
pub fn aggregate(lessons: &[Lesson], institutes: &[Institute], filter: &LessonFilter) -> Summary {
    let mut summary = Summary::default();
    for lesson in lessons.iter().filter(|l| filter.matches(l)) {
        summary.count += 1;
        summary.total_minutes += u64::from(clamped_duration(&lesson.start_time, &lesson.end_time));
        summary.total_earnings += lesson_earnings(lesson, institutes);
    }
    summary
}
