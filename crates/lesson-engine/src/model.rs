//! Core records: lessons and the institutes they are taught for.
//!
//! The engine owns no storage. Collections of these records are passed in by
//! the caller and new collections are returned; the `YYYY-MM-DD` date and
//! `HH:mm` time fields stay as strings end-to-end so that partially-entered
//! form data can flow through the engine without a parse failure.

use serde::{Deserialize, Serialize};

/// How a lesson is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    #[default]
    InPerson,
    Remote,
}

/// How an institute's `default_rate` converts into earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// `default_rate` is per hour; a lesson earns `rate * minutes / 60`.
    #[default]
    Hourly,
    /// `default_rate` is a flat amount per lesson, regardless of duration.
    PerLesson,
}

/// One scheduled teaching session.
///
/// `id` is the merge key: immutable once created and unique within the
/// canonical collection. Overlap logic partitions strictly by exact `date`
/// equality; there are no cross-midnight lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    /// Subject/course label. Non-empty in well-formed records.
    pub name: String,
    /// Optional short label (e.g. a course code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Affiliation; `None` means the lesson is unaffiliated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute_id: Option<String>,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Wall-clock start, `HH:mm` (24h).
    pub start_time: String,
    /// Wall-clock end, `HH:mm` (24h). Strictly after `start_time` in a
    /// well-formed record; the engine clamps rather than rejects otherwise.
    pub end_time: String,
    #[serde(default)]
    pub modality: Modality,
    /// Whether the lesson was actually delivered. Display state only.
    #[serde(default)]
    pub completed: bool,
    /// Settlement status, read by the payments collaborator.
    #[serde(default)]
    pub is_paid: bool,
    /// Free-text notes, opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
}

/// An organization lessons may be affiliated with, carrying an optional rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    pub id: String,
    pub name: String,
    /// Display color (hex code or class name). Opaque to the engine.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<RateType>,
}
