//! Batch validation and the save-policy decision.
//!
//! A proposed batch is checked in two passes: pairwise against itself
//! (internal conflicts, neither lesson persisted yet) and lesson-by-lesson
//! against the existing collection (external conflicts). The validator never
//! decides the final outcome itself — it returns the full structured report
//! and [`decide`] maps it through the deployment's [`SavePolicy`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::conflict::{find_conflicts, lessons_overlap, lessons_overlap_minutes};
use crate::model::Lesson;

/// Where a conflict was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictOrigin {
    /// Between two lessons within the proposed batch itself.
    Internal,
    /// Between a proposed lesson and an already-persisted lesson.
    External,
}

/// One detected conflict, with everything a UI needs to render a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictEntry {
    pub origin: ConflictOrigin,
    /// The shared date (`YYYY-MM-DD`).
    pub date: String,
    pub lesson_id: String,
    pub lesson_name: String,
    pub lesson_start: String,
    pub lesson_end: String,
    pub other_id: String,
    pub other_name: String,
    pub other_start: String,
    pub other_end: String,
    pub overlap_minutes: u32,
}

/// The complete conflict list for one proposed batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub entries: Vec<ConflictEntry>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// What a deployment does when a save collides with the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SavePolicy {
    /// Any conflict aborts the save outright; the user must fix and retry.
    Block,
    /// Conflicts are surfaced for an explicit confirmation; a confirmed save
    /// proceeds with the batch exactly as validated.
    #[default]
    WarnAndConfirm,
}

/// Outcome of running a report through a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaveDecision {
    /// No conflicts — merge immediately.
    Proceed,
    /// Conflicts exist; merge only after the user confirms. On confirmation
    /// the caller applies the originally-validated batch without a re-check
    /// against the (possibly changed) collection. This stale-check behavior
    /// is deliberate and documented; see DESIGN.md.
    NeedsConfirmation(ConflictReport),
    /// Conflicts exist and the policy forbids the save entirely.
    Blocked(ConflictReport),
}

fn entry(origin: ConflictOrigin, lesson: &Lesson, other: &Lesson) -> ConflictEntry {
    ConflictEntry {
        origin,
        date: lesson.date.clone(),
        lesson_id: lesson.id.clone(),
        lesson_name: lesson.name.clone(),
        lesson_start: lesson.start_time.clone(),
        lesson_end: lesson.end_time.clone(),
        other_id: other.id.clone(),
        other_name: other.name.clone(),
        other_start: other.start_time.clone(),
        other_end: other.end_time.clone(),
        overlap_minutes: lessons_overlap_minutes(lesson, other),
    }
}

/// Validate a proposed batch against itself and against the existing
/// collection.
///
/// When `editing_id` is set, the existing lesson with that id is excluded
/// from the external pass, so editing a lesson does not conflict with its
/// own pre-edit record. An empty batch yields an empty report.
pub fn validate_batch(
    batch: &[Lesson],
    existing: &[Lesson],
    editing_id: Option<&str>,
) -> ConflictReport {
    let mut entries = Vec::new();

    // Internal pass: every unordered pair within the batch, once.
    if batch.len() > 1 {
        for i in 0..batch.len() {
            for j in (i + 1)..batch.len() {
                if lessons_overlap(&batch[i], &batch[j]) {
                    entries.push(entry(ConflictOrigin::Internal, &batch[i], &batch[j]));
                }
            }
        }
    }

    // External pass: each proposed lesson against the persisted set.
    let exclude: HashSet<String> = editing_id.map(str::to_owned).into_iter().collect();
    for lesson in batch {
        for hit in find_conflicts(lesson, existing, &exclude) {
            entries.push(entry(ConflictOrigin::External, lesson, &hit));
        }
    }

    ConflictReport { entries }
}

/// Map a conflict report through the deployment's save policy.
///
/// The two supported outcomes for a non-empty report are blocking and
/// warn-then-confirm; there is no auto-resolution path.
pub fn decide(report: ConflictReport, policy: SavePolicy) -> SaveDecision {
    if report.is_empty() {
        return SaveDecision::Proceed;
    }
    match policy {
        SavePolicy::Block => SaveDecision::Blocked(report),
        SavePolicy::WarnAndConfirm => SaveDecision::NeedsConfirmation(report),
    }
}
