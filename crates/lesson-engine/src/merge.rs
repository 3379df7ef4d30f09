//! Merge/apply operations over the canonical lesson collection.
//!
//! Every operation is pure: it reads `existing` (and `batch`) by reference
//! and returns a brand-new collection. The caller owns the single source of
//! truth and may keep reading the previous collection while a new one is
//! being prepared.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::{Institute, Lesson};

/// The operation kinds accepted by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeOp {
    /// Append the batch. Batch ids must be freshly generated.
    Create,
    /// Replace existing lessons by id; every batch id must already exist.
    UpdateMany,
    /// Replace by id where found, append where not.
    UpsertMany,
    /// Remove one lesson by id. A no-op when the id is absent.
    Delete(String),
    /// Remove every lesson.
    DeleteAll,
    /// Replace one lesson with the whole batch; see [`apply_edit`].
    EditSingle(String),
}

/// Dispatch a batch through one merge operation.
pub fn apply(existing: &[Lesson], batch: &[Lesson], op: &MergeOp) -> Result<Vec<Lesson>> {
    match op {
        MergeOp::Create => create(existing, batch),
        MergeOp::UpdateMany => update_many(existing, batch),
        MergeOp::UpsertMany => Ok(upsert_many(existing, batch)),
        MergeOp::Delete(id) => Ok(delete(existing, id)),
        MergeOp::DeleteAll => Ok(delete_all(existing)),
        MergeOp::EditSingle(id) => Ok(apply_edit(existing, id, batch)),
    }
}

/// Append a batch of new lessons.
///
/// Ids in the batch must not collide with `existing` or with each other;
/// a collision is rejected with [`EngineError::DuplicateId`] rather than
/// overwritten, so a caller bug never silently clobbers a record.
pub fn create(existing: &[Lesson], batch: &[Lesson]) -> Result<Vec<Lesson>> {
    let mut seen: HashSet<&str> = existing.iter().map(|l| l.id.as_str()).collect();
    for lesson in batch {
        if !seen.insert(&lesson.id) {
            return Err(EngineError::DuplicateId {
                id: lesson.id.clone(),
            });
        }
    }
    let mut next = existing.to_vec();
    next.extend_from_slice(batch);
    Ok(next)
}

/// Replace each existing lesson whose id appears in the batch.
///
/// Lessons not named by the batch are left untouched, in place. Batch ids
/// with no match are an error: silently dropping an update would hide data
/// loss, so every missing id is reported via [`EngineError::NotFound`].
pub fn update_many(existing: &[Lesson], batch: &[Lesson]) -> Result<Vec<Lesson>> {
    let replacements: HashMap<&str, &Lesson> =
        batch.iter().map(|l| (l.id.as_str(), l)).collect();

    let known: HashSet<&str> = existing.iter().map(|l| l.id.as_str()).collect();
    let missing: Vec<String> = batch
        .iter()
        .filter(|l| !known.contains(l.id.as_str()))
        .map(|l| l.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::NotFound { ids: missing });
    }

    Ok(existing
        .iter()
        .map(|l| {
            replacements
                .get(l.id.as_str())
                .map(|r| (*r).clone())
                .unwrap_or_else(|| l.clone())
        })
        .collect())
}

/// Like [`update_many`], but batch lessons with no existing match are
/// appended instead of erroring.
pub fn upsert_many(existing: &[Lesson], batch: &[Lesson]) -> Vec<Lesson> {
    let replacements: HashMap<&str, &Lesson> =
        batch.iter().map(|l| (l.id.as_str(), l)).collect();
    let known: HashSet<&str> = existing.iter().map(|l| l.id.as_str()).collect();

    let mut next: Vec<Lesson> = existing
        .iter()
        .map(|l| {
            replacements
                .get(l.id.as_str())
                .map(|r| (*r).clone())
                .unwrap_or_else(|| l.clone())
        })
        .collect();
    next.extend(
        batch
            .iter()
            .filter(|l| !known.contains(l.id.as_str()))
            .cloned(),
    );
    next
}

/// Remove the lesson with the given id. Removing an absent id is a no-op.
pub fn delete(existing: &[Lesson], id: &str) -> Vec<Lesson> {
    existing.iter().filter(|l| l.id != id).cloned().collect()
}

/// Remove every lesson.
pub fn delete_all(_existing: &[Lesson]) -> Vec<Lesson> {
    Vec::new()
}

/// Replace one lesson with an edited batch.
///
/// An edit form may split a single lesson into several sessions on recurring
/// dates, so the merge is: drop the original by id, then append the entire
/// returned batch — even when the batch's first element reuses the original
/// id. One record in, N records out.
pub fn apply_edit(existing: &[Lesson], original_id: &str, batch: &[Lesson]) -> Vec<Lesson> {
    let mut next: Vec<Lesson> = existing
        .iter()
        .filter(|l| l.id != original_id)
        .cloned()
        .collect();
    next.extend_from_slice(batch);
    next
}

/// Flip the settlement flag on every lesson named by `ids`.
///
/// The payments screen settles (or un-settles) a selection in one pass;
/// unselected lessons come through untouched.
pub fn set_paid(existing: &[Lesson], ids: &HashSet<String>, paid: bool) -> Vec<Lesson> {
    existing
        .iter()
        .map(|l| {
            if ids.contains(&l.id) {
                let mut updated = l.clone();
                updated.is_paid = paid;
                updated
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Add a new institute, or replace the one sharing its id.
pub fn upsert_institute(institutes: &[Institute], institute: Institute) -> Vec<Institute> {
    let mut next: Vec<Institute> = institutes
        .iter()
        .filter(|i| i.id != institute.id)
        .cloned()
        .collect();
    next.push(institute);
    next
}

/// Remove an institute, detaching every lesson that referenced it.
///
/// Lessons are never deleted by an institute removal; their `institute_id`
/// is nulled so they survive as unaffiliated records.
pub fn delete_institute(
    institutes: &[Institute],
    lessons: &[Lesson],
    id: &str,
) -> (Vec<Institute>, Vec<Lesson>) {
    let next_institutes = institutes.iter().filter(|i| i.id != id).cloned().collect();
    let next_lessons = lessons
        .iter()
        .map(|l| {
            if l.institute_id.as_deref() == Some(id) {
                let mut detached = l.clone();
                detached.institute_id = None;
                detached
            } else {
                l.clone()
            }
        })
        .collect();
    (next_institutes, next_lessons)
}
