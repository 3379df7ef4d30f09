//! Tests for batch validation and the save-policy decision.

use lesson_engine::model::{Lesson, Modality};
use lesson_engine::validate::{
    decide, validate_batch, ConflictOrigin, SaveDecision, SavePolicy,
};

/// Helper to build a lesson from a date and an HH:mm range.
fn lesson(id: &str, date: &str, start: &str, end: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        name: format!("Lesson {id}"),
        code: None,
        institute_id: None,
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        modality: Modality::InPerson,
        completed: false,
        is_paid: false,
        topics: None,
    }
}

#[test]
fn empty_batch_always_passes() {
    let existing = vec![lesson("1", "2024-03-11", "09:00", "11:00")];

    let report = validate_batch(&[], &existing, None);
    assert!(report.is_empty());
    assert_eq!(decide(report, SavePolicy::Block), SaveDecision::Proceed);
}

#[test]
fn external_conflict_reported_with_full_detail() {
    // Scenario A: new lesson 10:00-12:00 against existing 09:00-11:00.
    let existing = vec![lesson("1", "2024-03-11", "09:00", "11:00")];
    let batch = vec![lesson("2", "2024-03-11", "10:00", "12:00")];

    let report = validate_batch(&batch, &existing, None);
    assert_eq!(report.len(), 1);

    let entry = &report.entries[0];
    assert_eq!(entry.origin, ConflictOrigin::External);
    assert_eq!(entry.date, "2024-03-11");
    assert_eq!(entry.lesson_id, "2");
    assert_eq!(entry.other_id, "1");
    assert_eq!(entry.lesson_start, "10:00");
    assert_eq!(entry.other_end, "11:00");
    assert_eq!(entry.overlap_minutes, 60);
}

#[test]
fn internal_conflict_found_within_batch_alone() {
    // Scenario B: two new lessons collide with each other, nothing persisted.
    let batch = vec![
        lesson("a", "2024-03-11", "09:00", "10:00"),
        lesson("b", "2024-03-11", "09:30", "10:30"),
    ];

    let report = validate_batch(&batch, &[], None);
    assert_eq!(report.len(), 1);
    assert_eq!(report.entries[0].origin, ConflictOrigin::Internal);
}

#[test]
fn internal_pass_compares_each_pair_once() {
    // Three mutually overlapping lessons → 3 unordered pairs, 3 entries.
    let batch = vec![
        lesson("a", "2024-03-11", "09:00", "12:00"),
        lesson("b", "2024-03-11", "09:30", "10:30"),
        lesson("c", "2024-03-11", "10:00", "11:00"),
    ];

    let report = validate_batch(&batch, &[], None);
    assert_eq!(report.len(), 3);
    assert!(report
        .entries
        .iter()
        .all(|e| e.origin == ConflictOrigin::Internal));
}

#[test]
fn editing_a_lesson_does_not_conflict_with_its_old_self() {
    // Scenario C: shifting lesson 1 by half an hour must validate clean.
    let existing = vec![lesson("1", "2024-03-11", "09:00", "11:00")];
    let batch = vec![lesson("1", "2024-03-11", "09:30", "11:30")];

    let report = validate_batch(&batch, &existing, Some("1"));
    assert!(report.is_empty(), "edit must not collide with pre-edit record");
}

#[test]
fn edit_still_conflicts_with_other_lessons() {
    let existing = vec![
        lesson("1", "2024-03-11", "09:00", "11:00"),
        lesson("2", "2024-03-11", "11:00", "13:00"),
    ];
    // Edited lesson 1 now runs into lesson 2.
    let batch = vec![lesson("1", "2024-03-11", "10:00", "12:00")];

    let report = validate_batch(&batch, &existing, Some("1"));
    assert_eq!(report.len(), 1);
    assert_eq!(report.entries[0].other_id, "2");
}

#[test]
fn mixed_internal_and_external_conflicts_all_reported() {
    let existing = vec![lesson("1", "2024-03-11", "09:00", "10:00")];
    let batch = vec![
        lesson("a", "2024-03-11", "09:30", "10:30"), // external vs 1, internal vs b
        lesson("b", "2024-03-11", "10:00", "11:00"),
    ];

    let report = validate_batch(&batch, &existing, None);
    let internal = report
        .entries
        .iter()
        .filter(|e| e.origin == ConflictOrigin::Internal)
        .count();
    let external = report
        .entries
        .iter()
        .filter(|e| e.origin == ConflictOrigin::External)
        .count();
    assert_eq!(internal, 1);
    assert_eq!(external, 1);
}

#[test]
fn blocking_policy_blocks_any_conflict() {
    let existing = vec![lesson("1", "2024-03-11", "09:00", "11:00")];
    let batch = vec![lesson("2", "2024-03-11", "10:00", "12:00")];

    let report = validate_batch(&batch, &existing, None);
    match decide(report, SavePolicy::Block) {
        SaveDecision::Blocked(r) => assert_eq!(r.len(), 1),
        other => panic!("expected Blocked, got {other:?}"),
    }
}

#[test]
fn warn_policy_asks_for_confirmation() {
    let existing = vec![lesson("1", "2024-03-11", "09:00", "11:00")];
    let batch = vec![lesson("2", "2024-03-11", "10:00", "12:00")];

    let report = validate_batch(&batch, &existing, None);
    match decide(report, SavePolicy::WarnAndConfirm) {
        SaveDecision::NeedsConfirmation(r) => assert_eq!(r.len(), 1),
        other => panic!("expected NeedsConfirmation, got {other:?}"),
    }
}

#[test]
fn clean_report_proceeds_under_either_policy() {
    let report = validate_batch(
        &[lesson("2", "2024-03-12", "10:00", "12:00")],
        &[lesson("1", "2024-03-11", "09:00", "11:00")],
        None,
    );
    assert_eq!(
        decide(report.clone(), SavePolicy::Block),
        SaveDecision::Proceed
    );
    assert_eq!(
        decide(report, SavePolicy::WarnAndConfirm),
        SaveDecision::Proceed
    );
}
