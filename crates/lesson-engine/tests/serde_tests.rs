//! Wire-format round trips for the records crossing the persistence boundary.

use lesson_engine::model::{Institute, Lesson, Modality, RateType};
use lesson_engine::validate::validate_batch;

#[test]
fn lesson_round_trips_through_json() {
    let lesson = Lesson {
        id: "abc-123".to_string(),
        name: "Matematica".to_string(),
        code: Some("MAT-1".to_string()),
        institute_id: Some("i1".to_string()),
        date: "2024-03-11".to_string(),
        start_time: "09:00".to_string(),
        end_time: "11:00".to_string(),
        modality: Modality::Remote,
        completed: true,
        is_paid: false,
        topics: Some("Derivate e integrali".to_string()),
    };

    let json = serde_json::to_string(&lesson).unwrap();
    let back: Lesson = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lesson);
}

#[test]
fn lesson_deserializes_from_minimal_stored_record() {
    // Older stored records carry only the original fields; the newer flags
    // must default rather than fail the load.
    let json = r#"{
        "id": "1",
        "name": "Inglese",
        "date": "2024-03-11",
        "startTime": "09:00",
        "endTime": "10:00"
    }"#;

    let lesson: Lesson = serde_json::from_str(json).unwrap();
    assert_eq!(lesson.modality, Modality::InPerson);
    assert!(!lesson.completed);
    assert!(!lesson.is_paid);
    assert_eq!(lesson.institute_id, None);
}

#[test]
fn institute_round_trips_with_rate_fields() {
    let institute = Institute {
        id: "i1".to_string(),
        name: "Liceo Scientifico".to_string(),
        color: "#34d399".to_string(),
        default_rate: Some(22.5),
        rate_type: Some(RateType::PerLesson),
    };

    let json = serde_json::to_string(&institute).unwrap();
    assert!(json.contains("\"rateType\":\"PER_LESSON\""));
    let back: Institute = serde_json::from_str(&json).unwrap();
    assert_eq!(back, institute);
}

#[test]
fn conflict_report_round_trips_through_json() {
    let a = Lesson {
        id: "a".to_string(),
        name: "Fisica".to_string(),
        code: None,
        institute_id: None,
        date: "2024-03-11".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        modality: Modality::InPerson,
        completed: false,
        is_paid: false,
        topics: None,
    };
    let mut b = a.clone();
    b.id = "b".to_string();
    b.start_time = "09:30".to_string();
    b.end_time = "10:30".to_string();

    let report = validate_batch(&[b], &[a], None);
    assert_eq!(report.len(), 1);

    let json = serde_json::to_string(&report).unwrap();
    let back: lesson_engine::ConflictReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
