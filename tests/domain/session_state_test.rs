use voxguard::domain::{DetectionResult, Language, SessionError, SessionState};

use crate::helpers::{human_detection, mp3_sample};

#[test]
fn given_empty_session_when_starting_verification_then_is_noop() {
    let mut session = SessionState::new();

    assert!(session.start_verification().is_none());
    assert!(!session.is_in_flight());
}

#[test]
fn given_selected_file_when_starting_twice_then_second_start_is_noop() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();

    let first = session.start_verification();
    let second = session.start_verification();

    assert!(first.is_some());
    assert!(second.is_none());
    assert!(session.is_in_flight());
}

#[test]
fn given_in_flight_verification_when_selecting_file_then_rejects() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    session.start_verification().unwrap();

    let result = session.select_file(mp3_sample("other.mp3", 64));

    assert_eq!(result, Err(SessionError::VerificationInFlight));
    assert_eq!(session.sample().unwrap().file_name, "clip.mp3");
}

#[test]
fn given_success_when_completing_then_stores_result_and_prepends_history() {
    let mut session = SessionState::new();
    session.select_language(Language::Tamil).unwrap();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    let pending = session.start_verification().unwrap();
    assert_eq!(pending.language, Language::Tamil);

    let result = DetectionResult::success(human_detection(Language::Tamil, 0.87));
    session.complete_verification(&pending, result.clone());

    assert!(!session.is_in_flight());
    assert_eq!(session.last_result(), Some(&result));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().latest().unwrap().file_name, "clip.mp3");
}

#[test]
fn given_failure_when_completing_then_history_is_unchanged() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    let pending = session.start_verification().unwrap();

    session.complete_verification(&pending, DetectionResult::failure("unreachable"));

    assert!(session.history().is_empty());
    assert_eq!(
        session.last_result().and_then(|r| r.failure_message()),
        Some("unreachable")
    );
}

#[test]
fn given_six_successes_when_completing_then_history_keeps_five_newest() {
    let mut session = SessionState::new();

    for i in 0..6 {
        session
            .select_file(mp3_sample(&format!("clip-{}.mp3", i), 32))
            .unwrap();
        let pending = session.start_verification().unwrap();
        session.complete_verification(
            &pending,
            DetectionResult::success(human_detection(Language::English, 0.6)),
        );
    }

    let names: Vec<String> = session
        .history()
        .entries()
        .map(|e| e.file_name.clone())
        .collect();
    assert_eq!(names.len(), 5);
    assert_eq!(names.first().map(String::as_str), Some("clip-5.mp3"));
    assert_eq!(names.last().map(String::as_str), Some("clip-1.mp3"));
}

#[test]
fn given_completed_session_when_resetting_then_clears_file_and_result_but_keeps_history() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    let pending = session.start_verification().unwrap();
    session.complete_verification(
        &pending,
        DetectionResult::success(human_detection(Language::English, 0.9)),
    );

    session.reset().unwrap();

    assert!(session.sample().is_none());
    assert!(session.last_result().is_none());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn given_new_file_when_selecting_then_previous_result_is_cleared() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    let pending = session.start_verification().unwrap();
    session.complete_verification(&pending, DetectionResult::failure("oops"));

    session.select_file(mp3_sample("next.mp3", 64)).unwrap();

    assert!(session.last_result().is_none());
}

#[test]
fn given_in_flight_verification_when_changing_language_or_resetting_then_rejects() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 64)).unwrap();
    session.start_verification().unwrap();

    assert_eq!(
        session.select_language(Language::Hindi),
        Err(SessionError::VerificationInFlight)
    );
    assert_eq!(session.reset(), Err(SessionError::VerificationInFlight));
    assert_eq!(session.language(), Language::English);
}

#[test]
fn given_selected_file_when_snapshotting_then_reports_size_in_kb() {
    let mut session = SessionState::new();
    session.select_file(mp3_sample("clip.mp3", 10 * 1024)).unwrap();

    let snapshot = session.snapshot();

    let file = snapshot.file.unwrap();
    assert_eq!(file.name, "clip.mp3");
    assert_eq!(file.size_kb, 10.0);
    assert!(!snapshot.in_flight);
}
