//! End-to-end grading of a full exercise loaded from JSON.

mod common;

use comprehension_core::{ConfigError, Correctness, Evaluation, Exercise, HighlightId};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::fixtures;

fn load(behaviour: serde_json::Value) -> Exercise {
    Exercise::from_json(&fixtures::westphalia_exercise(behaviour)).unwrap()
}

fn active_texts(exercise: &Exercise) -> Vec<&str> {
    exercise
        .passage()
        .highlights()
        .iter()
        .filter(|h| h.is_active())
        .map(|h| h.text())
        .collect()
}

#[test]
fn test_load_parses_passage_and_questions() {
    let exercise = load(fixtures::tolerant_behaviour());

    assert_eq!(exercise.task(), "Read the text and answer the questions.");
    assert_eq!(exercise.max_score(), 4);
    assert_eq!(exercise.passage().highlights().len(), 4);
    assert!(!exercise.passage().plain_text().contains("**"));
    assert!(exercise.passage().plain_text().contains("signed in 1648 in the cities"));
}

#[test]
fn test_full_attempt_with_typos() {
    let mut exercise = load(fixtures::tolerant_behaviour());

    let feedback = exercise.submit(0, "peace of westfalia").unwrap();
    assert_eq!(feedback.correctness, Correctness::CorrectWithTypo);
    assert_eq!(feedback.evaluation, Evaluation::CloseMatch);
    assert_eq!(feedback.message, "Correct");

    let feedback = exercise.submit(1, "1648").unwrap();
    assert_eq!(feedback.correctness, Correctness::Correct);
    assert!(feedback.message.is_empty());

    let feedback = exercise.submit(2, "MÜNSTER").unwrap();
    assert_eq!(feedback.correctness, Correctness::Correct);
    assert_eq!(feedback.highlights, vec![HighlightId(1), HighlightId(2)]);

    // +7 points past the last highlight and is dropped.
    let feedback = exercise.submit(3, "sovereignty").unwrap();
    assert_eq!(feedback.highlights, vec![HighlightId(3)]);

    assert_eq!(exercise.score(), 4);
    assert_eq!(exercise.overall_feedback().as_deref(), Some("All 4 correct!"));
    assert!(!exercise.should_offer_retry());
    assert!(!exercise.should_offer_solutions());
    assert_eq!(
        active_texts(&exercise),
        vec!["Peace of Westphalia", "1648", "Münster", "state sovereignty"]
    );
}

#[test]
fn test_strict_settings_reject_typos() {
    let mut exercise = load(json!({ "caseSensitive": true, "warnSpellingErrors": false }));

    let feedback = exercise.submit(0, "peace of westphalia").unwrap();
    assert_eq!(feedback.correctness, Correctness::Incorrect);
    assert_eq!(feedback.message, "Look at the first sentence");

    let feedback = exercise.submit(0, "Peace of Westphalia").unwrap();
    assert_eq!(feedback.correctness, Correctness::Correct);
}

#[test]
fn test_specific_wrong_answer_feedback() {
    let mut exercise = load(fixtures::tolerant_behaviour());

    let feedback = exercise.submit(0, "treaty of versailles").unwrap();
    assert_eq!(feedback.correctness, Correctness::Incorrect);
    assert_eq!(feedback.message, "That ended a different war");
    assert_eq!(active_texts(&exercise), vec!["Peace of Westphalia"]);
}

#[test]
fn test_retry_cycle() {
    let mut exercise = load(fixtures::tolerant_behaviour());
    exercise.set_response(0, "Westphalia");
    exercise.set_response(1, "1700");
    exercise.set_response(2, "Berlin");
    assert!(!exercise.answer_given());
    exercise.set_response(3, "democracy");
    assert!(exercise.answer_given());

    exercise.submit_all();
    assert_eq!(exercise.score(), 1);
    assert_eq!(
        exercise.overall_feedback().as_deref(),
        Some("Only 1 of 4. Read the text again.")
    );
    assert!(exercise.should_offer_retry());

    exercise.reset();
    assert_eq!(exercise.unanswered(), vec![1, 2, 3]);
    assert!(active_texts(&exercise).is_empty());
    assert_eq!(exercise.score(), 1);

    exercise.submit(1, "1648");
    exercise.submit(2, "Osnabruck");
    assert_eq!(exercise.score(), 3);
    assert_eq!(
        exercise.overall_feedback().as_deref(),
        Some("3 of 4, almost there.")
    );
}

#[test]
fn test_show_solutions() {
    let mut exercise = load(fixtures::tolerant_behaviour());
    exercise.show_solutions();

    let responses: Vec<&str> = exercise
        .states()
        .iter()
        .map(|state| state.response.as_str())
        .collect();
    assert_eq!(
        responses,
        vec!["Peace of Westphalia", "1648", "Osnabrück", "state sovereignty"]
    );
    assert!(exercise.submit(0, "anything").is_none());
}

#[test]
fn test_reject_answer_without_alternatives() {
    let json = json!({
        "passage": "",
        "questions": [{ "question": "?", "correctAnswers": [{ "text": "|;" }] }]
    })
    .to_string();

    let result = Exercise::from_json(&json);
    assert!(matches!(result, Err(ConfigError::EmptyAlternatives { .. })));
}
