//! Test fixtures for building exercise definitions.

use serde_json::{json, Value};

/// Passage about the Peace of Westphalia with four highlight markers.
pub const WESTPHALIA_PASSAGE: &str = "The Thirty Years' War ended with the 1**Peace of Westphalia**, \
signed in 2**1648** in the cities of Osnabrück and 3**Münster**. \
It established the principle of 4**state sovereignty**.";

/// Exercise definition JSON as produced by the authoring tool.
///
/// # Arguments
/// * `behaviour` - Value for the `behaviour` object
pub fn westphalia_exercise(behaviour: Value) -> String {
    json!({
        "task": "Read the text and answer the questions.",
        "passage": WESTPHALIA_PASSAGE,
        "behaviour": behaviour,
        "overallFeedback": [
            { "from": 0, "to": 49, "feedback": "Only @score of @total. Read the text again." },
            { "from": 50, "to": 99, "feedback": "@score of @total, almost there." },
            { "from": 100, "to": 100, "feedback": "All @total correct!" }
        ],
        "questions": [
            {
                "question": "Which treaty ended the war?",
                "correctAnswers": [
                    { "text": "Peace of Westphalia|Westphalia", "reaction": "Correct;!!+1!!" }
                ],
                "incorrectAnswers": [
                    { "text": "Treaty of Versailles", "reaction": "That ended a different war;!!+1!!" },
                    { "text": "", "reaction": "Look at the first sentence;!!+1!!" }
                ]
            },
            {
                "question": "In which year was it signed?",
                "targets": ["1648"]
            },
            {
                "question": "Name one of the cities.",
                "correctAnswers": [
                    { "text": "Osnabrück;Münster", "reaction": "Yes;!!-1!! !!+1!!" }
                ]
            },
            {
                "question": "Which principle did it establish?",
                "correctAnswers": [
                    { "text": "state sovereignty|sovereignty", "reaction": "Well done;!!+1!! !!+7!!" }
                ]
            }
        ]
    })
    .to_string()
}

/// Default behaviour with spelling tolerance switched on.
pub fn tolerant_behaviour() -> Value {
    json!({ "caseSensitive": false, "warnSpellingErrors": true })
}
