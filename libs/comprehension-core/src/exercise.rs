//! Exercise-level grading state and scoring.
//!
//! The host owns rendering; it feeds learner text in through [`Exercise::submit`]
//! and reads back feedback, highlight state and scores.

use crate::error::{ConfigError, Result};
use crate::highlight::{Highlight, Passage};
use crate::question::{Feedback, Question, QuestionDefinition};
use crate::types::{Behaviour, FeedbackRange};
use serde::{Deserialize, Serialize};

/// Authored exercise as stored in the content JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseDefinition {
    pub task: String,
    pub passage: String,
    pub questions: Vec<QuestionDefinition>,
    pub behaviour: Behaviour,
    pub overall_feedback: Vec<FeedbackRange>,
}

/// Learner-side state of one blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionState {
    pub response: String,
    /// Feedback of the latest submission.
    pub feedback: Option<Feedback>,
    /// Locked blanks no longer accept submissions.
    pub locked: bool,
}

impl QuestionState {
    fn is_correct(&self) -> bool {
        self.feedback
            .as_ref()
            .is_some_and(|feedback| feedback.correctness.is_correct())
    }
}

/// A loaded exercise with its attempt state.
#[derive(Debug, Clone)]
pub struct Exercise {
    task: String,
    passage: Passage,
    questions: Vec<Question>,
    states: Vec<QuestionState>,
    behaviour: Behaviour,
    overall_feedback: Vec<FeedbackRange>,
}

impl Exercise {
    /// Load an exercise from its JSON definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let definition: ExerciseDefinition = serde_json::from_str(json)?;
        Self::new(definition)
    }

    /// Build the exercise and link every answer to the passage highlights.
    pub fn new(definition: ExerciseDefinition) -> Result<Self> {
        if definition.questions.is_empty() {
            return Err(ConfigError::NoQuestions);
        }

        let settings = definition.behaviour.settings();
        let passage = Passage::parse(&definition.passage);

        let mut questions = Vec::with_capacity(definition.questions.len());
        for (idx, question) in definition.questions.iter().enumerate() {
            let mut question = Question::from_definition(idx as u32 + 1, question, settings)?;
            question.link_highlights(&passage);
            questions.push(question);
        }

        tracing::info!(
            "Loaded exercise with {} questions and {} highlights",
            questions.len(),
            passage.highlights().len()
        );

        Ok(Self {
            task: definition.task,
            passage,
            states: vec![QuestionState::default(); questions.len()],
            questions,
            behaviour: definition.behaviour,
            overall_feedback: definition.overall_feedback,
        })
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn behaviour(&self) -> &Behaviour {
        &self.behaviour
    }

    pub fn state(&self, index: usize) -> Option<&QuestionState> {
        self.states.get(index)
    }

    pub fn states(&self) -> &[QuestionState] {
        &self.states
    }

    /// The passage mark giving context for question `index`.
    pub fn context_highlight(&self, index: usize) -> Option<&Highlight> {
        let question = self.questions.get(index)?;
        self.passage.context_for(question.number())
    }

    /// Store typed text without grading it. Ignored for locked blanks.
    pub fn set_response(&mut self, index: usize, text: &str) {
        if let Some(state) = self.states.get_mut(index).filter(|state| !state.locked) {
            state.response = text.to_string();
        }
    }

    /// Grade `text` for question `index` and show the matching highlights.
    ///
    /// Returns `None` for an unknown index or a locked blank. Correct blanks
    /// lock; incorrect ones lock too when retrying is disabled.
    pub fn submit(&mut self, index: usize, text: &str) -> Option<Feedback> {
        let question = self.questions.get(index)?;
        let state = self.states.get_mut(index)?;
        if state.locked {
            tracing::debug!("Ignoring submission for locked question {}", question.number());
            return None;
        }

        let feedback = question.grade(text, &mut self.passage);
        let correctness = feedback.correctness;

        state.response = text.to_string();
        state.feedback = Some(feedback.clone());
        state.locked = correctness.is_correct()
            || (!self.behaviour.enable_retry && correctness.is_answered());

        Some(feedback)
    }

    /// Grade every blank from its stored response.
    pub fn submit_all(&mut self) -> Vec<Option<Feedback>> {
        (0..self.states.len())
            .map(|index| {
                let response = self.states[index].response.clone();
                self.submit(index, &response)
            })
            .collect()
    }

    /// True when every blank has non-blank text.
    pub fn answer_given(&self) -> bool {
        self.states
            .iter()
            .all(|state| !state.response.trim().is_empty())
    }

    /// Indices of the blanks still empty.
    pub fn unanswered(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.response.trim().is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of blanks whose latest submission counts as correct.
    pub fn score(&self) -> u32 {
        self.states.iter().filter(|state| state.is_correct()).count() as u32
    }

    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Feedback text for the current score, with `@score` and `@total`
    /// filled in.
    pub fn overall_feedback(&self) -> Option<String> {
        let (score, total) = (self.score(), self.max_score());
        let percentage = (score * 100 + total / 2) / total;

        self.overall_feedback
            .iter()
            .find(|range| range.from <= percentage && percentage <= range.to)
            .map(|range| {
                range
                    .feedback
                    .replace("@score", &score.to_string())
                    .replace("@total", &total.to_string())
            })
    }

    pub fn should_offer_retry(&self) -> bool {
        self.behaviour.enable_retry && self.score() < self.max_score()
    }

    pub fn should_offer_solutions(&self) -> bool {
        self.behaviour.enable_solutions_button && self.score() < self.max_score()
    }

    /// Fill every blank with its solution and lock it.
    pub fn show_solutions(&mut self) {
        for (question, state) in self.questions.iter().zip(self.states.iter_mut()) {
            state.response = question.solution().to_string();
            state.locked = true;
        }
    }

    /// Start a new try: clear every blank that is not correct and hide all
    /// highlights. Correct blanks keep their answer.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            if !state.is_correct() {
                *state = QuestionState::default();
            }
        }
        self.passage.reset();
        tracing::debug!("Exercise reset, {} correct answers kept", self.score());
    }
}
