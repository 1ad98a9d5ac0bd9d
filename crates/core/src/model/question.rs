use thiserror::Error;

/// Every question offers exactly this many options, labelled A through D.
pub const OPTIONS_PER_QUESTION: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {expected} options, got {found}")]
    OptionCount { expected: usize, found: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {index} is out of range")]
    CorrectAnswerOutOfRange { index: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTIONS_PER_QUESTION],
    correct_answer_index: usize,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank.
    /// Returns `QuestionError::OptionCount` unless exactly four options are given.
    /// Returns `QuestionError::EmptyOption` if any option is blank.
    /// Returns `QuestionError::CorrectAnswerOutOfRange` if the index does not
    /// point at an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        let found = options.len();
        let options: [String; OPTIONS_PER_QUESTION] =
            options.try_into().map_err(|_| QuestionError::OptionCount {
                expected: OPTIONS_PER_QUESTION,
                found,
            })?;

        if correct_answer_index >= OPTIONS_PER_QUESTION {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: correct_answer_index,
            });
        }

        Ok(Self {
            text,
            options,
            correct_answer_index,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_answer_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
