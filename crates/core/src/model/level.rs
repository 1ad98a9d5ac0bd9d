use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::question::{Question, QuestionError};

/// Number of difficulty levels in a quiz.
pub const LEVEL_COUNT: usize = 6;

/// Number of questions inside every level.
pub const QUESTIONS_PER_LEVEL: usize = 6;

/// Questions across the whole quiz.
pub const TOTAL_QUESTIONS: usize = LEVEL_COUNT * QUESTIONS_PER_LEVEL;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level number must be between 1 and {LEVEL_COUNT}, got {0}")]
    InvalidNumber(u8),

    #[error("level name cannot be empty")]
    EmptyName,

    #[error("expected {expected} questions, got {found}")]
    QuestionCount { expected: usize, found: usize },

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── LEVEL NUMBER ──────────────────────────────────────────────────────────────
//

/// One-based difficulty tier, always within `1..=6`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LevelNumber(pub(crate) u8);

impl LevelNumber {
    pub const FIRST: Self = Self(1);
    #[allow(clippy::cast_possible_truncation)]
    pub const LAST: Self = Self(LEVEL_COUNT as u8);

    /// Creates a `LevelNumber`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::InvalidNumber` when `value` is outside `1..=6`.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value == 0 || usize::from(value) > LEVEL_COUNT {
            return Err(LevelError::InvalidNumber(value));
        }
        Ok(Self(value))
    }

    /// Level number for a zero-based level index, if it names a real level.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index + 1).ok().and_then(|n| Self::new(n).ok())
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index into the level list.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl TryFrom<u8> for LevelNumber {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LevelNumber> for u8 {
    fn from(level: LevelNumber) -> Self {
        level.0
    }
}

impl fmt::Debug for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelNumber({})", self.0)
    }
}

impl fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// A themed group of questions sharing one difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    number: LevelNumber,
    name: String,
    description: String,
    questions: Vec<Question>,
}

impl Level {
    /// Build a validated level.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::EmptyName` if the name is blank.
    /// Returns `LevelError::QuestionCount` unless exactly six questions are given.
    pub fn new(
        number: LevelNumber,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, LevelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LevelError::EmptyName);
        }
        if questions.len() != QUESTIONS_PER_LEVEL {
            return Err(LevelError::QuestionCount {
                expected: QUESTIONS_PER_LEVEL,
                found: questions.len(),
            });
        }

        Ok(Self {
            number,
            name,
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn number(&self) -> LevelNumber {
        self.number
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Q",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            0,
            "E",
        )
        .unwrap()
    }

    #[test]
    fn level_number_bounds() {
        assert!(LevelNumber::new(0).is_err());
        assert!(LevelNumber::new(7).is_err());
        assert_eq!(LevelNumber::new(6).unwrap(), LevelNumber::LAST);
        assert_eq!(LevelNumber::FIRST.index(), 0);
        assert_eq!(LevelNumber::from_index(5), Some(LevelNumber::LAST));
        assert_eq!(LevelNumber::from_index(6), None);
        assert_eq!(LevelNumber::LAST.next(), None);
        assert_eq!(LevelNumber::FIRST.next().map(LevelNumber::value), Some(2));
    }

    #[test]
    fn level_requires_six_questions() {
        let err = Level::new(LevelNumber::FIRST, "Curious", "", vec![question()]).unwrap_err();
        assert_eq!(
            err,
            LevelError::QuestionCount {
                expected: 6,
                found: 1
            }
        );

        let level = Level::new(
            LevelNumber::FIRST,
            "Curious",
            "Just starting",
            vec![question(); QUESTIONS_PER_LEVEL],
        )
        .unwrap();
        assert_eq!(level.questions().len(), 6);
        assert!(level.question(6).is_none());
    }

    #[test]
    fn level_rejects_blank_name() {
        let err = Level::new(LevelNumber::FIRST, " ", "", vec![question(); 6]).unwrap_err();
        assert_eq!(err, LevelError::EmptyName);
    }
}
