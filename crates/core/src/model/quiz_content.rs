use thiserror::Error;

use crate::model::level::{LEVEL_COUNT, Level, LevelNumber};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizContentError {
    #[error("expected {expected} levels, got {found}")]
    LevelCount { expected: usize, found: usize },

    #[error("level at position {position} is numbered {found}, expected {expected}")]
    LevelOrder {
        position: usize,
        expected: LevelNumber,
        found: LevelNumber,
    },
}

/// Validated, read-only question content for a whole quiz.
///
/// Always holds exactly six levels numbered 1 through 6 in order, so level
/// and question lookups by an in-range index cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizContent {
    levels: Vec<Level>,
}

impl QuizContent {
    /// # Errors
    ///
    /// Returns `QuizContentError::LevelCount` unless exactly six levels are given.
    /// Returns `QuizContentError::LevelOrder` if levels are not numbered 1..6 in order.
    pub fn new(levels: Vec<Level>) -> Result<Self, QuizContentError> {
        if levels.len() != LEVEL_COUNT {
            return Err(QuizContentError::LevelCount {
                expected: LEVEL_COUNT,
                found: levels.len(),
            });
        }

        for (position, level) in levels.iter().enumerate() {
            let Some(expected) = LevelNumber::from_index(position) else {
                continue;
            };
            if level.number() != expected {
                return Err(QuizContentError::LevelOrder {
                    position,
                    expected,
                    found: level.number(),
                });
            }
        }

        Ok(Self { levels })
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn level(&self, number: LevelNumber) -> Option<&Level> {
        self.levels.get(number.index())
    }

    #[must_use]
    pub fn level_at(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn question_at(&self, level_index: usize, question_index: usize) -> Option<&Question> {
        self.level_at(level_index)
            .and_then(|level| level.question(question_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QUESTIONS_PER_LEVEL;

    fn level(n: u8) -> Level {
        let q = Question::new(
            format!("Q{n}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            0,
            "E",
        )
        .unwrap();
        Level::new(
            LevelNumber::new(n).unwrap(),
            format!("L{n}"),
            "D",
            vec![q; QUESTIONS_PER_LEVEL],
        )
        .unwrap()
    }

    #[test]
    fn accepts_six_ordered_levels() {
        let content = QuizContent::new((1..=6).map(level).collect()).unwrap();
        assert_eq!(content.levels().len(), 6);
        assert_eq!(content.level(LevelNumber::LAST).unwrap().name(), "L6");
        assert_eq!(content.question_at(2, 5).unwrap().text(), "Q3");
        assert!(content.question_at(6, 0).is_none());
    }

    #[test]
    fn rejects_missing_levels() {
        let err = QuizContent::new((1..=5).map(level).collect()).unwrap_err();
        assert_eq!(
            err,
            QuizContentError::LevelCount {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn rejects_out_of_order_levels() {
        let levels = vec![level(1), level(3), level(2), level(4), level(5), level(6)];
        let err = QuizContent::new(levels).unwrap_err();
        assert!(matches!(
            err,
            QuizContentError::LevelOrder { position: 1, .. }
        ));
    }
}
