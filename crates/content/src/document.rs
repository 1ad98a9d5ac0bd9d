//! Wire shape of the questions document and its mapping to domain types.

use quiz_core::model::{Level, LevelError, LevelNumber, Question, QuizContent, QuizContentError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The document parsed but does not describe a playable quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentValidationError {
    #[error("level at position {position} is invalid: {source}")]
    Level {
        position: usize,
        #[source]
        source: LevelError,
    },

    #[error(transparent)]
    Content(#[from] QuizContentError),
}

/// Top-level `{ "levels": [...] }` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub levels: Vec<LevelRecord>,
}

/// Persisted shape for a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: u8,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<QuestionRecord>,
}

/// Persisted shape for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl ContentDocument {
    /// Parse the JSON text of a questions document.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` when the text is not a valid document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the document into quiz content.
    ///
    /// # Errors
    ///
    /// Returns `ContentValidationError` when a level or question breaks the
    /// quiz shape (six levels of six questions with four options each).
    pub fn into_content(self) -> Result<QuizContent, ContentValidationError> {
        let levels = self
            .levels
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                record
                    .into_level()
                    .map_err(|source| ContentValidationError::Level { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizContent::new(levels)?)
    }
}

impl LevelRecord {
    /// Convert the record into a domain `Level`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError` if the number, name or any question is invalid.
    pub fn into_level(self) -> Result<Level, LevelError> {
        let number = LevelNumber::new(self.level)?;
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Question::new(
                    record.question,
                    record.options,
                    record.correct_answer,
                    record.explanation,
                )
                .map_err(|source| LevelError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Level::new(number, self.name, self.description, questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionError;

    fn question(correct: usize) -> QuestionRecord {
        QuestionRecord {
            question: "What is a token?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: correct,
            explanation: "Tokens are text chunks.".into(),
        }
    }

    fn level(n: u8) -> LevelRecord {
        LevelRecord {
            level: n,
            name: format!("Level {n}"),
            description: "desc".into(),
            questions: (0..6).map(|q| question(q % 4)).collect(),
        }
    }

    #[test]
    fn parses_document_field_names() {
        let json = r#"{"levels":[{"level":1,"name":"AI Curious","description":"d",
            "questions":[{"question":"Q","options":["a","b","c","d"],
            "correct_answer":2,"explanation":"E"}]}]}"#;
        let doc = ContentDocument::from_json(json).unwrap();
        assert_eq!(doc.levels[0].name, "AI Curious");
        assert_eq!(doc.levels[0].questions[0].correct_answer, 2);
    }

    #[test]
    fn maps_valid_document_into_content() {
        let doc = ContentDocument {
            levels: (1..=6).map(level).collect(),
        };
        let content = doc.into_content().unwrap();
        assert_eq!(content.levels().len(), 6);
        assert_eq!(content.question_at(0, 3).unwrap().correct_answer_index(), 3);
    }

    #[test]
    fn reports_position_of_bad_question() {
        let mut levels: Vec<_> = (1..=6).map(level).collect();
        levels[2].questions[4].correct_answer = 9;
        let err = ContentDocument { levels }.into_content().unwrap_err();
        assert_eq!(
            err,
            ContentValidationError::Level {
                position: 2,
                source: LevelError::Question {
                    index: 4,
                    source: QuestionError::CorrectAnswerOutOfRange { index: 9 },
                },
            }
        );
    }

    #[test]
    fn rejects_short_document() {
        let doc = ContentDocument {
            levels: (1..=4).map(level).collect(),
        };
        assert!(matches!(
            doc.into_content(),
            Err(ContentValidationError::Content(
                QuizContentError::LevelCount { found: 4, .. }
            ))
        ));
    }
}
