use std::sync::Arc;

use thiserror::Error;

use crate::model::{
    LEVEL_COUNT, Level, LevelNumber, OPTIONS_PER_QUESTION, Outcome, OutcomeKind,
    QUESTIONS_PER_LEVEL, Question, QuizContent, QuizSession, SessionPhase, TOTAL_QUESTIONS,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Transitions called out of sequence or with out-of-range input.
///
/// A failed transition never changes the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("answer index {index} is out of range (expected 0..{OPTIONS_PER_QUESTION})")]
    AnswerOutOfRange { index: usize },

    #[error("the current question has already been answered")]
    AlreadyAnswered,

    #[error("the current question has not been answered yet")]
    NotAnswered,

    #[error("the quiz has already finished")]
    Finished,

    #[error("no question at level {level_index}, question {question_index}")]
    MissingQuestion {
        level_index: usize,
        question_index: usize,
    },
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// What `submit_answer` reports back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub selected_index: usize,
    pub correct_answer_index: usize,
    pub explanation: String,
    pub lives_remaining: u8,
    /// Set when this answer used up the last life.
    pub outcome: Option<Outcome>,
}

/// Which screen follows an `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Another question in the same level.
    NextQuestion {
        level: LevelNumber,
        question_number: usize,
    },
    /// The first question of a new level; hosts show a transition screen.
    LevelTransition { level: LevelNumber },
    /// All questions answered.
    Finished(Outcome),
}

/// Control offered after an answer, before `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    NextQuestion,
    NextLevel,
    CompleteQuiz,
}

impl NextAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NextAction::NextQuestion => "Next Question",
            NextAction::NextLevel => "Next Level",
            NextAction::CompleteQuiz => "Complete Quiz",
        }
    }
}

/// Position of the current question within the whole quiz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub level: LevelNumber,
    /// One-based question number inside the level.
    pub question_number: usize,
    /// One-based position across all levels.
    pub position: usize,
    pub total: usize,
    pub percent: f32,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Quiz progression state machine over validated content.
///
/// Each question goes through `submit_answer` then `advance`. The quiz ends
/// when lives reach zero (failed) or the last question of the last level is
/// advanced past (completed).
#[derive(Debug, Clone)]
pub struct Quiz {
    content: Arc<QuizContent>,
    session: QuizSession,
}

impl Quiz {
    #[must_use]
    pub fn new(content: Arc<QuizContent>) -> Self {
        Self {
            content,
            session: QuizSession::new(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &QuizContent {
        &self.content
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Level in play, `None` once the quiz is completed.
    #[must_use]
    pub fn current_level(&self) -> Option<&Level> {
        self.content.level_at(self.session.current_level)
    }

    /// Question in play, `None` once the quiz is completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.content
            .question_at(self.session.current_level, self.session.current_question)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.session.outcome()
    }

    /// Evaluate an answer to the current question.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Finished` if the quiz has ended,
    /// `EngineError::AlreadyAnswered` if this question was already answered, and
    /// `EngineError::AnswerOutOfRange` if `selected_index` is not an option.
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<AnswerResult, EngineError> {
        match self.session.phase {
            SessionPhase::AwaitingAnswer => {}
            SessionPhase::Answered => return Err(EngineError::AlreadyAnswered),
            SessionPhase::Completed | SessionPhase::Failed => return Err(EngineError::Finished),
        }
        if selected_index >= OPTIONS_PER_QUESTION {
            return Err(EngineError::AnswerOutOfRange {
                index: selected_index,
            });
        }

        let question = self
            .content
            .question_at(self.session.current_level, self.session.current_question)
            .ok_or(EngineError::MissingQuestion {
                level_index: self.session.current_level,
                question_index: self.session.current_question,
            })?;
        let correct = question.is_correct(selected_index);
        let correct_answer_index = question.correct_answer_index();
        let explanation = question.explanation().to_owned();

        let session = &mut self.session;
        if correct {
            session.correct_answers = session.correct_answers.saturating_add(1);
            session.phase = SessionPhase::Answered;
        } else {
            session.wrong_answers = session.wrong_answers.saturating_add(1);
            session.lives = session.lives.saturating_sub(1);
            session.phase = if session.lives == 0 {
                SessionPhase::Failed
            } else {
                SessionPhase::Answered
            };
        }

        Ok(AnswerResult {
            correct,
            selected_index,
            correct_answer_index,
            explanation,
            lives_remaining: session.lives,
            outcome: session.outcome(),
        })
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Finished` if the quiz has ended and
    /// `EngineError::NotAnswered` if the current question is still open.
    pub fn advance(&mut self) -> Result<Step, EngineError> {
        match self.session.phase {
            SessionPhase::Answered => {}
            SessionPhase::AwaitingAnswer => return Err(EngineError::NotAnswered),
            SessionPhase::Completed | SessionPhase::Failed => return Err(EngineError::Finished),
        }

        let next_question = self.session.current_question + 1;
        if next_question < QUESTIONS_PER_LEVEL {
            let level = LevelNumber::from_index(self.session.current_level).ok_or(
                EngineError::MissingQuestion {
                    level_index: self.session.current_level,
                    question_index: next_question,
                },
            )?;
            self.session.current_question = next_question;
            self.session.phase = SessionPhase::AwaitingAnswer;
            return Ok(Step::NextQuestion {
                level,
                question_number: next_question + 1,
            });
        }

        let session = &mut self.session;
        session.current_question = 0;
        session.current_level += 1;

        match LevelNumber::from_index(session.current_level) {
            Some(level) => {
                session.phase = SessionPhase::AwaitingAnswer;
                Ok(Step::LevelTransition { level })
            }
            None => {
                session.completed = true;
                session.phase = SessionPhase::Completed;
                Ok(Step::Finished(Outcome {
                    kind: OutcomeKind::Completed,
                    reached_level: LevelNumber::LAST,
                }))
            }
        }
    }

    /// Start over from the first question with full lives.
    pub fn reset(&mut self) {
        self.session = QuizSession::new();
    }

    /// Position of the current question; `None` once completed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Option<Progress> {
        let level = LevelNumber::from_index(self.session.current_level)?;
        let position = self.session.current_level * QUESTIONS_PER_LEVEL
            + self.session.current_question
            + 1;
        Some(Progress {
            level,
            question_number: self.session.current_question + 1,
            position,
            total: TOTAL_QUESTIONS,
            percent: position as f32 / TOTAL_QUESTIONS as f32 * 100.0,
        })
    }

    /// Control to offer once the current question is answered.
    #[must_use]
    pub fn next_action(&self) -> Option<NextAction> {
        if self.session.phase != SessionPhase::Answered {
            return None;
        }
        let last_question = self.session.current_question + 1 == QUESTIONS_PER_LEVEL;
        let last_level = self.session.current_level + 1 == LEVEL_COUNT;
        Some(match (last_question, last_level) {
            (true, true) => NextAction::CompleteQuiz,
            (true, false) => NextAction::NextLevel,
            (false, _) => NextAction::NextQuestion,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
