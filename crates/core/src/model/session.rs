use serde::{Deserialize, Serialize};

use crate::model::level::{LEVEL_COUNT, LevelNumber};

/// Lives a player starts with; each wrong answer costs one.
pub const STARTING_LIVES: u8 = 3;

/// Where the session sits in the answer/advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current question is waiting for an answer.
    AwaitingAnswer,
    /// The current question was answered; the next step is `advance`.
    Answered,
    /// All questions were answered with lives to spare.
    Completed,
    /// Lives ran out before the last question.
    Failed,
}

/// How a finished quiz ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Completed,
    Failed,
}

/// Terminal result of a quiz.
///
/// `reached_level` is the level being attempted when lives ran out, or the
/// final level on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub reached_level: LevelNumber,
}

impl Outcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.kind == OutcomeKind::Completed
    }
}

/// Mutable progress of one player through the quiz.
///
/// Only the engine mutates a session; hosts read it through the getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) current_level: usize,
    pub(crate) current_question: usize,
    pub(crate) lives: u8,
    pub(crate) correct_answers: u32,
    pub(crate) wrong_answers: u32,
    pub(crate) completed: bool,
    pub(crate) phase: SessionPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_level: 0,
            current_question: 0,
            lives: STARTING_LIVES,
            correct_answers: 0,
            wrong_answers: 0,
            completed: false,
            phase: SessionPhase::AwaitingAnswer,
        }
    }

    /// Zero-based index of the level in play.
    #[must_use]
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Zero-based index of the question within the current level.
    #[must_use]
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True until the quiz completes or lives run out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::AwaitingAnswer | SessionPhase::Answered
        )
    }

    /// Level reported to the player: the attempted level on failure, the
    /// last level on completion.
    #[must_use]
    pub fn reached_level(&self) -> LevelNumber {
        if self.completed {
            return LevelNumber::LAST;
        }
        LevelNumber::from_index(self.current_level.min(LEVEL_COUNT - 1))
            .unwrap_or(LevelNumber::LAST)
    }

    /// `None` while the quiz is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let kind = match self.phase {
            SessionPhase::Completed => OutcomeKind::Completed,
            SessionPhase::Failed => OutcomeKind::Failed,
            SessionPhase::AwaitingAnswer | SessionPhase::Answered => return None,
        };
        Some(Outcome {
            kind,
            reached_level: self.reached_level(),
        })
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
