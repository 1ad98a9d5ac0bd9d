#![forbid(unsafe_code)]

pub mod badge;
pub mod engine;
pub mod model;
pub mod recommendations;
pub mod time;

pub use badge::{BadgeError, BadgeImage, BadgeLayout, BadgeRenderer, render_badge};
pub use engine::{AnswerResult, EngineError, NextAction, Progress, Quiz, Step};
pub use model::{
    Level, LevelError, LevelNumber, Outcome, OutcomeKind, Participant, ParticipantError,
    Question, QuestionError, QuizContent, QuizContentError, QuizSession, SessionPhase,
};
pub use recommendations::{NextSteps, Recommendation, next_steps, recommendation};
pub use time::Clock;
