//! Shared error types for the services crate.

use thiserror::Error;

use quiz_content::ContentError;
use quiz_core::{BadgeError, EngineError};

/// Errors emitted by `FeedbackService`.
///
/// None of these touch quiz state; hosts may show a notice and let the player retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("feedback submission is not configured")]
    Disabled,
    #[error("feedback text cannot be empty")]
    EmptyFeedback,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizRunService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizRunError {
    #[error("quiz has not finished yet")]
    NotFinished,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Badge(#[from] BadgeError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
