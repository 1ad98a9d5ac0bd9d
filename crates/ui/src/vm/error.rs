use quiz_core::ParticipantError;
use services::{FeedbackError, QuizRunError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    MissingDetails,
    InvalidEmail,
    EmptyFeedback,
    FeedbackFailed,
    Unknown,
}

impl ViewError {
    /// Notice shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::MissingDetails => "Please enter both your name and email.",
            ViewError::InvalidEmail => "Please enter a valid email address.",
            ViewError::EmptyFeedback => "Please share your thoughts before submitting.",
            ViewError::FeedbackFailed => "Failed to submit feedback. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<ParticipantError> for ViewError {
    fn from(err: ParticipantError) -> Self {
        match err {
            ParticipantError::MissingName | ParticipantError::MissingEmail => {
                ViewError::MissingDetails
            }
            ParticipantError::InvalidEmail(_) => ViewError::InvalidEmail,
            _ => ViewError::Unknown,
        }
    }
}

impl From<FeedbackError> for ViewError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::EmptyFeedback => ViewError::EmptyFeedback,
            _ => ViewError::FeedbackFailed,
        }
    }
}

impl From<QuizRunError> for ViewError {
    fn from(err: QuizRunError) -> Self {
        match err {
            QuizRunError::Feedback(inner) => inner.into(),
            _ => ViewError::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_errors_map_to_notices() {
        assert_eq!(
            ViewError::from(ParticipantError::MissingEmail),
            ViewError::MissingDetails
        );
        assert_eq!(
            ViewError::from(ParticipantError::InvalidEmail("x@y".into())).message(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn feedback_errors_map_through_run_errors() {
        let err = QuizRunError::Feedback(FeedbackError::EmptyFeedback);
        assert_eq!(ViewError::from(err), ViewError::EmptyFeedback);
        assert_eq!(
            ViewError::from(FeedbackError::Disabled),
            ViewError::FeedbackFailed
        );
        assert_eq!(ViewError::from(QuizRunError::NotFinished), ViewError::Unknown);
    }
}
