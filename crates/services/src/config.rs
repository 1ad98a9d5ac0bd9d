use std::env;

use crate::feedback_service::FeedbackConfig;

pub const CONTENT_LOCATION_VAR: &str = "QUIZ_CONTENT_PATH";
pub const FEEDBACK_URL_VAR: &str = "QUIZ_FEEDBACK_URL";
pub const DEFAULT_CONTENT_LOCATION: &str = "questions.json";

/// Runtime configuration gathered from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// File path or `http(s)://` URL of the questions document.
    pub content_location: String,
    /// `None` disables feedback submission.
    pub feedback: Option<FeedbackConfig>,
}

impl QuizConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        Self {
            content_location: read(CONTENT_LOCATION_VAR)
                .unwrap_or_else(|| DEFAULT_CONTENT_LOCATION.into()),
            feedback: read(FEEDBACK_URL_VAR).map(|endpoint| FeedbackConfig { endpoint }),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
