use std::sync::Arc;

use quiz_content::{ContentSource, load_content, source_for};
use quiz_core::{Participant, QuizContent};

use crate::Clock;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::feedback_service::FeedbackService;
use crate::quiz_run::QuizRunService;

/// Assembles app-facing services around loaded quiz content.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    content: Arc<QuizContent>,
    feedback: Arc<FeedbackService>,
}

impl AppServices {
    /// Build services from environment-derived configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the quiz content cannot be loaded.
    pub async fn from_config(config: QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let source = source_for(&config.content_location);
        let feedback = FeedbackService::new(config.feedback);
        Self::with_source(source.as_ref(), feedback, clock).await
    }

    /// Build services from an explicit content source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the quiz content cannot be loaded.
    pub async fn with_source(
        source: &dyn ContentSource,
        feedback: FeedbackService,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let content = load_content(source).await?;
        if !feedback.enabled() {
            tracing::info!("feedback submission disabled");
        }

        Ok(Self {
            clock,
            content,
            feedback: Arc::new(feedback),
        })
    }

    #[must_use]
    pub fn content(&self) -> Arc<QuizContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<FeedbackService> {
        Arc::clone(&self.feedback)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Begin a fresh run for a registered participant.
    #[must_use]
    pub fn start_run(&self, participant: Participant) -> QuizRunService {
        QuizRunService::start_with_clock(self.content(), participant, self.clock)
    }
}
