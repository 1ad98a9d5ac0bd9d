use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Request};
use serde::Serialize;
use tokio::task::JoinHandle;

use quiz_core::{Participant, QuizSession};

use crate::error::FeedbackError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub endpoint: String,
}

/// Flat record sent to the feedback sink as query parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub level_reached: u8,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub completed: bool,
    pub feedback: String,
}

impl FeedbackRecord {
    /// Snapshot the player's result together with their comment.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::EmptyFeedback` if `feedback` is blank.
    pub fn new(
        participant: &Participant,
        session: &QuizSession,
        feedback: &str,
        at: DateTime<Utc>,
    ) -> Result<Self, FeedbackError> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(FeedbackError::EmptyFeedback);
        }

        Ok(Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            name: participant.name().to_owned(),
            email: participant.email().to_owned(),
            level_reached: session.reached_level().value(),
            correct_answers: session.correct_answers(),
            wrong_answers: session.wrong_answers(),
            completed: session.completed(),
            feedback: feedback.to_owned(),
        })
    }
}

/// Best-effort delivery of feedback records.
///
/// The sink's response is ignored; only transport failures are reported.
#[derive(Clone, Debug)]
pub struct FeedbackService {
    client: Client,
    config: Option<FeedbackConfig>,
}

impl FeedbackService {
    #[must_use]
    pub fn new(config: Option<FeedbackConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Build the GET request carrying `record` in the query string.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::Disabled` without an endpoint, or
    /// `FeedbackError::Http` if the endpoint is not a valid URL.
    pub fn build_request(&self, record: &FeedbackRecord) -> Result<Request, FeedbackError> {
        let config = self.config.as_ref().ok_or(FeedbackError::Disabled)?;
        Ok(self.client.get(&config.endpoint).query(record).build()?)
    }

    /// Send a record and wait for the transport to finish.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError` when disabled or when the request cannot be delivered.
    pub async fn submit(&self, record: &FeedbackRecord) -> Result<(), FeedbackError> {
        let request = self.build_request(record)?;
        match self.client.execute(request).await {
            Ok(response) => {
                tracing::info!(
                    status = %response.status(),
                    level_reached = record.level_reached,
                    "feedback submitted"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "feedback submission failed");
                Err(err.into())
            }
        }
    }

    /// Submit in a background task; callers may drop the handle.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "drop the handle explicitly to ignore the submission result"]
    pub fn spawn_submit(&self, record: FeedbackRecord) -> JoinHandle<Result<(), FeedbackError>> {
        let service = self.clone();
        tokio::spawn(async move { service.submit(&record).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;
    use std::collections::HashMap;

    fn record() -> FeedbackRecord {
        let participant = Participant::new("Ada Lovelace", "ada@example.com").unwrap();
        FeedbackRecord::new(&participant, &QuizSession::new(), "  Great quiz & fun ", fixed_now())
            .unwrap()
    }

    #[test]
    fn record_snapshots_session() {
        let record = record();
        assert_eq!(record.timestamp, "2023-11-14T22:13:20.000Z");
        assert_eq!(record.level_reached, 1);
        assert_eq!(record.correct_answers, 0);
        assert!(!record.completed);
        assert_eq!(record.feedback, "Great quiz & fun");
    }

    #[test]
    fn blank_feedback_is_rejected() {
        let participant = Participant::new("Ada", "ada@example.com").unwrap();
        let err =
            FeedbackRecord::new(&participant, &QuizSession::new(), "   ", fixed_now()).unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyFeedback));
    }

    #[test]
    fn request_carries_record_as_query() {
        let service = FeedbackService::new(Some(FeedbackConfig {
            endpoint: "https://sheet.example/exec".into(),
        }));
        assert!(service.enabled());

        let request = service.build_request(&record()).unwrap();
        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/exec");

        let query: HashMap<String, String> = request.url().query_pairs().into_owned().collect();
        assert_eq!(query["name"], "Ada Lovelace");
        assert_eq!(query["email"], "ada@example.com");
        assert_eq!(query["level_reached"], "1");
        assert_eq!(query["wrong_answers"], "0");
        assert_eq!(query["completed"], "false");
        assert_eq!(query["feedback"], "Great quiz & fun");
        assert_eq!(query["timestamp"], "2023-11-14T22:13:20.000Z");
    }

    #[tokio::test]
    async fn disabled_service_refuses_to_submit() {
        let service = FeedbackService::new(None);
        assert!(!service.enabled());
        let err = service.submit(&record()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Disabled));
    }

    #[tokio::test]
    async fn unreachable_sink_reports_transport_error() {
        let service = FeedbackService::new(Some(FeedbackConfig {
            endpoint: "http://127.0.0.1:9/exec".into(),
        }));
        let result = service.spawn_submit(record()).await.unwrap();
        assert!(matches!(result, Err(FeedbackError::Http(_))));
    }
}
