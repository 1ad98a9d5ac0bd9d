use std::sync::Arc;

use chrono::{DateTime, Utc};

use quiz_core::{
    AnswerResult, BadgeImage, BadgeRenderer, Clock, NextSteps, Outcome, Participant, Quiz,
    QuizContent, QuizSession, Step, next_steps,
};

use crate::error::QuizRunError;
use crate::feedback_service::FeedbackRecord;

//
// ─── COMPLETION REPORT ─────────────────────────────────────────────────────────
//

/// Everything the completion screen shows once the quiz has ended.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub outcome: Outcome,
    pub level_name: String,
    pub level_description: String,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub badge: BadgeImage,
    pub next_steps: NextSteps,
}

//
// ─── RUN ───────────────────────────────────────────────────────────────────────
//

/// One participant's pass through the quiz.
///
/// Wraps the engine with the participant, a clock for timestamps and badge
/// dates, and the renderer used for the completion badge.
#[derive(Debug, Clone)]
pub struct QuizRunService {
    clock: Clock,
    renderer: BadgeRenderer,
    participant: Participant,
    quiz: Quiz,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizRunService {
    #[must_use]
    pub fn start(content: Arc<QuizContent>, participant: Participant) -> Self {
        Self::start_with_clock(content, participant, Clock::default_clock())
    }

    #[must_use]
    pub fn start_with_clock(
        content: Arc<QuizContent>,
        participant: Participant,
        clock: Clock,
    ) -> Self {
        tracing::info!(participant = participant.name(), "quiz run started");
        Self {
            clock,
            renderer: BadgeRenderer::new(),
            participant,
            quiz: Quiz::new(content),
            started_at: clock.now(),
            finished_at: None,
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: BadgeRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        self.quiz.session()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.quiz.outcome()
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunError::Engine` when the engine rejects the answer.
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<AnswerResult, QuizRunError> {
        let result = self.quiz.submit_answer(selected_index)?;
        tracing::debug!(
            correct = result.correct,
            lives_remaining = result.lives_remaining,
            "answer submitted"
        );
        if let Some(outcome) = result.outcome {
            self.finish(outcome);
        }
        Ok(result)
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunError::Engine` when the engine rejects the transition.
    pub fn advance(&mut self) -> Result<Step, QuizRunError> {
        let step = self.quiz.advance()?;
        match step {
            Step::LevelTransition { level } => {
                tracing::debug!(level = level.value(), "level transition");
            }
            Step::Finished(outcome) => self.finish(outcome),
            Step::NextQuestion { .. } => {}
        }
        Ok(step)
    }

    /// Start over with the same participant and content.
    pub fn restart(&mut self) {
        self.quiz.reset();
        self.started_at = self.clock.now();
        self.finished_at = None;
        tracing::info!(participant = self.participant.name(), "quiz run restarted");
    }

    /// Summarise a finished run and render its badge.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunError::NotFinished` while the quiz is in progress and
    /// `QuizRunError::Badge` if the badge cannot be rendered.
    pub fn completion_report(&self) -> Result<CompletionReport, QuizRunError> {
        let outcome = self.outcome().ok_or(QuizRunError::NotFinished)?;
        let reached = outcome.reached_level;
        let level = self.quiz.content().level(reached);

        let badge = self.renderer.render(
            reached.value(),
            level,
            self.participant.name(),
            self.clock.today(),
        )?;

        let session = self.session();
        Ok(CompletionReport {
            outcome,
            level_name: level.map(|l| l.name().to_owned()).unwrap_or_default(),
            level_description: level
                .map(|l| l.description().to_owned())
                .unwrap_or_default(),
            correct_answers: session.correct_answers(),
            wrong_answers: session.wrong_answers(),
            badge,
            next_steps: next_steps(reached),
        })
    }

    /// Build a feedback record stamped with the run's clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizRunError::NotFinished` while the quiz is in progress and
    /// `QuizRunError::Feedback` if the text is blank.
    pub fn feedback_record(&self, feedback: &str) -> Result<FeedbackRecord, QuizRunError> {
        if self.session().is_active() {
            return Err(QuizRunError::NotFinished);
        }
        Ok(FeedbackRecord::new(
            &self.participant,
            self.session(),
            feedback,
            self.clock.now(),
        )?)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.finished_at = Some(self.clock.now());
        tracing::info!(
            participant = self.participant.name(),
            completed = outcome.is_completed(),
            reached_level = outcome.reached_level.value(),
            correct_answers = self.session().correct_answers(),
            "quiz run finished"
        );
    }
}
