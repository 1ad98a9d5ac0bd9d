use std::sync::Arc;

use quiz_core::{Participant, Step};
use services::{AppServices, FeedbackService, QuizRunService};

use crate::vm::completion_vm::CompletionVm;
use crate::vm::error::ViewError;
use crate::vm::question_vm::{AnswerFeedbackVm, QuestionVm};
use crate::vm::transition_vm::LevelTransitionVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    /// The next button, or the end of a level transition.
    Next,
    Restart,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Question(QuestionVm),
    Answered {
        question: QuestionVm,
        feedback: AnswerFeedbackVm,
    },
    LevelTransition(LevelTransitionVm),
    Completion(CompletionVm),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStatus {
    Idle,
    Submitting,
    Submitted,
}

impl FeedbackStatus {
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            FeedbackStatus::Idle => "Submit Feedback",
            FeedbackStatus::Submitting => "Submitting...",
            FeedbackStatus::Submitted => "Submitted ✓",
        }
    }
}

/// Drives the quiz screens for one participant.
pub struct QuizVm {
    run: QuizRunService,
    feedback: Arc<FeedbackService>,
    screen: Screen,
    feedback_status: FeedbackStatus,
}

impl QuizVm {
    /// Register the participant and open the first question.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingDetails` or `ViewError::InvalidEmail` when
    /// the registration form is incomplete.
    pub fn start(services: &AppServices, name: &str, email: &str) -> Result<Self, ViewError> {
        let participant = Participant::new(name, email)?;
        Self::new(services.start_run(participant), services.feedback())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the run has no question to show.
    pub fn new(run: QuizRunService, feedback: Arc<FeedbackService>) -> Result<Self, ViewError> {
        let screen = question_screen(&run)?;
        Ok(Self {
            run,
            feedback,
            screen,
            feedback_status: FeedbackStatus::Idle,
        })
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn run(&self) -> &QuizRunService {
        &self.run
    }

    #[must_use]
    pub fn feedback_status(&self) -> FeedbackStatus {
        self.feedback_status
    }

    #[must_use]
    pub fn feedback_enabled(&self) -> bool {
        self.feedback.enabled()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the intent does not fit the current screen.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<&Screen, ViewError> {
        let next = match (intent, &self.screen) {
            (QuizIntent::Select(index), Screen::Question(question)) => {
                let mut question = question.clone();
                let result = self.run.submit_answer(index)?;
                if result.outcome.is_some() {
                    completion_screen(&self.run)?
                } else {
                    question.apply_answer(&result);
                    Screen::Answered {
                        question,
                        feedback: AnswerFeedbackVm::new(&result, self.run.quiz().next_action()),
                    }
                }
            }
            (QuizIntent::Next, Screen::Answered { .. }) => match self.run.advance()? {
                Step::NextQuestion { .. } => question_screen(&self.run)?,
                Step::LevelTransition { .. } => {
                    let level = self.run.quiz().current_level().ok_or(ViewError::Unknown)?;
                    Screen::LevelTransition(LevelTransitionVm::from(level))
                }
                Step::Finished(_) => completion_screen(&self.run)?,
            },
            (QuizIntent::Next, Screen::LevelTransition(_)) => question_screen(&self.run)?,
            (QuizIntent::Restart, _) => {
                self.run.restart();
                self.feedback_status = FeedbackStatus::Idle;
                question_screen(&self.run)?
            }
            _ => return Err(ViewError::Unknown),
        };

        self.screen = next;
        Ok(&self.screen)
    }

    /// Send the player's comment once; later calls after success are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyFeedback` for blank text and
    /// `ViewError::FeedbackFailed` when delivery fails. Both leave the quiz as is.
    pub async fn submit_feedback(&mut self, text: &str) -> Result<(), ViewError> {
        if self.feedback_status == FeedbackStatus::Submitted {
            return Ok(());
        }
        let record = self.run.feedback_record(text)?;

        self.feedback_status = FeedbackStatus::Submitting;
        match self.feedback.submit(&record).await {
            Ok(()) => {
                self.feedback_status = FeedbackStatus::Submitted;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "feedback not delivered");
                self.feedback_status = FeedbackStatus::Idle;
                Err(err.into())
            }
        }
    }
}

fn question_screen(run: &QuizRunService) -> Result<Screen, ViewError> {
    QuestionVm::from_quiz(run.quiz())
        .map(Screen::Question)
        .ok_or(ViewError::Unknown)
}

fn completion_screen(run: &QuizRunService) -> Result<Screen, ViewError> {
    let report = run.completion_report()?;
    Ok(Screen::Completion(CompletionVm::new(
        &report,
        run.participant(),
    )))
}
