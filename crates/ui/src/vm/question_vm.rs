use quiz_core::model::STARTING_LIVES;
use quiz_core::{AnswerResult, NextAction, Quiz};

/// Letter shown next to the option at `index`.
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

/// Question screen: header, progress, the question and its options.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub level_label: String,
    pub progress_label: String,
    pub progress_percent: f32,
    pub question_number: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    /// One entry per starting life; `true` while the life is still held.
    pub lives: Vec<bool>,
}

impl QuestionVm {
    /// `None` once the quiz has no current question.
    #[must_use]
    pub fn from_quiz(quiz: &Quiz) -> Option<Self> {
        let level = quiz.current_level()?;
        let question = quiz.current_question()?;
        let progress = quiz.progress()?;

        Some(Self {
            level_label: format!("Level {}: {}", level.number(), level.name()),
            progress_label: format!(
                "Question {}/{}",
                progress.question_number,
                level.questions().len()
            ),
            progress_percent: progress.percent,
            question_number: progress.question_number,
            text: question.text().to_owned(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(index, text)| OptionVm {
                    index,
                    letter: option_letter(index),
                    text: text.clone(),
                    state: OptionState::Idle,
                })
                .collect(),
            lives: lives_row(quiz.session().lives()),
        })
    }

    /// Mark options after an answer: the pick, and the right one if it was missed.
    pub fn apply_answer(&mut self, result: &AnswerResult) {
        for option in &mut self.options {
            option.state = if option.index == result.correct_answer_index {
                OptionState::Correct
            } else if option.index == result.selected_index {
                OptionState::Incorrect
            } else {
                OptionState::Idle
            };
        }
        self.lives = lives_row(result.lives_remaining);
    }
}

fn lives_row(lives: u8) -> Vec<bool> {
    (0..STARTING_LIVES).map(|i| i < lives).collect()
}

/// Feedback panel shown under an answered question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedbackVm {
    pub correct: bool,
    pub result_label: &'static str,
    pub explanation: String,
    /// `None` when the answer ended the quiz.
    pub next_label: Option<&'static str>,
}

impl AnswerFeedbackVm {
    #[must_use]
    pub fn new(result: &AnswerResult, next: Option<NextAction>) -> Self {
        Self {
            correct: result.correct,
            result_label: if result.correct {
                "✓ Correct!"
            } else {
                "✗ Incorrect"
            },
            explanation: result.explanation.clone(),
            next_label: next.map(NextAction::label),
        }
    }
}
