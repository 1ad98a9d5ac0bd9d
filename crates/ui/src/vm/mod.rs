mod completion_vm;
mod error;
mod question_vm;
mod quiz_vm;
mod transition_vm;

#[cfg(test)]
mod test_support;

pub use completion_vm::{CompletionVm, RecommendationsVm};
pub use error::ViewError;
pub use question_vm::{AnswerFeedbackVm, OptionState, OptionVm, QuestionVm, option_letter};
pub use quiz_vm::{FeedbackStatus, QuizIntent, QuizVm, Screen};
pub use transition_vm::LevelTransitionVm;
