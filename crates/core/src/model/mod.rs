mod level;
mod participant;
mod question;
mod quiz_content;
mod session;

pub use level::{LEVEL_COUNT, Level, LevelError, LevelNumber, QUESTIONS_PER_LEVEL, TOTAL_QUESTIONS};
pub use participant::{Participant, ParticipantError};
pub use question::{OPTIONS_PER_QUESTION, Question, QuestionError};
pub use quiz_content::{QuizContent, QuizContentError};
pub use session::{Outcome, OutcomeKind, QuizSession, STARTING_LIVES, SessionPhase};
