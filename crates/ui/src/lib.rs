//! Display-agnostic view models for the quiz screens.

#![forbid(unsafe_code)]

pub mod vm;

pub use vm::{QuizIntent, QuizVm, Screen, ViewError};
