#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod feedback_service;
pub mod quiz_run;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::QuizConfig;
pub use error::{AppServicesError, FeedbackError, QuizRunError};
pub use feedback_service::{FeedbackConfig, FeedbackRecord, FeedbackService};
pub use quiz_run::{CompletionReport, QuizRunService};
