use quiz_core::model::LEVEL_COUNT;
use quiz_core::{NextSteps, Participant};
use services::CompletionReport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationsVm {
    pub intro: String,
    pub items: Vec<String>,
}

impl From<NextSteps> for RecommendationsVm {
    fn from(steps: NextSteps) -> Self {
        match steps {
            NextSteps::Advance(recommendation) => Self {
                intro: format!("To advance to {}, focus on:", recommendation.title),
                items: recommendation.concepts.iter().map(|c| (*c).to_owned()).collect(),
            },
            NextSteps::Mastered(topics) => Self {
                intro: "You've mastered all levels! Here are some advanced topics to explore:"
                    .to_owned(),
                items: topics.iter().map(|t| (*t).to_owned()).collect(),
            },
        }
    }
}

/// Completion screen: headline, summary, badge and what to study next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub title: String,
    pub message: Vec<String>,
    pub badge_svg: String,
    pub recommendations: RecommendationsVm,
}

impl CompletionVm {
    #[must_use]
    pub fn new(report: &CompletionReport, participant: &Participant) -> Self {
        let name = participant.name();
        let correct = report.correct_answers;

        let (title, message) = if report.outcome.is_completed() {
            (
                "Congratulations! You completed all levels!".to_owned(),
                vec![
                    format!("{name}, you've demonstrated professional competence in AI concepts!"),
                    format!(
                        "You answered {correct} questions correctly across all {LEVEL_COUNT} levels."
                    ),
                ],
            )
        } else {
            (
                format!(
                    "Quiz Complete - You reached Level {}",
                    report.outcome.reached_level
                ),
                vec![
                    format!("{name}, you've reached the {} level!", report.level_name),
                    format!(
                        "You answered {correct} questions correctly before using all your lives."
                    ),
                ],
            )
        };

        Self {
            title,
            message,
            badge_svg: report.badge.to_svg(),
            recommendations: report.next_steps.into(),
        }
    }
}
