use quiz_content::{ContentDocument, LevelRecord, QuestionRecord, StaticContentSource};
use services::{AppServices, Clock, FeedbackService};
use ui::{QuizIntent, QuizVm, Screen, ViewError};

async fn services() -> AppServices {
    let document = ContentDocument {
        levels: (1..=6)
            .map(|n| LevelRecord {
                level: n,
                name: format!("Stage {n}"),
                description: String::new(),
                questions: (0..6)
                    .map(|q| QuestionRecord {
                        question: format!("Question {q} of stage {n}"),
                        options: vec!["one".into(), "two".into(), "three".into(), "four".into()],
                        correct_answer: 1,
                        explanation: String::new(),
                    })
                    .collect(),
            })
            .collect(),
    };
    let source = StaticContentSource::new(serde_json::to_string(&document).unwrap());
    AppServices::with_source(&source, FeedbackService::new(None), Clock::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn registration_validates_details() {
    let services = services().await;

    let err = QuizVm::start(&services, "  ", "ada@example.com").err();
    assert_eq!(err, Some(ViewError::MissingDetails));
    assert_eq!(
        err.map(ViewError::message),
        Some("Please enter both your name and email.")
    );

    let err = QuizVm::start(&services, "Ada", "ada@example").err();
    assert_eq!(err, Some(ViewError::InvalidEmail));
}

#[tokio::test]
async fn registered_player_sees_first_question() {
    let services = services().await;
    let mut vm = QuizVm::start(&services, " Ada ", "ada@example.com").unwrap();
    assert!(!vm.feedback_enabled());
    assert_eq!(vm.run().participant().name(), "Ada");

    match vm.screen() {
        Screen::Question(question) => {
            assert_eq!(question.level_label, "Level 1: Stage 1");
            assert_eq!(question.options[1].text, "two");
        }
        other => panic!("unexpected screen {other:?}"),
    }

    match vm.apply(QuizIntent::Select(1)).unwrap() {
        Screen::Answered { feedback, .. } => assert_eq!(feedback.result_label, "✓ Correct!"),
        other => panic!("unexpected screen {other:?}"),
    }
}
