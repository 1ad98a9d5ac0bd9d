use std::sync::Arc;

use quiz_core::{Level, LevelNumber, Question, QuizContent};

/// Six levels of six questions; the right answer is `question % 4`.
pub(crate) fn content() -> Arc<QuizContent> {
    let levels = (1..=6)
        .map(|n| {
            let questions = (0..6)
                .map(|q| {
                    Question::new(
                        format!("L{n}Q{q}"),
                        vec!["a".into(), "b".into(), "c".into(), "d".into()],
                        q % 4,
                        format!("because {n}.{q}"),
                    )
                    .unwrap()
                })
                .collect();
            Level::new(
                LevelNumber::new(n).unwrap(),
                format!("Name {n}"),
                format!("Description {n}"),
                questions,
            )
            .unwrap()
        })
        .collect();
    Arc::new(QuizContent::new(levels).unwrap())
}
