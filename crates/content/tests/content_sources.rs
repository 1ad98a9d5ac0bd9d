use std::io::Write;

use quiz_content::{
    ContentDocument, ContentError, ContentSource, FileContentSource, LevelRecord, QuestionRecord,
    StaticContentSource, load_content, source_for,
};
use quiz_core::model::LevelNumber;

fn document(levels: u8) -> ContentDocument {
    ContentDocument {
        levels: (1..=levels)
            .map(|n| LevelRecord {
                level: n,
                name: format!("Level {n}"),
                description: format!("Tier {n}"),
                questions: (0..6)
                    .map(|q| QuestionRecord {
                        question: format!("L{n} Q{q}"),
                        options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                        correct_answer: q % 4,
                        explanation: format!("Explanation {n}.{q}"),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[tokio::test]
async fn file_source_loads_valid_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&document(6)).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let source = source_for(file.path().to_str().unwrap());
    let content = load_content(source.as_ref()).await.unwrap();

    let last = content.level(LevelNumber::LAST).unwrap();
    assert_eq!(last.name(), "Level 6");
    assert_eq!(last.description(), "Tier 6");
    assert_eq!(content.question_at(1, 5).unwrap().text(), "L2 Q5");
}

#[tokio::test]
async fn file_source_rejects_incomplete_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&document(5)).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let err = FileContentSource::new(file.path()).load().await.unwrap_err();
    assert!(matches!(err, ContentError::Invalid(_)));
}

#[tokio::test]
async fn static_source_loads_embedded_document() {
    let json = serde_json::to_string(&document(6)).unwrap();
    let source = StaticContentSource::new(json);
    let content = source.load().await.unwrap();
    assert_eq!(content.levels().len(), 6);
}

#[tokio::test]
async fn load_content_propagates_errors() {
    let source = StaticContentSource::new(r#"{"levels": []}"#);
    let err = load_content(&source).await.unwrap_err();
    assert!(err.to_string().contains("expected 6 levels"));
}
