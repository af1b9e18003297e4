//! Pipeline behavior with mocked language collaborators

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use triage_engine::{
    Department, LanguageDetector, LanguageServiceError, TriageEngine, TriagePipeline,
    TriageStatus, Translator,
};

mock! {
    pub Detector {}

    #[async_trait]
    impl LanguageDetector for Detector {
        async fn detect(&self, text: &str) -> Result<String, LanguageServiceError>;
    }
}

mock! {
    pub Translation {}

    #[async_trait]
    impl Translator for Translation {
        async fn translate(&self, text: &str, source_language: &str) -> Result<String, LanguageServiceError>;
    }
}

const HINDI_TEXT: &str = "सीने में दर्द और पसीना";

fn pipeline(detector: MockDetector, translator: MockTranslation) -> TriagePipeline {
    TriagePipeline::new(
        Arc::new(TriageEngine::default()),
        Arc::new(detector),
        Arc::new(translator),
    )
}

#[tokio::test]
async fn test_foreign_text_is_translated_before_triage() {
    let mut detector = MockDetector::new();
    detector
        .expect_detect()
        .with(eq(HINDI_TEXT))
        .times(1)
        .returning(|_| Ok("hi".to_string()));

    let mut translator = MockTranslation::new();
    translator
        .expect_translate()
        .with(eq(HINDI_TEXT), eq("hi"))
        .times(1)
        .returning(|_, _| Ok("chest pain and sweating".to_string()));

    let record = pipeline(detector, translator).classify(HINDI_TEXT).await;

    assert_eq!(record.original_text, HINDI_TEXT);
    assert_eq!(record.detected_language, "hi");
    assert_eq!(record.english_text, "chest pain and sweating");
    assert_eq!(record.final_status, TriageStatus::Critical);
    assert_eq!(record.disease_info.top_department, Department::Cardiology);
}

#[tokio::test]
async fn test_english_text_skips_translation() {
    let mut detector = MockDetector::new();
    detector.expect_detect().returning(|_| Ok("en".to_string()));

    let mut translator = MockTranslation::new();
    translator.expect_translate().times(0);

    let record = pipeline(detector, translator)
        .classify("I have severe chest pain and sweating")
        .await;

    assert_eq!(record.detected_language, "en");
    assert_eq!(record.english_text, "I have severe chest pain and sweating");
}

#[tokio::test]
async fn test_detection_failure_assumes_english() {
    let mut detector = MockDetector::new();
    detector
        .expect_detect()
        .returning(|_| Err(LanguageServiceError::Detection("no features in text".to_string())));

    let mut translator = MockTranslation::new();
    translator.expect_translate().times(0);

    let record = pipeline(detector, translator).classify("seizure").await;

    assert_eq!(record.detected_language, "en");
    assert_eq!(record.english_text, "seizure");
    assert_eq!(record.disease_info.disease_prediction, "Epilepsy");
}

#[tokio::test]
async fn test_translation_failure_keeps_original_text() {
    let mut detector = MockDetector::new();
    detector.expect_detect().returning(|_| Ok("hi".to_string()));

    let mut translator = MockTranslation::new();
    translator
        .expect_translate()
        .returning(|_, _| Err(LanguageServiceError::Unavailable("connection refused".to_string())));

    let record = pipeline(detector, translator).classify(HINDI_TEXT).await;

    assert_eq!(record.detected_language, "hi");
    assert_eq!(record.english_text, HINDI_TEXT);
    // the untranslated text still flows through the engine
    assert_eq!(record.symptoms.len(), 2);
    assert_eq!(record.final_status, TriageStatus::Normal);
}

#[tokio::test]
async fn test_language_codes_are_normalized() {
    let mut detector = MockDetector::new();
    detector.expect_detect().returning(|_| Ok(" EN ".to_string()));

    let mut translator = MockTranslation::new();
    translator.expect_translate().times(0);

    let record = pipeline(detector, translator).classify("chest pain").await;
    assert_eq!(record.detected_language, "en");
}

#[tokio::test]
async fn test_blank_input_never_reaches_collaborators() {
    let mut detector = MockDetector::new();
    detector.expect_detect().times(0);
    let mut translator = MockTranslation::new();
    translator.expect_translate().times(0);

    let record = pipeline(detector, translator).classify("  ").await;

    assert_eq!(record.detected_language, "en");
    assert!(record.symptoms.is_empty());
    assert_eq!(record.final_status, TriageStatus::Normal);
}

#[tokio::test]
async fn test_repeated_pipeline_runs_are_identical() {
    let mut detector = MockDetector::new();
    detector
        .expect_detect()
        .with(eq(HINDI_TEXT))
        .times(2)
        .returning(|_| Ok("hi".to_string()));
    let mut translator = MockTranslation::new();
    translator
        .expect_translate()
        .times(2)
        .returning(|_, _| Ok("chest pain, severe bleeding".to_string()));

    let pipeline = pipeline(detector, translator);
    let first = pipeline.classify(HINDI_TEXT).await;
    let second = pipeline.classify(HINDI_TEXT).await;

    assert_eq!(first, second);
    let order: Vec<Department> = second.critical_departments.departments().collect();
    assert_eq!(order, vec![Department::Cardiology, Department::Emergency]);
    assert_eq!(second.disease_info.top_department, Department::Cardiology);
}
