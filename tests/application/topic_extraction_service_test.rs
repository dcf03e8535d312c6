use std::sync::Arc;

use image::ImageFormat;

use studyflow::application::ports::{FileLoader, FileLoaderError, GenerationBackend};
use studyflow::application::services::{
    TopicExtractionError, TopicExtractionService, TopicPromptBuilder, TopicSanitizer,
};
use studyflow::domain::{DocumentFormat, Topic, TopicSource};
use studyflow::infrastructure::text_processing::{ExtractorFactory, TextNormalizer};

use crate::helpers::{
    CorruptFileLoader, ScriptedBackend, StaticFileLoader, StubOcrEngine, UnreachableBackend,
    blank_image_bytes,
};

const SYLLABUS: &str = "MATH 101\n1. Introduction to Calculus\n2. Limits and Continuity\nTotal Marks: 100\nExam Duration: 3 hrs\n";

fn service(
    file_loader: Arc<dyn FileLoader>,
    backend: Arc<dyn GenerationBackend>,
) -> TopicExtractionService {
    TopicExtractionService::new(
        file_loader,
        backend,
        TextNormalizer::default(),
        TopicPromptBuilder::default(),
        TopicSanitizer::default(),
    )
}

#[tokio::test]
async fn given_structured_oracle_answer_when_extracting_then_returns_oracle_topics() {
    let backend = Arc::new(ScriptedBackend::new(
        r#"Sure! [{"topic":"Limits","subtopics":["One-sided limits"]},{"topic":"Total Marks: 100","subtopics":[]}]"#,
    ));
    let service = service(Arc::new(StaticFileLoader::new(SYLLABUS)), backend.clone());

    let extraction = service
        .extract(b"%PDF", "calculus.pdf".to_string())
        .await
        .unwrap();

    assert_eq!(
        extraction.topics,
        vec![Topic::new("Limits", vec!["One-sided limits".to_string()])]
    );
    assert_eq!(extraction.source, TopicSource::Oracle);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn given_syllabus_when_extracting_then_prompt_holds_only_cleaned_lines() {
    let backend = Arc::new(ScriptedBackend::new("[]"));
    let service = service(Arc::new(StaticFileLoader::new(SYLLABUS)), backend.clone());

    let extraction = service
        .extract(b"%PDF", "calculus.pdf".to_string())
        .await
        .unwrap();

    let prompts = backend.prompts.lock().unwrap();
    assert!(prompts[0].ends_with("MATH 101\nIntroduction to Calculus\nLimits and Continuity"));
    assert_eq!(
        extraction.text,
        "MATH 101\nIntroduction to Calculus\nLimits and Continuity"
    );
}

#[tokio::test]
async fn given_unreachable_oracle_when_extracting_then_falls_back_to_cleaned_lines() {
    let raw = "Introduction to Calculus\nLimits and Continuity";
    let service = service(
        Arc::new(StaticFileLoader::new(raw)),
        Arc::new(UnreachableBackend),
    );

    let extraction = service
        .extract(b"%PDF", "calculus.pdf".to_string())
        .await
        .unwrap();

    assert_eq!(
        extraction.topics,
        vec![
            Topic::flat("Introduction to Calculus"),
            Topic::flat("Limits and Continuity"),
        ]
    );
    assert_eq!(extraction.source, TopicSource::CleanedTextFallback);
}

#[tokio::test]
async fn given_prose_oracle_answer_when_extracting_then_returns_flat_topics() {
    let backend = Arc::new(ScriptedBackend::new(
        "Limits and continuity\nDifferentiation rules\nMaximum marks: 70",
    ));
    let service = service(Arc::new(StaticFileLoader::new(SYLLABUS)), backend);

    let extraction = service
        .extract(b"%PDF", "calculus.pdf".to_string())
        .await
        .unwrap();

    assert_eq!(
        extraction.topics,
        vec![
            Topic::flat("Limits and continuity"),
            Topic::flat("Differentiation rules"),
        ]
    );
    assert_eq!(extraction.source, TopicSource::OracleText);
}

#[tokio::test]
async fn given_non_empty_cleaned_text_and_useless_oracle_when_extracting_then_topics_are_not_empty() {
    for answer in ["", "[]", "ok", r#"[{"topic":"Exam pattern","subtopics":[]}]"#] {
        let service = service(
            Arc::new(StaticFileLoader::new("Sets\nLogic")),
            Arc::new(ScriptedBackend::new(answer)),
        );

        let extraction = service
            .extract(b"img", "scan.png".to_string())
            .await
            .unwrap();

        assert!(!extraction.topics.is_empty(), "answer {answer:?}");
    }
}

#[tokio::test]
async fn given_blank_scan_when_extracting_then_succeeds_with_no_topics_and_skips_oracle() {
    let backend = Arc::new(ScriptedBackend::new(r#"[{"topic":"Hallucinated","subtopics":[]}]"#));
    let ocr = Arc::new(StubOcrEngine::new(""));
    let service = service(ExtractorFactory::with_ocr_engine(ocr), backend.clone());
    let png = blank_image_bytes(ImageFormat::Png);

    let extraction = service.extract(&png, "scan.png".to_string()).await.unwrap();

    assert!(extraction.topics.is_empty());
    assert_eq!(extraction.text, "");
    assert_eq!(extraction.source, TopicSource::Nothing);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn given_uppercase_pdf_name_when_extracting_then_document_is_dispatched_as_pdf() {
    let loader = Arc::new(StaticFileLoader::new(""));
    let service = service(loader.clone(), Arc::new(UnreachableBackend));

    service
        .extract(b"%PDF", "syllabus.PDF".to_string())
        .await
        .unwrap();
    service.extract(b"png", "scan.png".to_string()).await.unwrap();

    let seen = loader.seen.lock().unwrap();
    assert_eq!(seen[0].format, DocumentFormat::Pdf);
    assert_eq!(seen[1].format, DocumentFormat::Image);
}

#[tokio::test]
async fn given_corrupt_document_when_extracting_then_fails_at_extraction_stage() {
    let backend = Arc::new(ScriptedBackend::new("unused"));
    let service = service(Arc::new(CorruptFileLoader), backend.clone());

    let result = service.extract(b"junk", "syllabus.pdf".to_string()).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        TopicExtractionError::Extraction(FileLoaderError::Corrupt(_))
    ));
    assert_eq!(error.stage(), "extraction");
    assert_eq!(backend.call_count(), 0);
}
