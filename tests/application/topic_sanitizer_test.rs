use studyflow::application::services::TopicSanitizer;
use studyflow::domain::{CleanedText, KeywordBlacklist, OracleOutput, Topic, TopicSource};

fn cleaned(lines: &[&str]) -> CleanedText {
    CleanedText::new(lines.iter().map(|l| l.to_string()).collect())
}

#[test]
fn given_clean_structured_output_when_sanitizing_then_returns_it_verbatim() {
    let topics = vec![Topic::new("Limits", vec!["One-sided limits".to_string()])];

    let (result, source) = TopicSanitizer::default()
        .sanitize(OracleOutput::Structured(topics.clone()), &cleaned(&["Limits"]));

    assert_eq!(result, topics);
    assert_eq!(source, TopicSource::Oracle);
}

#[test]
fn given_forbidden_topic_when_sanitizing_then_drops_whole_item() {
    let output = OracleOutput::Structured(vec![
        Topic::flat("Total Marks: 100"),
        Topic::new("  Derivatives ", vec!["Chain rule".to_string()]),
        Topic::flat("   "),
    ]);

    let (result, _) = TopicSanitizer::default().sanitize(output, &cleaned(&[]));

    assert_eq!(
        result,
        vec![Topic::new("Derivatives", vec!["Chain rule".to_string()])]
    );
}

#[test]
fn given_forbidden_subtopics_when_sanitizing_then_filters_them_out() {
    let output = OracleOutput::Structured(vec![Topic::new(
        "Integration",
        vec![
            "Definite integrals".to_string(),
            "3 hours lecture".to_string(),
            "".to_string(),
            " By parts ".to_string(),
        ],
    )]);

    let (result, _) = TopicSanitizer::default().sanitize(output, &cleaned(&[]));

    assert_eq!(
        result,
        vec![Topic::new(
            "Integration",
            vec!["Definite integrals".to_string(), "By parts".to_string()]
        )]
    );
}

#[test]
fn given_prose_output_when_sanitizing_then_keeps_long_lines_as_flat_topics() {
    let output = OracleOutput::Unstructured(
        "Limits\n  Derivatives  \nIntegration techniques\nExam pattern overview\nab".to_string(),
    );

    let (result, source) = TopicSanitizer::default().sanitize(output, &cleaned(&["ignored line here"]));

    assert_eq!(
        result,
        vec![
            Topic::flat("Limits"),
            Topic::flat("Derivatives"),
            Topic::flat("Integration techniques"),
        ]
    );
    assert_eq!(source, TopicSource::OracleText);
}

#[test]
fn given_prose_with_only_short_lines_when_sanitizing_then_falls_back_to_cleaned_text() {
    let output = OracleOutput::Unstructured("ok\nyes\nabcde".to_string());

    let (result, source) =
        TopicSanitizer::default().sanitize(output, &cleaned(&["Introduction to Calculus"]));

    assert_eq!(result, vec![Topic::flat("Introduction to Calculus")]);
    assert_eq!(source, TopicSource::CleanedTextFallback);
}

#[test]
fn given_empty_oracle_output_when_sanitizing_then_uses_cleaned_lines_longer_than_ten() {
    let text = cleaned(&["Introduction to Calculus", "Limits and Continuity", "Sets"]);

    let (result, source) = TopicSanitizer::default().sanitize(OracleOutput::Empty, &text);

    assert_eq!(
        result,
        vec![
            Topic::flat("Introduction to Calculus"),
            Topic::flat("Limits and Continuity"),
        ]
    );
    assert_eq!(source, TopicSource::CleanedTextFallback);
}

#[test]
fn given_only_short_cleaned_lines_when_falling_back_then_keeps_them_all() {
    let (result, _) =
        TopicSanitizer::default().sanitize(OracleOutput::Empty, &cleaned(&["Sets", "Graphs"]));

    assert_eq!(result, vec![Topic::flat("Sets"), Topic::flat("Graphs")]);
}

#[test]
fn given_structured_output_fully_filtered_when_sanitizing_then_falls_back_to_cleaned_text() {
    let output = OracleOutput::Structured(vec![Topic::flat("Credits: 4")]);

    let (result, source) =
        TopicSanitizer::default().sanitize(output, &cleaned(&["Probability Theory"]));

    assert_eq!(result, vec![Topic::flat("Probability Theory")]);
    assert_eq!(source, TopicSource::CleanedTextFallback);
}

#[test]
fn given_nothing_anywhere_when_sanitizing_then_returns_empty_with_nothing_source() {
    let (result, source) = TopicSanitizer::default().sanitize(OracleOutput::Empty, &cleaned(&[]));

    assert!(result.is_empty());
    assert_eq!(source, TopicSource::Nothing);
}

#[test]
fn given_custom_blacklist_when_sanitizing_then_applies_injected_terms() {
    let sanitizer = TopicSanitizer::new(KeywordBlacklist::new(["lab"]));
    let output = OracleOutput::Structured(vec![Topic::flat("Lab safety"), Topic::flat("Optics")]);

    let (result, _) = sanitizer.sanitize(output, &cleaned(&[]));

    assert_eq!(result, vec![Topic::flat("Optics")]);
}
