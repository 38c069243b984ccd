//! Reporter output contracts
//!
//! Build a real report through the public API and check each output format
//! holds its shape: JSON parses with the expected fields, markdown and text
//! carry every section, unknown formats fail cleanly.

use mindgauge::catalog::Scale;
use mindgauge::models::{
    deterministic_report_id, AnsweredQuestion, AssessmentReport, OptionKey,
};
use mindgauge::reporters::{self, OutputFormat};
use mindgauge::scoring;
use mindgauge::session::AssessmentSession;

fn full_report() -> AssessmentReport {
    let mut answered = Vec::new();
    let mut all_answers = Vec::new();
    let mut dass = None;
    let mut star = None;

    for scale in [Scale::Dass, Scale::Star] {
        let mut session = AssessmentSession::new(scale);
        session.start();
        while let Some(q) = session.current_question() {
            session.submit_answer(q.id, OptionKey::Often);
        }
        let answers = session.answers().to_vec();
        match scale {
            Scale::Dass => dass = Some(scoring::dass::compute(&answers)),
            Scale::Star => star = Some(scoring::star::compute(&answers)),
        }
        answered.extend(AnsweredQuestion::collect(scale.questions(), &answers));
        all_answers.extend(answers);
    }

    AssessmentReport::new(dass, star)
        .with_answers(answered)
        .with_id(deterministic_report_id(&all_answers))
}

#[test]
fn json_report_has_full_structure() {
    let report = full_report();
    let rendered = reporters::report_with_format(&report, OutputFormat::Json).expect("render");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

    assert_eq!(parsed["id"].as_str().unwrap().len(), 16);
    assert_eq!(parsed["dass"]["depression"]["percentage"], 67);
    assert_eq!(parsed["dass"]["depression"]["severity"], "extremely_severe");
    assert_eq!(parsed["dass"]["overall_status"], "at_risk");
    assert_eq!(parsed["star"]["overall_level"], "high");
    assert_eq!(
        parsed["star"]["inherent"]["attributes"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
    assert_eq!(parsed["answers"].as_array().unwrap().len(), 33);
}

#[test]
fn json_report_round_trips_through_serde() {
    let report = full_report();
    let rendered = reporters::report_with_format(&report, OutputFormat::Json).expect("render");
    let restored: AssessmentReport = serde_json::from_str(&rendered).expect("deserialize");
    assert_eq!(restored.id, report.id);
    assert_eq!(restored.dass, report.dass);
    assert_eq!(restored.star, report.star);
    assert_eq!(restored.answers, report.answers);
}

#[test]
fn text_report_renders_every_section() {
    let report = full_report();
    let rendered = reporters::report_with_format(&report, OutputFormat::Text).expect("render");

    assert!(rendered.contains("Mindgauge Assessment"));
    for label in ["Depression", "Anxiety", "Stress", "Inherent", "Coherent"] {
        assert!(rendered.contains(label), "missing section: {label}");
    }
    assert!(rendered.contains("Extremely Severe"));
    // At Risk overall points at the booking flow
    assert!(rendered.contains("mindgauge book"));
}

#[test]
fn markdown_report_renders_tables_and_detail() {
    let report = full_report();
    let rendered =
        reporters::report_with_format(&report, OutputFormat::Markdown).expect("render");

    assert!(rendered.starts_with("# Mindgauge Assessment"));
    assert!(rendered.contains("| Depression | 28 | 67% | Extremely Severe |"));
    assert!(rendered.contains("### Coherent"));
    assert!(rendered.contains("| Mindfulness |"));
    assert!(rendered.contains("<details>"));
}

#[test]
fn format_parsing_accepts_aliases_and_rejects_unknown() {
    assert!(reporters::report(&full_report(), "md").is_ok());
    assert!(reporters::report(&full_report(), "TEXT").is_ok());
    let err = reporters::report(&full_report(), "sarif").unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
}

#[test]
fn empty_report_renders_in_all_formats() {
    let report = AssessmentReport::new(None, None);
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
        let rendered = reporters::report_with_format(&report, format).expect("render");
        assert!(!rendered.is_empty());
    }
}
