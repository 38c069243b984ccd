//! Score command end-to-end
//!
//! Exercises the non-interactive path through `cli::run`: a recorded
//! answers file in, a rendered report file out.

use mindgauge::catalog::Scale;
use mindgauge::cli::{Cli, Commands};
use mindgauge::models::{OptionKey, UserAnswer};

fn recorded_answers() -> Vec<UserAnswer> {
    // Whole DASS catalog answered "often", plus one STAR answer
    let mut answers: Vec<UserAnswer> = Scale::Dass
        .questions()
        .iter()
        .map(|q| UserAnswer {
            question_id: q.id,
            selected: OptionKey::Often,
            score: 2,
        })
        .collect();
    answers.push(UserAnswer {
        question_id: 101,
        selected: OptionKey::AlmostAlways,
        score: 3,
    });
    answers
}

#[test]
fn score_command_writes_json_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let answers_path = dir.path().join("answers.json");
    let report_path = dir.path().join("report.json");

    std::fs::write(
        &answers_path,
        serde_json::to_string(&recorded_answers()).expect("serialize answers"),
    )
    .expect("write answers file");

    let cli = Cli {
        log_level: "warn".to_string(),
        command: Some(Commands::Score {
            answers: answers_path,
            format: "json".to_string(),
            output: Some(report_path.clone()),
        }),
    };
    mindgauge::cli::run(cli).expect("score command succeeds");

    let rendered = std::fs::read_to_string(&report_path).expect("report written");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

    // Both scales present: 21 DASS answers, 1 STAR answer
    assert_eq!(parsed["dass"]["depression"]["percentage"], 67);
    assert_eq!(parsed["star"]["inherent"]["percentage"], 100);
    assert_eq!(parsed["answers"].as_array().unwrap().len(), 22);
}

#[test]
fn score_command_rejects_malformed_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let answers_path = dir.path().join("answers.json");
    std::fs::write(&answers_path, "not json at all").expect("write file");

    let cli = Cli {
        log_level: "warn".to_string(),
        command: Some(Commands::Score {
            answers: answers_path,
            format: "text".to_string(),
            output: None,
        }),
    };
    let err = mindgauge::cli::run(cli).expect_err("malformed file must fail");
    assert!(err.to_string().contains("parse"));
}

#[test]
fn score_command_missing_file_fails_with_context() {
    let cli = Cli {
        log_level: "warn".to_string(),
        command: Some(Commands::Score {
            answers: "/nonexistent/answers.json".into(),
            format: "text".to_string(),
            output: None,
        }),
    };
    let err = mindgauge::cli::run(cli).expect_err("missing file must fail");
    assert!(err.to_string().contains("answers.json"));
}
