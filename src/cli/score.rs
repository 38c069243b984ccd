//! Score command - non-interactive scoring of a recorded answers file

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use crate::catalog::{self, Scale};
use crate::models::{deterministic_report_id, AnsweredQuestion, AssessmentReport, UserAnswer};
use crate::reporters::{self, OutputFormat};
use crate::scoring;

pub(crate) fn run(path: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    let answers: Vec<UserAnswer> =
        serde_json::from_str(&content).context("Failed to parse answers file")?;

    let report = score_answers(&answers);

    let rendered = reporters::report_with_format(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Build a report from a raw answer list. DASS and STAR question ids are
/// disjoint, so one file can carry both scales; ids belonging to neither
/// catalog are dropped with a warning.
pub(crate) fn score_answers(answers: &[UserAnswer]) -> AssessmentReport {
    let in_catalog = |scale: Scale, a: &UserAnswer| {
        catalog::find(scale.questions(), a.question_id).is_some()
    };

    let dass_answers: Vec<UserAnswer> = answers
        .iter()
        .copied()
        .filter(|a| in_catalog(Scale::Dass, a))
        .collect();
    let star_answers: Vec<UserAnswer> = answers
        .iter()
        .copied()
        .filter(|a| in_catalog(Scale::Star, a))
        .collect();

    let orphans = answers.len() - dass_answers.len() - star_answers.len();
    if orphans > 0 {
        warn!(
            count = orphans,
            "answers referencing no catalog question were excluded"
        );
    }

    let mut answered = AnsweredQuestion::collect(Scale::Dass.questions(), &dass_answers);
    answered.extend(AnsweredQuestion::collect(
        Scale::Star.questions(),
        &star_answers,
    ));

    AssessmentReport::new(
        (!dass_answers.is_empty()).then(|| scoring::dass::compute(&dass_answers)),
        (!star_answers.is_empty()).then(|| scoring::star::compute(&star_answers)),
    )
    .with_answers(answered)
    .with_id(deterministic_report_id(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionKey;

    #[test]
    fn test_score_answers_splits_scales() {
        let answers = vec![
            UserAnswer {
                question_id: 3,
                selected: OptionKey::Often,
                score: 2,
            },
            UserAnswer {
                question_id: 103,
                selected: OptionKey::Often,
                score: 2,
            },
            UserAnswer {
                question_id: 9000,
                selected: OptionKey::Never,
                score: 0,
            },
        ];
        let report = score_answers(&answers);
        let dass = report.dass.expect("dass section");
        let star = report.star.expect("star section");
        assert_eq!(dass.depression.raw_score, 2);
        assert_eq!(star.coherent.score, 2);
        // Orphan id 9000 excluded from detail too
        assert_eq!(report.answers.len(), 2);
        assert!(!report.id.is_empty());
    }

    #[test]
    fn test_score_answers_empty_has_no_sections() {
        let report = score_answers(&[]);
        assert!(report.dass.is_none());
        assert!(report.star.is_none());
        assert!(report.answers.is_empty());
    }
}
