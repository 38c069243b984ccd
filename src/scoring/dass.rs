//! DASS-21 scoring
//!
//! Raw category sums are doubled to normalize onto the historical DASS-42
//! range, then classified against the published per-category severity cut
//! points. The overall status averages the three category percentages.

use crate::catalog::{self, DassCategory, ScaleGroup};
use crate::models::{DassReport, OverallStatus, ScaleScore, Severity, UserAnswer};

use super::{percentage, resolve};

/// DASS-21 raw sums are doubled to match the DASS-42 reference range.
pub const SCALE_FACTOR: u32 = 2;

/// Averaged percentage at or above this is classified At Risk.
pub const AT_RISK_THRESHOLD: f64 = 40.0;

/// Ascending severity bands: inclusive upper bound on the scaled score.
/// Scores above the last bound are Extremely Severe.
///
/// ```text
/// Severity          Depression  Anxiety  Stress
/// Normal            0-9         0-7      0-14
/// Mild              10-13       8-9      15-18
/// Moderate          14-20       10-14    19-25
/// Severe            21-27       15-19    26-33
/// Extremely Severe  28+         20+      34+
/// ```
const DEPRESSION_BANDS: [(u32, Severity); 4] = [
    (9, Severity::Normal),
    (13, Severity::Mild),
    (20, Severity::Moderate),
    (27, Severity::Severe),
];

const ANXIETY_BANDS: [(u32, Severity); 4] = [
    (7, Severity::Normal),
    (9, Severity::Mild),
    (14, Severity::Moderate),
    (19, Severity::Severe),
];

const STRESS_BANDS: [(u32, Severity); 4] = [
    (14, Severity::Normal),
    (18, Severity::Mild),
    (25, Severity::Moderate),
    (33, Severity::Severe),
];

/// Classify a scaled category score. Bands are checked in ascending order;
/// the first satisfied bound wins.
pub fn severity_for(category: DassCategory, scaled_score: u32) -> Severity {
    let bands = match category {
        DassCategory::Depression => &DEPRESSION_BANDS,
        DassCategory::Anxiety => &ANXIETY_BANDS,
        DassCategory::Stress => &STRESS_BANDS,
    };
    for &(upper, severity) in bands {
        if scaled_score <= upper {
            return severity;
        }
    }
    Severity::ExtremelySevere
}

/// Compute the full DASS-21 report from an answer list.
///
/// Accepts partial answer sets: categories with no answers score zero with
/// the lowest band instead of erroring.
pub fn compute(answers: &[UserAnswer]) -> DassReport {
    let resolved = resolve(catalog::dass::questions(), answers);

    let score_category = |category: DassCategory| -> ScaleScore {
        let member: Vec<_> = resolved
            .iter()
            .filter(|(q, _)| q.group == ScaleGroup::Dass(category))
            .collect();

        let raw_score: u32 = member.iter().map(|(_, a)| a.score as u32).sum();
        let score = raw_score * SCALE_FACTOR;
        let max = member.len() as u32 * catalog::MAX_OPTION_SCORE as u32 * SCALE_FACTOR;

        ScaleScore {
            raw_score,
            score,
            percentage: percentage(score, max),
            severity: severity_for(category, score),
        }
    };

    let depression = score_category(DassCategory::Depression);
    let anxiety = score_category(DassCategory::Anxiety);
    let stress = score_category(DassCategory::Stress);

    let overall_score = depression.score + anxiety.score + stress.score;
    let mean_percentage =
        (depression.percentage + anxiety.percentage + stress.percentage) as f64 / 3.0;
    let overall_status = if mean_percentage < AT_RISK_THRESHOLD {
        OverallStatus::Healthy
    } else {
        OverallStatus::AtRisk
    };

    DassReport {
        depression,
        anxiety,
        stress,
        overall_score,
        overall_percentage: mean_percentage.round() as u32,
        overall_status,
    }
}
