//! Assessment scoring engines
//!
//! Pure, deterministic transformations from an answer list to a structured
//! report. No I/O, no mutation of inputs, no time dependence; the same
//! answers always produce the same report.
//!
//! # Scoring Formula
//!
//! ```text
//! Per category C:
//!   raw        = Σ answer.score                 (member questions only)
//!   scaled     = raw × scale_factor(C)          (DASS: 2, STAR: 1)
//!   max        = answered_count × 3 × scale_factor(C)
//!   percentage = round(scaled / max × 100)      (0 when nothing answered)
//!   band       = first ascending threshold the scaled score satisfies
//! ```
//!
//! Percentages are always relative to the questions actually answered, so
//! partial assessments still yield meaningful per-category results.
//!
//! Answers whose question id does not resolve in the catalog are excluded
//! from scoring (fail-soft) and logged at WARN, since an orphaned answer
//! usually means the catalog and a recorded session have diverged.

pub mod dass;
pub mod star;

use tracing::warn;

use crate::catalog::Question;
use crate::models::UserAnswer;

/// Integer percentage of `score` against `max`, rounded to nearest; 0 when
/// `max` is 0 rather than a division error.
pub(crate) fn percentage(score: u32, max: u32) -> u32 {
    percentage_exact(score, max).round() as u32
}

/// Unrounded percentage, for band classification that must not be skewed by
/// display rounding.
pub(crate) fn percentage_exact(score: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        score as f64 / max as f64 * 100.0
    }
}

/// Pair each answer with its catalog question, dropping answers that no
/// longer resolve.
pub(crate) fn resolve<'a>(
    catalog: &'a [Question],
    answers: &'a [UserAnswer],
) -> Vec<(&'a Question, &'a UserAnswer)> {
    answers
        .iter()
        .filter_map(|a| match crate::catalog::find(catalog, a.question_id) {
            Some(q) => Some((q, a)),
            None => {
                warn!(
                    question_id = a.question_id,
                    "answer references a question missing from the catalog; excluded from scoring"
                );
                None
            }
        })
        .collect()
}
