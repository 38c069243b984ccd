//! STAR of Well-Being scoring
//!
//! Unscaled raw totals with a single four-level band table applied
//! uniformly to the two categories, every individual attribute, and the
//! overall rating. Levels classify on the unrounded percentage so a 79.6%
//! that displays as "80" still rates High, not Excellent.

use crate::catalog::{self, Attribute, ScaleGroup, StarCategory};
use crate::models::{
    AttributeScore, StarCategoryScore, StarReport, UserAnswer, WellbeingLevel,
};

use super::{percentage_exact, resolve};

/// Four-level well-being bands on the percentage scale.
pub fn level_for(percentage: f64) -> WellbeingLevel {
    if percentage >= 80.0 {
        WellbeingLevel::Excellent
    } else if percentage >= 60.0 {
        WellbeingLevel::High
    } else if percentage >= 40.0 {
        WellbeingLevel::Moderate
    } else {
        WellbeingLevel::Low
    }
}

/// Compute the full STAR report from an answer list. Partial input yields
/// zeroed scores with the lowest level, never an error.
pub fn compute(answers: &[UserAnswer]) -> StarReport {
    let resolved = resolve(catalog::star::questions(), answers);

    let score_category = |category: StarCategory| -> StarCategoryScore {
        let member: Vec<_> = resolved
            .iter()
            .filter(
                |(q, _)| matches!(q.group, ScaleGroup::Star { category: c, .. } if c == category),
            )
            .collect();

        let attributes = category
            .attributes()
            .iter()
            .map(|&attribute| {
                let answered: Vec<_> = member
                    .iter()
                    .filter(|(q, _)| {
                        matches!(q.group, ScaleGroup::Star { attribute: a, .. } if a == attribute)
                    })
                    .collect();
                let score: u32 = answered.iter().map(|(_, a)| a.score as u32).sum();
                let max = answered.len() as u32 * catalog::MAX_OPTION_SCORE as u32;
                let exact = percentage_exact(score, max);
                AttributeScore {
                    attribute,
                    score,
                    percentage: exact.round() as u32,
                    level: level_for(exact),
                }
            })
            .collect();

        let score: u32 = member.iter().map(|(_, a)| a.score as u32).sum();
        let max = member.len() as u32 * catalog::MAX_OPTION_SCORE as u32;
        let exact = percentage_exact(score, max);

        StarCategoryScore {
            score,
            percentage: exact.round() as u32,
            level: level_for(exact),
            attributes,
        }
    };

    let inherent = score_category(StarCategory::Inherent);
    let coherent = score_category(StarCategory::Coherent);

    let overall_score = inherent.score + coherent.score;
    let overall_max = resolved.len() as u32 * catalog::MAX_OPTION_SCORE as u32;
    let overall_exact = percentage_exact(overall_score, overall_max);

    StarReport {
        inherent,
        coherent,
        overall_score,
        overall_percentage: overall_exact.round() as u32,
        overall_level: level_for(overall_exact),
    }
}

/// Coaching lines derived from a computed report, for the results screen
/// and the user-facing email body.
pub fn insights(report: &StarReport) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(match report.overall_level {
        WellbeingLevel::Excellent => {
            "Excellent overall well-being. You're thriving in both natural strengths and learned behaviors.".to_string()
        }
        WellbeingLevel::High => {
            "Strong well-being foundation. You're doing great with both inherent and coherent attributes.".to_string()
        }
        WellbeingLevel::Moderate => {
            "Good progress. There's room to strengthen both your natural abilities and daily habits.".to_string()
        }
        WellbeingLevel::Low => {
            "Building a well-being foundation. Focus on developing both your inherent strengths and positive habits.".to_string()
        }
    });

    if report.inherent.percentage < 60 {
        insights.push(
            "Consider activities that build resilience, optimism, and emotional intelligence - your natural strengths."
                .to_string(),
        );
    }
    if report.coherent.percentage < 60 {
        insights.push(
            "Focus on building healthy habits like mindfulness, balanced relationships, and work-life harmony."
                .to_string(),
        );
    }

    let attribute_pct = |scores: &[AttributeScore], attribute: Attribute| {
        scores
            .iter()
            .find(|s| s.attribute == attribute)
            .map(|s| s.percentage)
            .unwrap_or(0)
    };

    if attribute_pct(&report.inherent.attributes, Attribute::Resilience) < 50 {
        insights.push(
            "Building resilience: try journaling about challenges you've overcome to build confidence."
                .to_string(),
        );
    }
    if attribute_pct(&report.coherent.attributes, Attribute::Mindfulness) < 50 {
        insights.push(
            "Mindfulness practice: even 5 minutes daily can make a big difference in your awareness."
                .to_string(),
        );
    }
    if attribute_pct(&report.coherent.attributes, Attribute::HealthyRelationships) < 50 {
        insights.push(
            "Nurture relationships: reach out to friends or family for meaningful connections."
                .to_string(),
        );
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::star::questions;
    use crate::models::OptionKey;

    fn uniform_answers(key: OptionKey) -> Vec<UserAnswer> {
        questions()
            .iter()
            .map(|q| UserAnswer {
                question_id: q.id,
                selected: key,
                score: q.option(key).score,
            })
            .collect()
    }

    fn answer(question_id: u32, key: OptionKey) -> UserAnswer {
        let q = catalog::find(questions(), question_id).expect("known question");
        UserAnswer {
            question_id,
            selected: key,
            score: q.option(key).score,
        }
    }

    #[test]
    fn test_level_bands() {
        assert_eq!(level_for(0.0), WellbeingLevel::Low);
        assert_eq!(level_for(39.9), WellbeingLevel::Low);
        assert_eq!(level_for(40.0), WellbeingLevel::Moderate);
        assert_eq!(level_for(59.9), WellbeingLevel::Moderate);
        assert_eq!(level_for(60.0), WellbeingLevel::High);
        assert_eq!(level_for(79.9), WellbeingLevel::High);
        assert_eq!(level_for(80.0), WellbeingLevel::Excellent);
        assert_eq!(level_for(100.0), WellbeingLevel::Excellent);
    }

    #[test]
    fn test_all_never_is_low() {
        let report = compute(&uniform_answers(OptionKey::Never));
        assert_eq!(report.inherent.percentage, 0);
        assert_eq!(report.coherent.percentage, 0);
        assert_eq!(report.overall_level, WellbeingLevel::Low);
        for score in report
            .inherent
            .attributes
            .iter()
            .chain(&report.coherent.attributes)
        {
            assert_eq!(score.percentage, 0);
            assert_eq!(score.level, WellbeingLevel::Low);
        }
    }

    #[test]
    fn test_all_almost_always_is_excellent() {
        let report = compute(&uniform_answers(OptionKey::AlmostAlways));
        // 7 Inherent questions, 5 Coherent questions in the catalog
        assert_eq!(report.inherent.score, 21);
        assert_eq!(report.coherent.score, 15);
        assert_eq!(report.inherent.percentage, 100);
        assert_eq!(report.coherent.percentage, 100);
        assert_eq!(report.overall_score, 36);
        assert_eq!(report.overall_level, WellbeingLevel::Excellent);
    }

    #[test]
    fn test_single_attribute_often_is_high() {
        // One question scoring 2 out of max 3 -> 67% -> High
        let report = compute(&[answer(103, OptionKey::Often)]);
        let mindfulness = report
            .coherent
            .attributes
            .iter()
            .find(|s| s.attribute == Attribute::Mindfulness)
            .expect("mindfulness scored");
        assert_eq!(mindfulness.score, 2);
        assert_eq!(mindfulness.percentage, 67);
        assert_eq!(mindfulness.level, WellbeingLevel::High);
    }

    #[test]
    fn test_partial_category_uses_answered_count() {
        // Resilience has two questions (101, 109). Scores 2+3 = 5 of 6 ->
        // 83.3%, displayed 83, Excellent. The Inherent category sees the
        // same two answers, so its max is also 6, not the full catalog's.
        let answers = vec![answer(101, OptionKey::Often), answer(109, OptionKey::AlmostAlways)];
        let report = compute(&answers);
        let resilience = report
            .inherent
            .attributes
            .iter()
            .find(|s| s.attribute == Attribute::Resilience)
            .expect("resilience scored");
        assert_eq!(resilience.percentage, 83);
        assert_eq!(resilience.level, WellbeingLevel::Excellent);
        assert_eq!(report.inherent.percentage, 83);

        // Unanswered attributes report zero, Low
        let optimism = report
            .inherent
            .attributes
            .iter()
            .find(|s| s.attribute == Attribute::Optimism)
            .expect("optimism present");
        assert_eq!(optimism.score, 0);
        assert_eq!(optimism.level, WellbeingLevel::Low);
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let report = compute(&[]);
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.overall_percentage, 0);
        assert_eq!(report.overall_level, WellbeingLevel::Low);
        assert_eq!(report.inherent.attributes.len(), 4);
        assert_eq!(report.coherent.attributes.len(), 4);
    }

    #[test]
    fn test_insights_flag_weak_areas() {
        let low = compute(&uniform_answers(OptionKey::Never));
        let lines = insights(&low);
        assert!(lines.iter().any(|l| l.contains("foundation")));
        assert!(lines.iter().any(|l| l.contains("resilience")
            || l.contains("Building resilience")));

        let high = compute(&uniform_answers(OptionKey::AlmostAlways));
        let lines = insights(&high);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Excellent"));
    }

    #[test]
    fn test_compute_is_pure() {
        let answers = uniform_answers(OptionKey::Sometimes);
        assert_eq!(compute(&answers), compute(&answers));
    }
}
