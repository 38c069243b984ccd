//! STAR of Well-Being question catalog
//!
//! Positive-psychology complement to DASS-21: twelve questions over four
//! progression levels (Foundation, Growth, Mastery, Excellence), each
//! scoring one of eight attributes under the Inherent (innate trait) or
//! Coherent (practiced habit) category. Options are presented as 1..4 star
//! ratings; scores stay on the same 0..=3 ordinal scale as DASS.

use super::{AnswerOption, Attribute, Question, ScaleGroup, StarCategory};
use crate::models::OptionKey;

const OPTIONS: [AnswerOption; 4] = [
    AnswerOption {
        key: OptionKey::Never,
        label: "Never",
        score: 0,
    },
    AnswerOption {
        key: OptionKey::Sometimes,
        label: "Sometimes",
        score: 1,
    },
    AnswerOption {
        key: OptionKey::Often,
        label: "Often",
        score: 2,
    },
    AnswerOption {
        key: OptionKey::AlmostAlways,
        label: "Almost Always",
        score: 3,
    },
];

const fn item(id: u32, level: u32, attribute: Attribute, prompt: &'static str) -> Question {
    Question {
        id,
        level,
        group: ScaleGroup::Star {
            category: match attribute {
                Attribute::Resilience
                | Attribute::Optimism
                | Attribute::EmotionalIntelligence
                | Attribute::SelfAwareness => StarCategory::Inherent,
                Attribute::Mindfulness
                | Attribute::HealthyRelationships
                | Attribute::WorkLifeBalance
                | Attribute::HealthyHabits => StarCategory::Coherent,
            },
            attribute,
        },
        prompt,
        options: OPTIONS,
    }
}

static QUESTIONS: [Question; 12] = [
    // Level 1 - Foundation
    item(
        101,
        1,
        Attribute::Resilience,
        "I bounce back quickly from setbacks and challenges",
    ),
    item(
        102,
        1,
        Attribute::Optimism,
        "I generally expect positive outcomes in my life",
    ),
    item(
        103,
        1,
        Attribute::Mindfulness,
        "I practice being present and aware in the moment",
    ),
    // Level 2 - Growth
    item(
        104,
        2,
        Attribute::EmotionalIntelligence,
        "I understand and manage my emotions effectively",
    ),
    item(
        105,
        2,
        Attribute::HealthyRelationships,
        "I maintain positive and supportive relationships",
    ),
    item(
        106,
        2,
        Attribute::SelfAwareness,
        "I have a clear understanding of my strengths and weaknesses",
    ),
    // Level 3 - Mastery
    item(
        107,
        3,
        Attribute::WorkLifeBalance,
        "I maintain a healthy balance between work and personal life",
    ),
    item(
        108,
        3,
        Attribute::HealthyHabits,
        "I consistently practice healthy habits (exercise, nutrition, sleep)",
    ),
    item(
        109,
        3,
        Attribute::Resilience,
        "I learn and grow from difficult experiences",
    ),
    // Level 4 - Excellence
    item(
        110,
        4,
        Attribute::Mindfulness,
        "I regularly engage in mindfulness or meditation practices",
    ),
    item(
        111,
        4,
        Attribute::Optimism,
        "I maintain a positive outlook even during challenging times",
    ),
    item(
        112,
        4,
        Attribute::EmotionalIntelligence,
        "I can empathize with and understand others' perspectives",
    ),
];

/// The full STAR catalog, in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Display name for a STAR progression level.
pub fn level_name(level: u32) -> &'static str {
    match level {
        1 => "Foundation",
        2 => "Growth",
        3 => "Mastery",
        4 => "Excellence",
        _ => "Beyond",
    }
}
