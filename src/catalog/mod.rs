//! Question catalogs
//!
//! Process-wide immutable reference data: the DASS-21 clinical screening
//! questions and the STAR of well-being questions, each with fixed
//! four-option Likert scoring. Loaded once, read-only for the life of the
//! process.

pub mod dass;
pub mod star;

use serde::Serialize;

use crate::models::OptionKey;

/// Which questionnaire a question (or an assessment run) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Dass,
    Star,
}

impl Scale {
    pub fn label(self) -> &'static str {
        match self {
            Scale::Dass => "DASS-21",
            Scale::Star => "STAR of Well-Being",
        }
    }

    /// The catalog for this scale.
    pub fn questions(self) -> &'static [Question] {
        match self {
            Scale::Dass => dass::questions(),
            Scale::Star => star::questions(),
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dass" | "dass-21" | "dass21" => Ok(Scale::Dass),
            "star" => Ok(Scale::Star),
            _ => Err(format!("Unknown scale '{}'. Valid scales: dass, star", s)),
        }
    }
}

/// DASS-21 sub-scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DassCategory {
    Depression,
    Anxiety,
    Stress,
}

impl DassCategory {
    pub const ALL: [DassCategory; 3] = [
        DassCategory::Depression,
        DassCategory::Anxiety,
        DassCategory::Stress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DassCategory::Depression => "Depression",
            DassCategory::Anxiety => "Anxiety",
            DassCategory::Stress => "Stress",
        }
    }
}

/// STAR top-level category: innate traits vs practiced habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StarCategory {
    Inherent,
    Coherent,
}

impl StarCategory {
    pub const ALL: [StarCategory; 2] = [StarCategory::Inherent, StarCategory::Coherent];

    pub fn label(self) -> &'static str {
        match self {
            StarCategory::Inherent => "Inherent",
            StarCategory::Coherent => "Coherent",
        }
    }

    /// The attributes scored under this category.
    pub fn attributes(self) -> &'static [Attribute] {
        match self {
            StarCategory::Inherent => &[
                Attribute::Resilience,
                Attribute::Optimism,
                Attribute::EmotionalIntelligence,
                Attribute::SelfAwareness,
            ],
            StarCategory::Coherent => &[
                Attribute::Mindfulness,
                Attribute::HealthyRelationships,
                Attribute::WorkLifeBalance,
                Attribute::HealthyHabits,
            ],
        }
    }
}

/// Individual STAR well-being attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Resilience,
    Optimism,
    EmotionalIntelligence,
    SelfAwareness,
    Mindfulness,
    HealthyRelationships,
    WorkLifeBalance,
    HealthyHabits,
}

impl Attribute {
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Resilience => "Resilience",
            Attribute::Optimism => "Optimism",
            Attribute::EmotionalIntelligence => "Emotional Intelligence",
            Attribute::SelfAwareness => "Self-Awareness",
            Attribute::Mindfulness => "Mindfulness",
            Attribute::HealthyRelationships => "Healthy Relationships",
            Attribute::WorkLifeBalance => "Work-Life Balance",
            Attribute::HealthyHabits => "Healthy Habits",
        }
    }

    pub fn category(self) -> StarCategory {
        match self {
            Attribute::Resilience
            | Attribute::Optimism
            | Attribute::EmotionalIntelligence
            | Attribute::SelfAwareness => StarCategory::Inherent,
            Attribute::Mindfulness
            | Attribute::HealthyRelationships
            | Attribute::WorkLifeBalance
            | Attribute::HealthyHabits => StarCategory::Coherent,
        }
    }
}

/// The scoring group a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleGroup {
    Dass(DassCategory),
    Star {
        category: StarCategory,
        attribute: Attribute,
    },
}

impl ScaleGroup {
    pub fn label(self) -> &'static str {
        match self {
            ScaleGroup::Dass(c) => c.label(),
            ScaleGroup::Star { category, .. } => category.label(),
        }
    }
}

/// One of the four answer options for a question.
///
/// `key` is the normalized ordinal key; `label` is what the user sees for
/// this particular question; `score` is the value recorded when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub key: OptionKey,
    pub label: &'static str,
    pub score: u8,
}

/// Maximum per-question option score across all catalogs.
pub const MAX_OPTION_SCORE: u8 = 3;

/// An immutable catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    /// Progression level, non-decreasing across each catalog.
    pub level: u32,
    pub group: ScaleGroup,
    pub prompt: &'static str,
    pub options: [AnswerOption; 4],
}

impl Question {
    /// The option record for a key. Every question carries all four keys.
    pub fn option(&self, key: OptionKey) -> &AnswerOption {
        &self.options[(key.ordinal() - 1) as usize]
    }
}

/// Find a question by id.
pub fn find(catalog: &[Question], id: u32) -> Option<&Question> {
    catalog.iter().find(|q| q.id == id)
}

/// Questions at the given progression level, in catalog order.
pub fn questions_by_level(catalog: &[Question], level: u32) -> Vec<&Question> {
    catalog.iter().filter(|q| q.level == level).collect()
}

/// Highest progression level in a catalog.
pub fn max_level(catalog: &[Question]) -> u32 {
    catalog.iter().map(|q| q.level).max().unwrap_or(0)
}
