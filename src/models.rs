//! Core data models for Mindgauge
//!
//! These models are used throughout the codebase for representing
//! answers, category scores, and assessment reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Attribute, Question};

/// Generate a deterministic report ID based on content hash.
///
/// This ensures reports have stable IDs for the same answer set, enabling:
/// - Comparing exported reports across runs
/// - Reliable deduplication when results are forwarded (e.g. by email)
///
/// The ID is a 16-character hex string derived from hashing each answer's
/// question id, selected option, and recorded score.
pub fn deterministic_report_id(answers: &[UserAnswer]) -> String {
    // MD5 for stable cross-version hashing; DefaultHasher is intentionally
    // not stable across Rust/compiler versions.
    let mut input = String::new();
    for a in answers {
        input.push_str(&format!("{}\n{}\n{}\n", a.question_id, a.selected, a.score));
    }
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// Normalized answer-option key shared by every catalog.
///
/// The DASS catalog presents these as frequency labels, the STAR catalog as
/// 1..4 star ratings; both store the same four ordinal keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    #[default]
    Never,
    Sometimes,
    Often,
    AlmostAlways,
}

impl OptionKey {
    /// All keys in presentation order.
    pub const ALL: [OptionKey; 4] = [
        OptionKey::Never,
        OptionKey::Sometimes,
        OptionKey::Often,
        OptionKey::AlmostAlways,
    ];

    /// 1-based position; doubles as the star count in star-rating catalogs.
    pub fn ordinal(self) -> u8 {
        match self {
            OptionKey::Never => 1,
            OptionKey::Sometimes => 2,
            OptionKey::Often => 3,
            OptionKey::AlmostAlways => 4,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal). Accepts 1..=4.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(OptionKey::Never),
            2 => Some(OptionKey::Sometimes),
            3 => Some(OptionKey::Often),
            4 => Some(OptionKey::AlmostAlways),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKey::Never => write!(f, "never"),
            OptionKey::Sometimes => write!(f, "sometimes"),
            OptionKey::Often => write!(f, "often"),
            OptionKey::AlmostAlways => write!(f, "almost_always"),
        }
    }
}

/// A recorded answer for one question.
///
/// Exactly one answer exists per question in a finished pass; re-answering
/// replaces, navigating backward removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: u32,
    pub selected: OptionKey,
    pub score: u8,
}

/// DASS severity bands, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    Mild,
    Moderate,
    Severe,
    ExtremelySevere,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Normal => write!(f, "Normal"),
            Severity::Mild => write!(f, "Mild"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::Severe => write!(f, "Severe"),
            Severity::ExtremelySevere => write!(f, "Extremely Severe"),
        }
    }
}

/// STAR well-being levels, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum WellbeingLevel {
    #[default]
    Low,
    Moderate,
    High,
    Excellent,
}

impl std::fmt::Display for WellbeingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WellbeingLevel::Low => write!(f, "Low"),
            WellbeingLevel::Moderate => write!(f, "Moderate"),
            WellbeingLevel::High => write!(f, "High"),
            WellbeingLevel::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Binary status over the averaged DASS percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    #[default]
    Healthy,
    AtRisk,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Healthy => write!(f, "Healthy"),
            OverallStatus::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// Score for one DASS category.
///
/// `score` is the scaled (DASS-42 normalized) value the severity bands key
/// off; `percentage` is relative to the questions actually answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScaleScore {
    pub raw_score: u32,
    pub score: u32,
    pub percentage: u32,
    pub severity: Severity,
}

/// Full DASS-21 result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DassReport {
    pub depression: ScaleScore,
    pub anxiety: ScaleScore,
    pub stress: ScaleScore,
    /// Sum of the three scaled category scores.
    pub overall_score: u32,
    /// Mean of the three category percentages, rounded.
    pub overall_percentage: u32,
    pub overall_status: OverallStatus,
}

impl DassReport {
    /// Category scores with display labels, in catalog order.
    pub fn categories(&self) -> [(&'static str, &ScaleScore); 3] {
        [
            ("Depression", &self.depression),
            ("Anxiety", &self.anxiety),
            ("Stress", &self.stress),
        ]
    }
}

/// Score for one STAR attribute. Unscaled raw totals, four-level bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    pub attribute: Attribute,
    pub score: u32,
    pub percentage: u32,
    pub level: WellbeingLevel,
}

/// Aggregate for one STAR category (Inherent or Coherent) plus its
/// member-attribute breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StarCategoryScore {
    pub score: u32,
    pub percentage: u32,
    pub level: WellbeingLevel,
    pub attributes: Vec<AttributeScore>,
}

/// Full STAR of well-being result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StarReport {
    pub inherent: StarCategoryScore,
    pub coherent: StarCategoryScore,
    pub overall_score: u32,
    pub overall_percentage: u32,
    pub overall_level: WellbeingLevel,
}

/// Display record for one answered question, used in result detail views
/// and email bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
    pub selected: OptionKey,
    pub level: u32,
    pub category: String,
}

impl AnsweredQuestion {
    /// Resolve an answer list against its catalog into display records.
    /// Answers that no longer resolve are skipped.
    pub fn collect(catalog: &[Question], answers: &[UserAnswer]) -> Vec<Self> {
        answers
            .iter()
            .filter_map(|a| {
                let question = catalog.iter().find(|q| q.id == a.question_id)?;
                let option = question.option(a.selected);
                Some(AnsweredQuestion {
                    question: question.prompt.to_string(),
                    answer: option.label.to_string(),
                    selected: a.selected,
                    level: question.level,
                    category: question.group.label().to_string(),
                })
            })
            .collect()
    }
}

/// Envelope for a completed assessment: everything a reporter or the email
/// composer needs in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub dass: Option<DassReport>,
    pub star: Option<StarReport>,
    pub answers: Vec<AnsweredQuestion>,
}

impl AssessmentReport {
    pub fn new(dass: Option<DassReport>, star: Option<StarReport>) -> Self {
        AssessmentReport {
            id: String::new(),
            generated_at: Utc::now(),
            dass,
            star,
            answers: Vec::new(),
        }
    }

    pub fn with_answers(mut self, answers: Vec<AnsweredQuestion>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}
