//! DASS-21 (Depression, Anxiety and Stress Scale) question catalog
//!
//! All 21 items of the official DASS-21 questionnaire in order:
//! Stress 1, 6, 8, 11, 12, 14, 18; Anxiety 2, 4, 7, 9, 15, 19, 20;
//! Depression 3, 5, 10, 13, 16, 17, 21. Every item shares the same
//! frequency-style option set with ordinal scores 0..=3.

use super::{AnswerOption, DassCategory, Question, ScaleGroup};
use crate::models::OptionKey;

const OPTIONS: [AnswerOption; 4] = [
    AnswerOption {
        key: OptionKey::Never,
        label: "Did not apply to me at all",
        score: 0,
    },
    AnswerOption {
        key: OptionKey::Sometimes,
        label: "Applied to me to some degree, or some of the time",
        score: 1,
    },
    AnswerOption {
        key: OptionKey::Often,
        label: "Applied to me to a considerable degree, or a good part of time",
        score: 2,
    },
    AnswerOption {
        key: OptionKey::AlmostAlways,
        label: "Applied to me very much, or most of the time",
        score: 3,
    },
];

const fn item(id: u32, level: u32, category: DassCategory, prompt: &'static str) -> Question {
    Question {
        id,
        level,
        group: ScaleGroup::Dass(category),
        prompt,
        options: OPTIONS,
    }
}

static QUESTIONS: [Question; 21] = [
    item(1, 1, DassCategory::Stress, "I found it hard to wind down"),
    item(
        2,
        1,
        DassCategory::Anxiety,
        "I was aware of dryness of my mouth",
    ),
    item(
        3,
        1,
        DassCategory::Depression,
        "I couldn't seem to experience any positive feeling at all",
    ),
    item(
        4,
        1,
        DassCategory::Anxiety,
        "I experienced breathing difficulty (e.g., excessively rapid breathing, breathlessness in the absence of physical exertion)",
    ),
    item(
        5,
        1,
        DassCategory::Depression,
        "I found it difficult to work up the initiative to do things",
    ),
    item(
        6,
        2,
        DassCategory::Stress,
        "I tended to over-react to situations",
    ),
    item(
        7,
        2,
        DassCategory::Anxiety,
        "I experienced trembling (e.g., in the hands)",
    ),
    item(
        8,
        2,
        DassCategory::Stress,
        "I felt that I was using a lot of nervous energy",
    ),
    item(
        9,
        2,
        DassCategory::Anxiety,
        "I was worried about situations in which I might panic and make a fool of myself",
    ),
    item(
        10,
        2,
        DassCategory::Depression,
        "I felt that I had nothing to look forward to",
    ),
    item(11, 3, DassCategory::Stress, "I found myself getting agitated"),
    item(12, 3, DassCategory::Stress, "I found it difficult to relax"),
    item(
        13,
        3,
        DassCategory::Depression,
        "I felt down-hearted and blue",
    ),
    item(
        14,
        3,
        DassCategory::Stress,
        "I was intolerant of anything that kept me from getting on with what I was doing",
    ),
    item(15, 3, DassCategory::Anxiety, "I felt I was close to panic"),
    item(
        16,
        4,
        DassCategory::Depression,
        "I was unable to become enthusiastic about anything",
    ),
    item(
        17,
        4,
        DassCategory::Depression,
        "I felt I wasn't worth much as a person",
    ),
    item(
        18,
        4,
        DassCategory::Stress,
        "I felt that I was rather touchy",
    ),
    item(
        19,
        4,
        DassCategory::Anxiety,
        "I was aware of the action of my heart in the absence of physical exertion (e.g., sense of heart rate increase, heart missing a beat)",
    ),
    item(
        20,
        4,
        DassCategory::Anxiety,
        "I felt scared without any good reason",
    ),
    item(
        21,
        4,
        DassCategory::Depression,
        "I felt that life was meaningless",
    ),
];

/// The full DASS-21 catalog, in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}
