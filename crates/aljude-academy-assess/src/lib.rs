#![forbid(unsafe_code)]
//! Self-assessment scoring. Pure over its inputs; knows nothing about the
//! catalog beyond a question count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "aljude-academy-assess";

pub const POINTS_PER_QUESTION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessError(pub String);

impl Display for AssessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AssessError {}

/// One answer on the three-step maturity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerLevel {
    #[serde(rename = "not")]
    NotInPlace,
    #[serde(rename = "partial")]
    PartiallyInPlace,
    #[serde(rename = "full")]
    FullyInPlace,
}

impl AnswerLevel {
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::NotInPlace => 0,
            Self::PartiallyInPlace => 1,
            Self::FullyInPlace => 2,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotInPlace => "not",
            Self::PartiallyInPlace => "partial",
            Self::FullyInPlace => "full",
        }
    }
}

pub fn parse_answer_level(input: &str) -> Result<AnswerLevel, AssessError> {
    match input.trim() {
        "not" => Ok(AnswerLevel::NotInPlace),
        "partial" => Ok(AnswerLevel::PartiallyInPlace),
        "full" => Ok(AnswerLevel::FullyInPlace),
        other => Err(AssessError(format!(
            "answer level must be one of not|partial|full, got '{other}'"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityLevel {
    A,
    B,
    C,
}

impl MaturityLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// The fixed text shown with the level on the result panel.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::A => "Strong foundation – focus on excellence.",
            Self::B => "Good progress – a few key gaps to close.",
            Self::C => "Early stage – great opportunity ahead.",
        }
    }
}

impl Display for MaturityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed suggestion shown under every scored result.
#[must_use]
pub fn next_step_hint() -> &'static str {
    "Start with Video 1, then open the workbook."
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub points: u32,
    pub max_points: u32,
    pub level: MaturityLevel,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max_points == 0 {
            0.0
        } else {
            f64::from(self.points) / f64::from(self.max_points)
        }
    }
}

/// Scores an answer set against a questionnaire of `total_questions`.
///
/// Unanswered questions contribute zero points but stay in the denominator.
/// Level thresholds are inclusive: 70% of the maximum is an A, 40% a B,
/// anything below a C. The comparison cross-multiplies integers so the
/// boundaries are exact. An empty questionnaire scores C.
#[must_use]
pub fn score_answers(
    answers: &BTreeMap<String, AnswerLevel>,
    total_questions: usize,
) -> ScoreBreakdown {
    let points: u32 = answers.values().map(|a| a.points()).sum();
    let max_points = total_questions as u32 * POINTS_PER_QUESTION;
    let level = if max_points == 0 {
        MaturityLevel::C
    } else if u64::from(points) * 100 >= u64::from(max_points) * 70 {
        MaturityLevel::A
    } else if u64::from(points) * 100 >= u64::from(max_points) * 40 {
        MaturityLevel::B
    } else {
        MaturityLevel::C
    };
    ScoreBreakdown {
        points,
        max_points,
        level,
    }
}

/// Ephemeral per-page answer state. Created empty when an assessment opens,
/// mutated as the reader answers, discarded or reset on retake. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentResponse {
    answers: BTreeMap<String, AnswerLevel>,
    total_questions: usize,
}

impl AssessmentResponse {
    #[must_use]
    pub fn new(total_questions: usize) -> Self {
        Self {
            answers: BTreeMap::new(),
            total_questions,
        }
    }

    /// Records or replaces the answer for one question.
    pub fn record(&mut self, question_id: &str, level: AnswerLevel) {
        self.answers.insert(question_id.to_string(), level);
    }

    #[must_use]
    pub fn answer(&self, question_id: &str) -> Option<AnswerLevel> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<String, AnswerLevel> {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Submission gate used by callers; scoring itself tolerates partial
    /// answer sets.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.total_questions
    }

    /// Retake: drops every recorded answer, keeps the questionnaire size.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn score(&self) -> ScoreBreakdown {
        score_answers(&self.answers, self.total_questions)
    }
}
