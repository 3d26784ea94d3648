//! Assessment scoring model
//!
//! Fixed-choice answers, the tier classification and the persisted
//! result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Grade;
use crate::catalog::labels;

/// One of the three fixed answer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerChoice {
    Weak,
    Average,
    Strong,
}

impl AnswerChoice {
    /// Parse an answer button label; anything else is not an answer.
    pub fn parse(text: &str) -> Option<AnswerChoice> {
        match text {
            labels::BTN_ANSWER_STRONG => Some(AnswerChoice::Strong),
            labels::BTN_ANSWER_AVERAGE => Some(AnswerChoice::Average),
            labels::BTN_ANSWER_WEAK => Some(AnswerChoice::Weak),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        match self {
            AnswerChoice::Weak => 0,
            AnswerChoice::Average => 1,
            AnswerChoice::Strong => 2,
        }
    }
}

/// Classification tier for a completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentTier {
    Excellent,
    Acceptable,
    NeedsAttention,
}

impl AssessmentTier {
    /// Classify a total score against the maximum.
    ///
    /// Boundaries are inclusive: `total/max >= 0.8` is excellent and
    /// `>= 0.6` acceptable. Integer arithmetic keeps the comparison
    /// exact at the boundaries.
    pub fn classify(total: u32, max: u32) -> AssessmentTier {
        if total * 10 >= max * 8 {
            AssessmentTier::Excellent
        } else if total * 10 >= max * 6 {
            AssessmentTier::Acceptable
        } else {
            AssessmentTier::NeedsAttention
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            AssessmentTier::Excellent => "🟢 وضعیت عالی",
            AssessmentTier::Acceptable => "🟡 وضعیت قابل قبول",
            AssessmentTier::NeedsAttention => "🔴 نیاز به توجه فوری",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            AssessmentTier::Excellent => "شما در مسیر درستی قرار دارید. ادامه دهید!",
            AssessmentTier::Acceptable => "نیاز به بهبود دارید. برنامه‌ریزی بهتری نیاز است.",
            AssessmentTier::NeedsAttention => "وضعیت بحرانی! نیاز به مشاوره تخصصی دارید.",
        }
    }
}

/// Completed assessment record, handed to the persistence sink and not
/// retained in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub grade: Grade,
    pub total_score: u32,
    pub answers: Vec<u8>,
}
