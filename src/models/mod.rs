//! Domain models
//!
//! Grades, alarms and assessment records.

pub mod alarm;
pub mod assessment;
pub mod grade;

pub use alarm::{Alarm, AlarmDraft, AlarmKind, ALL_DAYS_SENTINEL};
pub use assessment::{AnswerChoice, AssessmentResult, AssessmentTier};
pub use grade::Grade;
