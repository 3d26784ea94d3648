//! Per-user conversation session
//!
//! One session per user id, holding the active flow's payload (only
//! one flow at a time), the grade-picker origin marker, and the
//! activity timestamp used by the idle sweep.

use chrono::{DateTime, Utc};

use crate::models::{AlarmDraft, Grade};

/// A user's conversation state.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub active_flow: ActiveFlow,
    /// Which screen last showed the grade picker; decides whether a
    /// grade button starts an assessment or renders a study plan.
    pub grade_prompt: Option<GradePromptSource>,
    /// Updated on every inbound message; sessions idle beyond the
    /// store's timeout are reclaimed.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: i64, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            active_flow: ActiveFlow::Idle,
            grade_prompt: None,
            last_activity: now,
        }
    }

    pub fn flow_kind(&self) -> FlowKind {
        match self.active_flow {
            ActiveFlow::Idle => FlowKind::Idle,
            ActiveFlow::Assessment(_) => FlowKind::Assessment,
            ActiveFlow::StressTriage => FlowKind::StressTriage,
            ActiveFlow::AlarmWizard(_) => FlowKind::AlarmWizard,
        }
    }
}

/// The currently active flow and its payload.
#[derive(Debug, Clone)]
pub enum ActiveFlow {
    Idle,
    Assessment(AssessmentState),
    StressTriage,
    AlarmWizard(WizardState),
}

/// Payload-free discriminant of [`ActiveFlow`], used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Idle,
    Assessment,
    StressTriage,
    AlarmWizard,
}

/// Which screen last presented the grade picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradePromptSource {
    Assessment,
    Planner,
}

/// Assessment stepper state.
///
/// Invariant: `step <= questions.len()`; reaching the upper bound
/// triggers result computation, after which the payload is destroyed.
#[derive(Debug, Clone)]
pub struct AssessmentState {
    pub grade: Grade,
    pub questions: &'static [&'static str],
    pub step: usize,
    pub answers: Vec<u8>,
}

impl AssessmentState {
    pub fn new(grade: Grade, questions: &'static [&'static str]) -> Self {
        Self {
            grade,
            questions,
            step: 0,
            answers: Vec::new(),
        }
    }
}

/// Alarm wizard state: current step plus the collected draft.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: AlarmDraft,
}

/// The three wizard steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    ChooseType,
    ChooseTime,
    ChooseDays,
}
