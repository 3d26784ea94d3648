//! Semantic intents for the top-level menu vocabulary
//!
//! Inbound text is matched against stable intents instead of the
//! decorated labels scattered through handlers. Flow-internal choices
//! (answers, alarm types, weekdays) are parsed by their flows; this
//! enum covers the dispatcher's top-level routing table.

use crate::models::Grade;

use super::labels;

/// A recognized top-level command or menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The `/start` command.
    Start,
    /// Show the assessment grade picker.
    AssessmentMenu,
    /// Show the study-planner grade picker.
    PlannerMenu,
    /// Show the alarm system screen.
    AlarmMenu,
    /// Enter the alarm setup wizard.
    AlarmSetup,
    /// List the user's stored alarms.
    StudyHabits,
    /// Enter the stress triage flow.
    StressMenu,
    /// Progress tracking placeholder screen.
    ProgressTracking,
    /// Specialist counseling contact.
    Counseling,
    /// Help screen.
    Help,
    /// Universal return-to-menu token.
    ReturnToMenu,
    /// A grade picker button.
    Grade(Grade),
}

impl Intent {
    /// Parse raw inbound text into an intent, if it is part of the
    /// top-level vocabulary.
    ///
    /// The weekly-schedule menu button has no routing branch and is
    /// deliberately absent here; it falls through to the menu
    /// fallback.
    pub fn parse(text: &str) -> Option<Intent> {
        match text {
            "/start" => Some(Intent::Start),
            labels::BTN_ASSESSMENT => Some(Intent::AssessmentMenu),
            labels::BTN_PLANNER => Some(Intent::PlannerMenu),
            labels::BTN_ALARM => Some(Intent::AlarmMenu),
            labels::BTN_ALARM_SETUP => Some(Intent::AlarmSetup),
            labels::BTN_STUDY_HABITS => Some(Intent::StudyHabits),
            labels::BTN_STRESS => Some(Intent::StressMenu),
            labels::BTN_PROGRESS => Some(Intent::ProgressTracking),
            labels::BTN_COUNSELING => Some(Intent::Counseling),
            labels::BTN_HELP => Some(Intent::Help),
            labels::BTN_BACK_TO_MENU => Some(Intent::ReturnToMenu),
            other => Grade::from_button(other).map(Intent::Grade),
        }
    }
}
