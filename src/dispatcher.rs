//! Message dispatcher
//!
//! One entry point per inbound message. An active flow owns all input
//! for its user; only idle sessions consult the top-level menu
//! vocabulary. Transport details stay outside: the dispatcher works on
//! plain text in, replies out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::{keyboards, texts, Intent, Keyboard};
use crate::flows;
use crate::state::{FlowKind, GradePromptSource, SessionStore};
use crate::storage::{EventLog, ResultSink};

/// An inbound user message, reduced to what routing needs.
#[derive(Debug, Clone)]
pub struct Inbound {
    pub user_id: i64,
    pub first_name: String,
    pub text: String,
}

/// One outgoing message: text plus an optional reply keyboard.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Routes inbound messages to flows and menu screens.
pub struct Dispatcher {
    store: SessionStore,
    results: Arc<dyn ResultSink>,
    events: Arc<dyn EventLog>,
}

impl Dispatcher {
    pub fn new(
        store: SessionStore,
        results: Arc<dyn ResultSink>,
        events: Arc<dyn EventLog>,
    ) -> Self {
        Self {
            store,
            results,
            events,
        }
    }

    /// Process one message and produce the replies to deliver, in
    /// order. An empty vec means no reply is sent.
    pub fn handle(&mut self, inbound: &Inbound, now: DateTime<Utc>) -> Vec<Reply> {
        let user_id = inbound.user_id;
        info!(user_id = user_id, text = %inbound.text, "Handling message");

        let session = self.store.get_or_create(user_id, now);
        session.last_activity = now;
        let flow = session.flow_kind();

        match flow {
            FlowKind::Assessment => flows::assessment::handle_answer(
                &mut self.store,
                user_id,
                &inbound.text,
                self.results.as_ref(),
                self.events.as_ref(),
            ),
            FlowKind::StressTriage => flows::stress::handle_choice(
                &mut self.store,
                user_id,
                &inbound.first_name,
                &inbound.text,
            ),
            FlowKind::AlarmWizard => flows::alarm::handle_step(
                &mut self.store,
                user_id,
                &inbound.text,
                self.events.as_ref(),
            ),
            FlowKind::Idle => self.handle_menu(inbound),
        }
    }

    fn handle_menu(&mut self, inbound: &Inbound) -> Vec<Reply> {
        let user_id = inbound.user_id;
        let events = Arc::clone(&self.events);

        match Intent::parse(&inbound.text) {
            Some(Intent::Start) => {
                events.record("WELCOME_SHOWN", user_id, &inbound.first_name);
                vec![Reply::with_keyboard(
                    texts::welcome(&inbound.first_name),
                    keyboards::main_menu(),
                )]
            }
            Some(Intent::AssessmentMenu) => {
                events.record("ASSESSMENT_SHOWN", user_id, "");
                self.show_grade_picker(
                    user_id,
                    GradePromptSource::Assessment,
                    texts::ASSESSMENT_GRADE_PROMPT,
                )
            }
            Some(Intent::PlannerMenu) => {
                events.record("PLANNER_SHOWN", user_id, "");
                self.show_grade_picker(
                    user_id,
                    GradePromptSource::Planner,
                    texts::PLANNER_GRADE_PROMPT,
                )
            }
            Some(Intent::AlarmMenu) => {
                events.record("ALARM_SYSTEM", user_id, "Menu shown");
                vec![Reply::with_keyboard(
                    texts::ALARM_SYSTEM,
                    keyboards::alarm_menu(),
                )]
            }
            Some(Intent::AlarmSetup) => {
                flows::alarm::start_wizard(&mut self.store, user_id, events.as_ref())
            }
            Some(Intent::StudyHabits) => flows::alarm::show_alarms(&self.store, user_id),
            Some(Intent::StressMenu) => {
                flows::stress::start(&mut self.store, user_id, events.as_ref())
            }
            Some(Intent::ProgressTracking) => vec![Reply::with_keyboard(
                texts::PROGRESS_PLACEHOLDER,
                keyboards::main_menu(),
            )],
            Some(Intent::Counseling) => vec![Reply::with_keyboard(
                texts::counseling_contact(),
                keyboards::main_menu(),
            )],
            Some(Intent::Help) => vec![Reply::with_keyboard(
                texts::help_screen(),
                keyboards::main_menu(),
            )],
            Some(Intent::ReturnToMenu) => {
                self.store.remove(user_id);
                vec![Reply::with_keyboard(
                    texts::welcome(&inbound.first_name),
                    keyboards::main_menu(),
                )]
            }
            Some(Intent::Grade(grade)) => {
                // The marker set by the last grade-picker screen
                // decides what the grade means; without one, the
                // planner interpretation wins.
                let source = self
                    .store
                    .get_mut(user_id)
                    .and_then(|session| session.grade_prompt.take());
                match source {
                    Some(GradePromptSource::Assessment) => flows::assessment::start(
                        &mut self.store,
                        user_id,
                        grade,
                        events.as_ref(),
                    ),
                    Some(GradePromptSource::Planner) | None => {
                        flows::planner::plan_for(grade, user_id, events.as_ref())
                    }
                }
            }
            None => vec![Reply::with_keyboard(
                texts::MENU_FALLBACK,
                keyboards::main_menu(),
            )],
        }
    }

    fn show_grade_picker(
        &mut self,
        user_id: i64,
        source: GradePromptSource,
        prompt: &str,
    ) -> Vec<Reply> {
        if let Some(session) = self.store.get_mut(user_id) {
            session.grade_prompt = Some(source);
        }
        vec![Reply::with_keyboard(prompt, keyboards::grade_picker())]
    }

    /// Reclaim idle sessions; returns how many were removed.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        self.store.sweep(now)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
