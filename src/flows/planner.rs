//! Study plan rendering
//!
//! Stateless: a grade goes in, a canned weekly plan comes out. The
//! grade picker marker deciding whether a grade button lands here or
//! in the assessment lives in the dispatcher.

use crate::catalog::{keyboards, texts};
use crate::dispatcher::Reply;
use crate::models::Grade;
use crate::storage::EventLog;

/// Render the weekly study plan for a grade.
pub fn plan_for(grade: Grade, user_id: i64, events: &dyn EventLog) -> Vec<Reply> {
    events.record(
        "DETAILED_PLAN_CREATED",
        user_id,
        &format!("Grade: {}", grade.label()),
    );

    vec![Reply::with_keyboard(
        texts::study_plan(grade),
        keyboards::main_menu(),
    )]
}
