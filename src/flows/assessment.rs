//! Educational self-assessment flow
//!
//! Stepper over a grade-specific five-question set. Answers are fixed
//! three-way choices scored 0..2; completion classifies the total into
//! a tier, persists the record and tears the session down.

use chrono::Utc;
use tracing::warn;

use crate::catalog::{keyboards, labels, texts};
use crate::dispatcher::Reply;
use crate::models::{AnswerChoice, AssessmentResult, AssessmentTier, Grade};
use crate::state::{ActiveFlow, AssessmentState, SessionStore};
use crate::storage::{EventLog, ResultSink};

/// Start the assessment for a grade: install the stepper state and
/// send the intro plus the first question.
pub fn start(
    store: &mut SessionStore,
    user_id: i64,
    grade: Grade,
    events: &dyn EventLog,
) -> Vec<Reply> {
    events.record(
        "ASSESSMENT_STARTED",
        user_id,
        &format!("Grade: {}", grade.label()),
    );

    let questions = texts::questions_for(grade);
    let state = AssessmentState::new(grade, questions);

    let intro = Reply::with_keyboard(
        texts::assessment_intro(grade, questions.len()),
        keyboards::assessment_answers(),
    );
    let first_question = question_reply(&state);

    let session = store.get_or_create(user_id, Utc::now());
    session.active_flow = ActiveFlow::Assessment(state);
    session.grade_prompt = None;

    vec![intro, first_question]
}

/// Handle one inbound message while the assessment is active.
pub fn handle_answer(
    store: &mut SessionStore,
    user_id: i64,
    text: &str,
    results: &dyn ResultSink,
    events: &dyn EventLog,
) -> Vec<Reply> {
    events.record("ASSESSMENT_ANSWER", user_id, &format!("Answer: {text}"));

    if text == labels::BTN_BACK_TO_MENU {
        // In-progress answers are discarded; there is no partial save.
        store.remove(user_id);
        return vec![Reply::with_keyboard(
            texts::BACK_TO_MAIN_MENU,
            keyboards::main_menu(),
        )];
    }

    let Some(session) = store.get_mut(user_id) else {
        return Vec::new();
    };
    let ActiveFlow::Assessment(state) = &mut session.active_flow else {
        return Vec::new();
    };

    let Some(choice) = AnswerChoice::parse(text) else {
        // Unrecognized input at a question step is a silent no-op:
        // the session stays at the same step awaiting a valid choice.
        return Vec::new();
    };

    state.answers.push(choice.score());
    state.step += 1;

    if state.step < state.questions.len() {
        vec![question_reply(state)]
    } else {
        complete(store, user_id, results, events)
    }
}

fn question_reply(state: &AssessmentState) -> Reply {
    Reply::with_keyboard(
        texts::assessment_question(state.step, state.questions.len(), state.questions[state.step]),
        keyboards::assessment_answers(),
    )
}

/// Compute and deliver the result, persist it, and destroy the
/// session. The result message is built before the write is attempted,
/// so a persistence failure never affects the user-visible flow.
fn complete(
    store: &mut SessionStore,
    user_id: i64,
    results: &dyn ResultSink,
    events: &dyn EventLog,
) -> Vec<Reply> {
    events.record("ASSESSMENT_COMPLETED", user_id, "");

    let Some(session) = store.remove(user_id) else {
        return Vec::new();
    };
    let ActiveFlow::Assessment(state) = session.active_flow else {
        return Vec::new();
    };

    let total: u32 = state.answers.iter().map(|&score| u32::from(score)).sum();
    let max = state.answers.len() as u32 * 2;
    let tier = AssessmentTier::classify(total, max);

    let reply = Reply::with_keyboard(
        texts::assessment_result(state.grade, total, max, tier),
        keyboards::main_menu(),
    );

    let record = AssessmentResult {
        timestamp: Utc::now(),
        user_id,
        grade: state.grade,
        total_score: total,
        answers: state.answers,
    };
    match results.append(&record) {
        Ok(()) => events.record("DATA_SAVED", user_id, "Assessment results saved"),
        Err(err) => {
            warn!(user_id = user_id, error = %err, "Failed to persist assessment result");
            events.record("SAVE_ERROR", user_id, &err.to_string());
        }
    }

    vec![reply]
}
