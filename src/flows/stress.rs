//! Stress triage flow
//!
//! Single-question triage: the user picks one of four stress levels
//! and receives a canned response. The flow clears after one choice;
//! there is no re-prompt loop.

use crate::catalog::{keyboards, labels, texts};
use crate::dispatcher::Reply;
use crate::state::{ActiveFlow, SessionStore};
use crate::storage::EventLog;

/// Enter the triage, showing the level prompt.
pub fn start(store: &mut SessionStore, user_id: i64, events: &dyn EventLog) -> Vec<Reply> {
    events.record("STRESS_MANAGEMENT", user_id, "Triage shown");

    let session = store.get_or_create(user_id, chrono::Utc::now());
    session.active_flow = ActiveFlow::StressTriage;

    vec![Reply::with_keyboard(
        texts::STRESS_PROMPT,
        keyboards::stress_levels(),
    )]
}

/// Handle the user's level choice. Whatever they send, recognized or
/// not, the triage is over afterwards.
pub fn handle_choice(
    store: &mut SessionStore,
    user_id: i64,
    first_name: &str,
    text: &str,
) -> Vec<Reply> {
    if text == labels::BTN_BACK_TO_MENU {
        store.remove(user_id);
        return vec![Reply::with_keyboard(
            texts::welcome(first_name),
            keyboards::main_menu(),
        )];
    }

    if let Some(session) = store.get_mut(user_id) {
        session.active_flow = ActiveFlow::Idle;
    }

    let response = match text {
        labels::BTN_STRESS_LOW => texts::STRESS_LOW_RESPONSE.to_string(),
        labels::BTN_STRESS_MODERATE => texts::STRESS_MODERATE_RESPONSE.to_string(),
        labels::BTN_STRESS_HIGH => texts::stress_high_response(),
        labels::BTN_STRESS_SEVERE => texts::STRESS_SEVERE_RESPONSE.to_string(),
        _ => texts::CHOOSE_FROM_OPTIONS.to_string(),
    };

    vec![Reply::with_keyboard(response, keyboards::main_menu())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FlowKind;
    use crate::storage::NullEventLog;

    #[test]
    fn test_triage_is_one_shot() {
        let mut store = SessionStore::default();
        start(&mut store, 1, &NullEventLog);

        let replies = handle_choice(&mut store, 1, "علی", "🟡 متوسط");
        assert_eq!(replies[0].text, texts::STRESS_MODERATE_RESPONSE);
        assert_eq!(store.get(1).unwrap().flow_kind(), FlowKind::Idle);
    }

    #[test]
    fn test_high_level_refers_to_counselor() {
        let mut store = SessionStore::default();
        start(&mut store, 1, &NullEventLog);

        let replies = handle_choice(&mut store, 1, "علی", "🟠 زیاد");
        assert!(replies[0].text.contains(labels::COUNSELING_PHONE));
    }

    #[test]
    fn test_unknown_input_still_clears_flow() {
        let mut store = SessionStore::default();
        start(&mut store, 1, &NullEventLog);

        let replies = handle_choice(&mut store, 1, "علی", "نمی‌دانم");
        assert_eq!(replies[0].text, texts::CHOOSE_FROM_OPTIONS);
        assert_eq!(store.get(1).unwrap().flow_kind(), FlowKind::Idle);
    }

    #[test]
    fn test_back_to_menu_destroys_session() {
        let mut store = SessionStore::default();
        start(&mut store, 1, &NullEventLog);

        let replies = handle_choice(&mut store, 1, "علی", "🔙 بازگشت به منو");
        assert!(replies[0].text.contains("علی"));
        assert!(store.get(1).is_none());
    }
}
