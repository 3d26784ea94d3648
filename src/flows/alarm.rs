//! Study alarm wizard
//!
//! Three-step wizard collecting alarm type, time and active days into
//! a draft, confirmed into the user's stored alarm list. Alarms are
//! preference records only; nothing fires them.

use chrono::NaiveTime;

use crate::catalog::{keyboards, labels, texts};
use crate::dispatcher::Reply;
use crate::models::AlarmKind;
use crate::state::{ActiveFlow, SessionStore, WizardState, WizardStep};
use crate::storage::EventLog;
use crate::utils::helpers::normalize_digits;

/// Enter the wizard at the type-selection step.
pub fn start_wizard(store: &mut SessionStore, user_id: i64, events: &dyn EventLog) -> Vec<Reply> {
    events.record("ALARM_SYSTEM", user_id, "Setup wizard started");

    let session = store.get_or_create(user_id, chrono::Utc::now());
    session.active_flow = ActiveFlow::AlarmWizard(WizardState::default());

    vec![Reply::with_keyboard(
        texts::ALARM_TYPE_PROMPT,
        keyboards::alarm_type(),
    )]
}

/// Handle one inbound message while the wizard is active.
pub fn handle_step(
    store: &mut SessionStore,
    user_id: i64,
    text: &str,
    events: &dyn EventLog,
) -> Vec<Reply> {
    if text == labels::BTN_BACK {
        // Back abandons the draft and returns to the alarm submenu.
        if let Some(session) = store.get_mut(user_id) {
            session.active_flow = ActiveFlow::Idle;
        }
        return vec![Reply::with_keyboard(
            texts::ALARM_SYSTEM,
            keyboards::alarm_menu(),
        )];
    }
    if text == labels::BTN_BACK_TO_MENU {
        store.remove(user_id);
        return vec![Reply::with_keyboard(
            texts::BACK_TO_MAIN_MENU,
            keyboards::main_menu(),
        )];
    }

    let Some(session) = store.get_mut(user_id) else {
        return Vec::new();
    };
    let ActiveFlow::AlarmWizard(state) = &mut session.active_flow else {
        return Vec::new();
    };

    match state.step {
        WizardStep::ChooseType => match text {
            labels::BTN_ALARM_STUDY => advance_to_time(state, AlarmKind::Study),
            labels::BTN_ALARM_BREAK => advance_to_time(state, AlarmKind::Break),
            _ => vec![Reply::with_keyboard(
                texts::CHOOSE_FROM_OPTIONS,
                keyboards::alarm_type(),
            )],
        },
        WizardStep::ChooseTime => {
            // Preset buttons carry Persian digits; typed times may too.
            let normalized = normalize_digits(text);
            if NaiveTime::parse_from_str(&normalized, "%H:%M").is_ok() {
                state.draft.time = Some(normalized);
                state.step = WizardStep::ChooseDays;
                vec![Reply::with_keyboard(
                    texts::ALARM_DAYS_PROMPT,
                    keyboards::alarm_days(),
                )]
            } else {
                vec![Reply::with_keyboard(
                    texts::ALARM_INVALID_TIME,
                    keyboards::alarm_time_presets(),
                )]
            }
        }
        WizardStep::ChooseDays => {
            if text == labels::BTN_CONFIRM {
                let draft = std::mem::take(&mut state.draft);
                session.active_flow = ActiveFlow::Idle;
                let alarm = store.append_alarm(user_id, draft);
                events.record(
                    "ALARM_SYSTEM",
                    user_id,
                    &format!("Alarm saved: {} at {}", alarm.kind.as_str(), alarm.time),
                );
                return vec![Reply::with_keyboard(
                    texts::alarm_saved(&alarm),
                    keyboards::main_menu(),
                )];
            }

            // Only plain weekday labels toggle in; duplicates and
            // anything else (including the all-days button) are
            // ignored without a reply.
            let is_weekday = labels::WEEKDAYS.contains(&text);
            if is_weekday && !state.draft.days.iter().any(|d| d == text) {
                state.draft.days.push(text.to_string());
                vec![Reply::with_keyboard(
                    texts::alarm_days_ack(&state.draft.days),
                    keyboards::alarm_days(),
                )]
            } else {
                Vec::new()
            }
        }
    }
}

fn advance_to_time(state: &mut WizardState, kind: AlarmKind) -> Vec<Reply> {
    state.draft.kind = Some(kind);
    state.step = WizardStep::ChooseTime;
    vec![Reply::with_keyboard(
        texts::ALARM_TIME_PROMPT,
        keyboards::alarm_time_presets(),
    )]
}

/// Render the user's stored alarms, or the empty-list notice.
pub fn show_alarms(store: &SessionStore, user_id: i64) -> Vec<Reply> {
    let alarms = store.alarms(user_id);
    let text = if alarms.is_empty() {
        texts::NO_ALARMS.to_string()
    } else {
        texts::alarm_list(alarms)
    };
    vec![Reply::with_keyboard(text, keyboards::main_menu())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_DAYS_SENTINEL;
    use crate::state::FlowKind;
    use crate::storage::NullEventLog;

    fn step(store: &mut SessionStore, text: &str) -> Vec<Reply> {
        handle_step(store, 1, text, &NullEventLog)
    }

    #[test]
    fn test_full_wizard_journey() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);

        step(&mut store, "📚 آلارم مطالعه");
        step(&mut store, "۰۸:۰۰");
        step(&mut store, "شنبه");
        step(&mut store, "یکشنبه");
        let replies = step(&mut store, "✅ تایید");

        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("آلارم با موفقیت تنظیم شد"));

        let alarms = store.alarms(1);
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].id, 1);
        assert_eq!(alarms[0].kind, AlarmKind::Study);
        assert_eq!(alarms[0].time, "08:00");
        assert_eq!(alarms[0].days, vec!["شنبه", "یکشنبه"]);
        assert!(alarms[0].active);

        // The wizard ends in an idle session, not a destroyed one.
        assert_eq!(store.get(1).unwrap().flow_kind(), FlowKind::Idle);
    }

    #[test]
    fn test_invalid_time_stays_at_time_step() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);
        step(&mut store, "☕ آلارم استراحت");

        let replies = step(&mut store, "25:99");
        assert_eq!(replies[0].text, texts::ALARM_INVALID_TIME);

        // Still at the time step: a valid time now advances.
        let replies = step(&mut store, "14:00");
        assert_eq!(replies[0].text, texts::ALARM_DAYS_PROMPT);
    }

    #[test]
    fn test_confirm_without_days_stores_sentinel() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);
        step(&mut store, "📚 آلارم مطالعه");
        step(&mut store, "۰۷:۰۰");
        step(&mut store, "✅ تایید");

        assert_eq!(store.alarms(1)[0].days, vec![ALL_DAYS_SENTINEL]);
    }

    #[test]
    fn test_duplicate_and_unknown_days_are_ignored() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);
        step(&mut store, "📚 آلارم مطالعه");
        step(&mut store, "09:00");

        assert!(!step(&mut store, "جمعه").is_empty());
        assert!(step(&mut store, "جمعه").is_empty(), "duplicate day");
        assert!(step(&mut store, "🎯 همه روزها").is_empty(), "not a weekday label");
        assert!(step(&mut store, "سقایه").is_empty(), "junk input");

        step(&mut store, "✅ تایید");
        assert_eq!(store.alarms(1)[0].days, vec!["جمعه"]);
    }

    #[test]
    fn test_back_returns_to_alarm_submenu() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);
        step(&mut store, "📚 آلارم مطالعه");

        let replies = step(&mut store, "🔙 بازگشت");
        assert_eq!(replies[0].text, texts::ALARM_SYSTEM);
        assert_eq!(store.get(1).unwrap().flow_kind(), FlowKind::Idle);
        assert!(store.alarms(1).is_empty());
    }

    #[test]
    fn test_back_to_menu_destroys_session() {
        let mut store = SessionStore::default();
        start_wizard(&mut store, 1, &NullEventLog);

        let replies = step(&mut store, "🔙 بازگشت به منو");
        assert!(replies[0].keyboard.is_some());
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_show_alarms_empty_and_populated() {
        let mut store = SessionStore::default();
        let replies = show_alarms(&store, 1);
        assert_eq!(replies[0].text, texts::NO_ALARMS);

        start_wizard(&mut store, 1, &NullEventLog);
        step(&mut store, "☕ آلارم استراحت");
        step(&mut store, "18:00");
        step(&mut store, "✅ تایید");

        let replies = show_alarms(&store, 1);
        assert!(replies[0].text.contains("break - 18:00"));
    }
}
