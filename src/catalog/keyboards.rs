//! Reply-keyboard grids
//!
//! Keyboards are built as plain 2D label grids; the transport layer
//! maps them onto the platform's reply-keyboard markup.

use super::labels;

/// A 2D grid of button labels attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard(pub Vec<Vec<String>>);

impl Keyboard {
    pub fn new<R, L>(rows: R) -> Self
    where
        R: IntoIterator<Item = L>,
        L: IntoIterator<Item = &'static str>,
    {
        Keyboard(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

pub fn main_menu() -> Keyboard {
    Keyboard::new([
        vec![labels::BTN_ASSESSMENT, labels::BTN_PLANNER],
        vec![labels::BTN_ALARM, labels::BTN_WEEKLY_SCHEDULE],
        vec![labels::BTN_PROGRESS, labels::BTN_STRESS],
        vec![labels::BTN_COUNSELING, labels::BTN_HELP],
    ])
}

pub fn grade_picker() -> Keyboard {
    Keyboard::new([
        vec![
            labels::BTN_GRADE_SIX,
            labels::BTN_GRADE_SEVEN,
            labels::BTN_GRADE_EIGHT,
        ],
        vec![
            labels::BTN_GRADE_NINE,
            labels::BTN_GRADE_TEN,
            labels::BTN_GRADE_ELEVEN,
        ],
        vec![labels::BTN_GRADE_TWELVE, labels::BTN_BACK_TO_MENU],
    ])
}

pub fn assessment_answers() -> Keyboard {
    Keyboard::new([
        vec![
            labels::BTN_ANSWER_STRONG,
            labels::BTN_ANSWER_AVERAGE,
            labels::BTN_ANSWER_WEAK,
        ],
        vec![labels::BTN_BACK_TO_MENU],
    ])
}

pub fn alarm_menu() -> Keyboard {
    Keyboard::new([
        vec![labels::BTN_ALARM_SETUP, labels::BTN_STUDY_HABITS],
        vec![labels::BTN_BACK_TO_MENU],
    ])
}

pub fn alarm_type() -> Keyboard {
    Keyboard::new([
        vec![labels::BTN_ALARM_STUDY, labels::BTN_ALARM_BREAK],
        vec![labels::BTN_BACK],
    ])
}

pub fn alarm_time_presets() -> Keyboard {
    let [t1, t2, t3, t4, t5, t6] = labels::TIME_PRESETS;
    Keyboard::new([vec![t1, t2, t3], vec![t4, t5, t6], vec![labels::BTN_BACK]])
}

pub fn alarm_days() -> Keyboard {
    let [sat, sun, mon, tue, wed, thu, fri] = labels::WEEKDAYS;
    Keyboard::new([
        vec![sat, sun, mon],
        vec![tue, wed, thu],
        vec![fri, labels::BTN_ALL_DAYS, labels::BTN_CONFIRM],
        vec![labels::BTN_BACK],
    ])
}

pub fn stress_levels() -> Keyboard {
    Keyboard::new([
        vec![labels::BTN_STRESS_LOW, labels::BTN_STRESS_MODERATE],
        vec![labels::BTN_STRESS_HIGH, labels::BTN_STRESS_SEVERE],
        vec![labels::BTN_BACK_TO_MENU],
    ])
}
