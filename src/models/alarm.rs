//! Alarm records
//!
//! Alarms are stored preference records: they are collected by the
//! alarm wizard and listed back to the user, but never scheduled or
//! fired.

use serde::{Deserialize, Serialize};

/// Day-selection sentinel stored when the user confirms without
/// picking any weekday.
pub const ALL_DAYS_SENTINEL: &str = "all";

/// Kind of alarm the user sets up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmKind {
    Study,
    Break,
}

impl AlarmKind {
    /// Stable wire/display token, as shown in the saved-alarm summary.
    pub fn as_str(self) -> &'static str {
        match self {
            AlarmKind::Study => "study",
            AlarmKind::Break => "break",
        }
    }
}

/// A saved alarm, owned by a user's per-user alarm list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    /// 1-based sequence number, unique within the owning user.
    pub id: u32,
    pub kind: AlarmKind,
    /// 24-hour `HH:MM` time.
    pub time: String,
    /// Weekday labels in insertion order, or the `all` sentinel.
    pub days: Vec<String>,
    /// Always true on creation; never toggled in this scope.
    pub active: bool,
}

/// In-progress wizard draft. Only the fields for steps already passed
/// are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmDraft {
    pub kind: Option<AlarmKind>,
    pub time: Option<String>,
    pub days: Vec<String>,
}

impl AlarmDraft {
    /// Finalize the draft into an alarm with the given per-user id.
    ///
    /// Missing fields fall back to the study kind, 08:00 and the
    /// all-days sentinel; the wizard steps normally guarantee the
    /// first two are set before confirmation is reachable.
    pub fn into_alarm(self, id: u32) -> Alarm {
        let days = if self.days.is_empty() {
            vec![ALL_DAYS_SENTINEL.to_string()]
        } else {
            self.days
        };

        Alarm {
            id,
            kind: self.kind.unwrap_or(AlarmKind::Study),
            time: self.time.unwrap_or_else(|| "08:00".to_string()),
            days,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_finalization() {
        let draft = AlarmDraft {
            kind: Some(AlarmKind::Break),
            time: Some("16:30".to_string()),
            days: vec!["جمعه".to_string()],
        };
        let alarm = draft.into_alarm(3);
        assert_eq!(alarm.id, 3);
        assert_eq!(alarm.kind, AlarmKind::Break);
        assert_eq!(alarm.time, "16:30");
        assert_eq!(alarm.days, vec!["جمعه"]);
        assert!(alarm.active);
    }

    #[test]
    fn test_empty_day_selection_stores_sentinel() {
        let alarm = AlarmDraft {
            kind: Some(AlarmKind::Study),
            time: Some("07:00".to_string()),
            days: Vec::new(),
        }
        .into_alarm(1);
        assert_eq!(alarm.days, vec![ALL_DAYS_SENTINEL]);
    }
}
