//! In-memory session store
//!
//! Owns the per-user sessions and the per-user alarm lists. Access is
//! single-threaded through the polling loop, so no locking is needed.
//! Alarm lists live outside the swept session map: a user's stored
//! alarms survive idle reclamation.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{Alarm, AlarmDraft};

use super::session::Session;

/// Store of all conversation sessions and stored alarms.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<i64, Session>,
    alarms: HashMap<i64, Vec<Alarm>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            alarms: HashMap::new(),
            idle_timeout,
        }
    }

    /// Fetch a user's session, creating a fresh idle one on first
    /// access. Never fails.
    pub fn get_or_create(&mut self, user_id: i64, now: DateTime<Utc>) -> &mut Session {
        self.sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(user_id, now))
    }

    pub fn get(&self, user_id: i64) -> Option<&Session> {
        self.sessions.get(&user_id)
    }

    pub fn get_mut(&mut self, user_id: i64) -> Option<&mut Session> {
        self.sessions.get_mut(&user_id)
    }

    pub fn remove(&mut self, user_id: i64) -> Option<Session> {
        self.sessions.remove(&user_id)
    }

    /// Remove every session idle for longer than the configured
    /// timeout. A session idle exactly as long as the timeout is kept.
    /// Returns the number of reclaimed sessions.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let timeout = self.idle_timeout;
        self.sessions
            .retain(|_, session| now - session.last_activity <= timeout);
        let removed = before - self.sessions.len();
        if removed > 0 {
            debug!(removed = removed, "Swept idle sessions");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Finalize a draft into the user's alarm list, assigning the next
    /// 1-based per-user id. Returns the stored alarm.
    pub fn append_alarm(&mut self, user_id: i64, draft: AlarmDraft) -> Alarm {
        let list = self.alarms.entry(user_id).or_default();
        let alarm = draft.into_alarm(list.len() as u32 + 1);
        list.push(alarm.clone());
        alarm
    }

    pub fn alarms(&self, user_id: i64) -> &[Alarm] {
        self.alarms.get(&user_id).map_or(&[], Vec::as_slice)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::seconds(7200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlarmKind;
    use crate::state::session::{ActiveFlow, FlowKind};

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut store = SessionStore::default();
        let now = Utc::now();
        store.get_or_create(1, now).active_flow = ActiveFlow::StressTriage;
        assert_eq!(store.get_or_create(1, now).flow_kind(), FlowKind::StressTriage);
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_sweep_boundary() {
        let mut store = SessionStore::default();
        let now = Utc::now();

        store.get_or_create(1, now - Duration::seconds(7200));
        store.get_or_create(2, now - Duration::seconds(7201));
        store.get_or_create(3, now);

        let removed = store.sweep(now);
        assert_eq!(removed, 1);
        assert!(store.get(1).is_some(), "exactly 7200s idle is kept");
        assert!(store.get(2).is_none(), "7201s idle is reclaimed");
        assert!(store.get(3).is_some());
    }

    #[test]
    fn test_sweep_does_not_touch_alarms() {
        let mut store = SessionStore::default();
        let now = Utc::now();
        store.get_or_create(1, now - Duration::seconds(9000));
        store.append_alarm(
            1,
            AlarmDraft {
                kind: Some(AlarmKind::Study),
                time: Some("08:00".to_string()),
                days: Vec::new(),
            },
        );

        store.sweep(now);
        assert!(store.get(1).is_none());
        assert_eq!(store.alarms(1).len(), 1);
    }

    #[test]
    fn test_alarm_ids_are_per_user_sequences() {
        let mut store = SessionStore::default();
        let draft = || AlarmDraft {
            kind: Some(AlarmKind::Study),
            time: Some("08:00".to_string()),
            days: Vec::new(),
        };

        assert_eq!(store.append_alarm(1, draft()).id, 1);
        assert_eq!(store.append_alarm(1, draft()).id, 2);
        assert_eq!(store.append_alarm(2, draft()).id, 1);
        assert_eq!(store.append_alarm(1, draft()).id, 3);
    }
}
