//! Telegram transport
//!
//! Maps the dispatcher's plain replies onto Bot API calls and keeps
//! the long-poll bookkeeping. Everything conversation-shaped lives in
//! the dispatcher and the flows; this layer only moves messages.

use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ParseMode};

use crate::catalog::Keyboard;
use crate::dispatcher::Reply;
use crate::utils::errors::Result;

pub mod poller;

pub use poller::BotRuntime;

/// Deliver one reply to a chat, HTML-formatted, with its keyboard
/// attached when present.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let request = bot
        .send_message(chat_id, &reply.text)
        .parse_mode(ParseMode::Html);

    match &reply.keyboard {
        Some(keyboard) => request.reply_markup(keyboard_markup(keyboard)).await?,
        None => request.await?,
    };
    Ok(())
}

/// Map a label grid onto a resized reply keyboard.
fn keyboard_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows = keyboard
        .0
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new));
    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Tracks the highest processed update id. Telegram can redeliver
/// updates after a fetch error; redelivered ids are dropped instead of
/// being dispatched twice.
#[derive(Debug, Default)]
pub struct UpdateTracker {
    last: Option<u32>,
}

impl UpdateTracker {
    /// Returns true when the id has not been seen before, recording it
    /// as processed.
    pub fn accept(&mut self, id: u32) -> bool {
        if self.last.is_some_and(|last| id <= last) {
            return false;
        }
        self.last = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_accepts_increasing_ids() {
        let mut tracker = UpdateTracker::default();
        assert!(tracker.accept(10));
        assert!(tracker.accept(11));
        assert!(tracker.accept(15));
    }

    #[test]
    fn test_tracker_drops_replays() {
        let mut tracker = UpdateTracker::default();
        assert!(tracker.accept(10));
        assert!(!tracker.accept(10));
        assert!(!tracker.accept(9));
        assert!(tracker.accept(11));
    }

    #[test]
    fn test_keyboard_markup_preserves_grid_shape() {
        let keyboard = Keyboard::new([vec!["الف", "ب"], vec!["ج"]]);
        let markup = keyboard_markup(&keyboard);
        assert_eq!(markup.keyboard.len(), 2);
        assert_eq!(markup.keyboard[0].len(), 2);
        assert_eq!(markup.keyboard[1].len(), 1);
        assert!(markup.resize_keyboard);
    }
}
