//! Long-polling runtime
//!
//! Single-threaded getUpdates loop: fetch a batch, dispatch each
//! message in order, then run the periodic maintenance (idle-session
//! sweep and results backup) between batches. Updates for different
//! users still go through one loop; per-user ordering follows update
//! ids.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::{Update, UpdateKind};
use tracing::{error, info, warn};

use crate::catalog::{keyboards, texts};
use crate::config::Settings;
use crate::dispatcher::{Dispatcher, Inbound, Reply};
use crate::storage::{backup, EventLog};
use crate::utils::errors::Result;
use crate::utils::helpers::preview;

use super::{send_reply, UpdateTracker};

/// The polling loop and its collaborators.
pub struct BotRuntime {
    bot: Bot,
    dispatcher: Dispatcher,
    events: Arc<dyn EventLog>,
    settings: Settings,
}

impl BotRuntime {
    pub fn new(
        bot: Bot,
        dispatcher: Dispatcher,
        events: Arc<dyn EventLog>,
        settings: Settings,
    ) -> Self {
        Self {
            bot,
            dispatcher,
            events,
            settings,
        }
    }

    /// Run the polling loop. Only returns on an error the loop itself
    /// cannot absorb; transient fetch and send failures are logged and
    /// retried in place.
    pub async fn run(mut self) -> Result<()> {
        info!("Bot polling loop started");

        let mut offset: Option<i32> = None;
        let mut tracker = UpdateTracker::default();
        let mut last_sweep = Instant::now();
        let mut last_backup = Instant::now();

        loop {
            match self.fetch_updates(offset).await {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.id.as_offset());
                        if !tracker.accept(update.id.0) {
                            continue;
                        }
                        self.process_update(update).await;
                    }
                }
                Err(err) => {
                    error!(error = %err, "Failed to fetch updates");
                    self.events.record("FETCH_ERROR", 0, &err.to_string());
                    tokio::time::sleep(Duration::from_secs(3)).await;
                }
            }

            self.run_maintenance(&mut last_sweep, &mut last_backup);
        }
    }

    async fn fetch_updates(&self, offset: Option<i32>) -> Result<Vec<Update>> {
        let mut request = self
            .bot
            .get_updates()
            .timeout(self.settings.bot.poll_timeout_secs);
        if let Some(offset) = offset {
            request = request.offset(offset);
        }
        Ok(request.await?)
    }

    async fn process_update(&mut self, update: Update) {
        let UpdateKind::Message(message) = update.kind else {
            return;
        };
        let Some(text) = message.text() else {
            return;
        };

        let chat_id = message.chat.id;
        let user_id = message
            .from
            .as_ref()
            .map_or(chat_id.0, |user| user.id.0 as i64);
        let first_name = message
            .from
            .as_ref()
            .map_or_else(|| texts::FALLBACK_NAME.to_string(), |user| user.first_name.clone());

        let inbound = Inbound {
            user_id,
            first_name,
            text: text.to_string(),
        };
        let replies = self.dispatcher.handle(&inbound, Utc::now());
        for reply in replies {
            self.deliver(chat_id, user_id, &reply).await;
        }
    }

    /// Send one reply, with a single apology retry on failure. A
    /// failed retry is dropped; the conversation state has already
    /// advanced and the next inbound message re-syncs the user.
    async fn deliver(&self, chat_id: ChatId, user_id: i64, reply: &Reply) {
        match send_reply(&self.bot, chat_id, reply).await {
            Ok(()) => {
                self.events
                    .record("MESSAGE_SENT", user_id, &preview(&reply.text, 30));
            }
            Err(err) => {
                warn!(user_id = user_id, error = %err, "Failed to send message");
                self.events.record("SEND_ERROR", user_id, &err.to_string());

                tokio::time::sleep(Duration::from_secs(1)).await;
                let apology =
                    Reply::with_keyboard(texts::SEND_RETRY_APOLOGY, keyboards::main_menu());
                if let Err(err) = send_reply(&self.bot, chat_id, &apology).await {
                    warn!(user_id = user_id, error = %err, "Apology retry failed");
                }
            }
        }
    }

    /// Coarse wall-clock maintenance, sampled between update batches.
    fn run_maintenance(&mut self, last_sweep: &mut Instant, last_backup: &mut Instant) {
        if last_sweep.elapsed() >= Duration::from_secs(self.settings.session.sweep_interval_secs) {
            *last_sweep = Instant::now();
            let removed = self.dispatcher.sweep(Utc::now());
            if removed > 0 {
                info!(removed = removed, "Reclaimed idle sessions");
            }
        }

        if last_backup.elapsed() >= Duration::from_secs(self.settings.storage.backup_interval_secs)
        {
            *last_backup = Instant::now();
            let result = backup::backup_results(
                Path::new(&self.settings.storage.results_path),
                Path::new(&self.settings.storage.backup_dir),
            );
            match result {
                Ok(Some(target)) => info!(target = %target.display(), "Results backed up"),
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, "Backup failed");
                    self.events.record("BACKUP_ERROR", 0, &err.to_string());
                }
            }
        }
    }
}
