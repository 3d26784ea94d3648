//! StudyBuddy bot entry point

use std::sync::Arc;

use teloxide::Bot;
use tracing::info;

use StudyBuddy::{
    bot::BotRuntime,
    config::Settings,
    dispatcher::Dispatcher,
    state::SessionStore,
    storage::{CsvResultSink, FileEventLog},
    utils::logging::init_logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    settings.validate()?;

    let _guard = init_logging(&settings.logging)?;
    info!("Starting {} v{}", StudyBuddy::NAME, StudyBuddy::VERSION);

    let events = Arc::new(FileEventLog::new(&settings.storage.event_log_path));
    let results = Arc::new(CsvResultSink::new(&settings.storage.results_path));
    let store = SessionStore::new(chrono::Duration::seconds(
        settings.session.idle_timeout_secs as i64,
    ));
    let dispatcher = Dispatcher::new(store, results, events.clone());

    let bot = Bot::new(settings.bot.token.clone());
    let runtime = BotRuntime::new(bot, dispatcher, events, settings);
    runtime.run().await?;

    Ok(())
}
