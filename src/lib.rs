//! StudyBuddy - Persian-language study companion bot for Telegram
//!
//! A menu-driven bot for students in grades six through twelve:
//! educational self-assessment, weekly study plans, a study alarm
//! wizard and stress triage, all driven by reply keyboards over a
//! single long-polling loop.

#![allow(non_snake_case)]

pub mod bot;
pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod flows;
pub mod models;
pub mod state;
pub mod storage;
pub mod utils;

pub use config::Settings;
pub use dispatcher::{Dispatcher, Inbound, Reply};
pub use state::SessionStore;
pub use utils::errors::{Result, StudyBuddyError};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
