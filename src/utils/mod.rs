//! Utility modules
//!
//! Common utilities used throughout the StudyBuddy application.

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{Result, StudyBuddyError};
