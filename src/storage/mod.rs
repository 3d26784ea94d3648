//! Persistence and logging collaborators
//!
//! File-backed sinks for assessment results, domain events and
//! periodic backups. All of them are opaque to the flows: failures
//! never surface to the user.

pub mod backup;
pub mod events;
pub mod results;

pub use events::{EventLog, FileEventLog, NullEventLog};
pub use results::{CsvResultSink, ResultSink};
