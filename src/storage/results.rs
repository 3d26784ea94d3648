//! Assessment result persistence
//!
//! Completed assessments are appended to durable tabular storage, one
//! row per assessment. The file is created with a header on first
//! write; subsequent appends add rows only. Write failures are
//! reported to the caller, which logs and swallows them — the user
//! already received their result message.

use std::fs::OpenOptions;
use std::path::PathBuf;

use serde::Serialize;

use crate::models::AssessmentResult;
use crate::utils::errors::Result;

/// Persistence collaborator accepting completed assessment records.
pub trait ResultSink: Send + Sync {
    fn append(&self, record: &AssessmentResult) -> Result<()>;
}

/// Append-only CSV file sink.
#[derive(Debug, Clone)]
pub struct CsvResultSink {
    path: PathBuf,
}

impl CsvResultSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ResultSink for CsvResultSink {
    fn append(&self, record: &AssessmentResult) -> Result<()> {
        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(ResultRow::from(record))?;
        writer.flush()?;
        Ok(())
    }
}

/// Flat row shape written to the CSV file.
#[derive(Debug, Serialize)]
struct ResultRow {
    timestamp: String,
    user_id: i64,
    grade: String,
    total_score: u32,
    answers: String,
}

impl From<&AssessmentResult> for ResultRow {
    fn from(record: &AssessmentResult) -> Self {
        Self {
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            user_id: record.user_id,
            grade: record.grade.label().to_string(),
            total_score: record.total_score,
            answers: format!("{:?}", record.answers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;
    use chrono::Utc;

    fn sample(user_id: i64) -> AssessmentResult {
        AssessmentResult {
            timestamp: Utc::now(),
            user_id,
            grade: Grade::Nine,
            total_score: 6,
            answers: vec![2, 1, 2, 0, 1],
        }
    }

    #[test]
    fn test_creates_file_with_header_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvResultSink::new(dir.path().join("results.csv"));

        sink.append(&sample(1)).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("timestamp,user_id,grade,total_score,answers")
        );
        let row = lines.next().unwrap();
        assert!(row.contains("نهم"));
        assert!(row.contains("\"[2, 1, 2, 0, 1]\""));
    }

    #[test]
    fn test_appends_without_duplicate_header() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvResultSink::new(dir.path().join("results.csv"));

        sink.append(&sample(1)).unwrap();
        sink.append(&sample(2)).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let headers = content.lines().filter(|l| l.starts_with("timestamp")).count();
        assert_eq!(headers, 1);
        assert_eq!(content.lines().count(), 3);
    }
}
