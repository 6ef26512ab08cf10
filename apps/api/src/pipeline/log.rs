//! Conversation Log — ordered append-only record of every stage's input and
//! output. Written throughout a session, rendered for display, optionally
//! flushed to a file at the end. Never read back programmatically.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub text: String,
}

impl LogEntry {
    fn rendered(&self) -> String {
        format!("({}) {}", self.at.format(TIMESTAMP_FORMAT), self.text)
    }
}

/// Append-only conversation log. No truncation, no size bound; the owning
/// session serializes all writers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationLog {
    entries: Vec<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Utc::now(),
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins all rendered entries with newlines.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::rendered)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the rendered log as one UTF-8 file in a single call.
    /// No partial-write recovery.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }
}
