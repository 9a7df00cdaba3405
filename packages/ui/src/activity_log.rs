use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// In-memory record of what happened during this run (logins, user changes,
/// failed requests). Shown in the admin shell and on the dashboard.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub const MAX_ENTRIES: usize = 200;

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: String) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.into(),
        });
        if self.entries.len() > Self::MAX_ENTRIES {
            let overflow = self.entries.len() - Self::MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn has_errors(&self) -> bool {
        self.count(LogLevel::Error) > 0
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Newest first; with `errors_only`, failed requests and rejected saves only.
    pub fn visible_entries(&self, errors_only: bool) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !errors_only || e.level == LogLevel::Error)
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message, current_time());
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
