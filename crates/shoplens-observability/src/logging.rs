//! Search-scoped structured logging.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry scoped to one search.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Search sequence number for correlation.
    pub search: u64,
    /// Query text the search was started with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] search#{} {}", self.level, self.search, self.message);
        if !self.fields.is_empty() {
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(" | ");
            s.push_str(&fields.join(" "));
        }
        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON format, for log aggregation.
    #[default]
    Json,
    /// Human-readable format, for development.
    Human,
}

/// Diagnostic channel for one search: every entry carries the search
/// sequence number and query text so superseded and active searches can be
/// told apart in the logs.
#[derive(Debug, Clone)]
pub struct SearchLogger {
    search: u64,
    query: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
}

impl SearchLogger {
    /// Create a logger for one search generation.
    pub fn new(search: u64) -> Self {
        Self {
            search,
            query: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Attach the query text.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the minimum level emitted.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Log with additional string fields.
    pub fn log_with(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
            .collect();
        self.log(level, message, fields);
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }
        let entry = LogEntry {
            level,
            message: message.to_string(),
            search: self.search,
            query: self.query.clone(),
            fields,
        };
        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        // Spin captures stderr.
        eprintln!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, fields: &[(&str, &str)]) -> LogEntry {
        LogEntry {
            level,
            message: "stream opened".to_string(),
            search: 3,
            query: Some("red running shoes".to_string()),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                .collect(),
        }
    }

    #[test]
    fn test_json_entry_carries_search_and_query() {
        let json = entry(LogLevel::Info, &[]).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["search"], 3);
        assert_eq!(value["query"], "red running shoes");
    }

    #[test]
    fn test_fields_flattened_into_json() {
        let json = entry(LogLevel::Error, &[("chunk", "products")]).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["chunk"], "products");
    }

    #[test]
    fn test_human_format() {
        let line = entry(LogLevel::Warn, &[("dropped", "1")]).to_human();
        assert!(line.starts_with("[WARN] search#3 stream opened"));
        assert!(line.contains("dropped=\"1\""));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
