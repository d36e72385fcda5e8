//! Diagnostic sinks.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Trace level.
    Trace = 0,
    /// Debug level.
    Debug = 1,
    /// Info level.
    Info = 2,
    /// Warning level.
    Warn = 3,
    /// Error level.
    Error = 4,
    /// Off (no logging).
    Off = 5,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

impl From<LogLevel> for tracing::level_filters::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::level_filters::LevelFilter::TRACE,
            LogLevel::Debug => tracing::level_filters::LevelFilter::DEBUG,
            LogLevel::Info => tracing::level_filters::LevelFilter::INFO,
            LogLevel::Warn => tracing::level_filters::LevelFilter::WARN,
            LogLevel::Error => tracing::level_filters::LevelFilter::ERROR,
            LogLevel::Off => tracing::level_filters::LevelFilter::OFF,
        }
    }
}

/// Logging configuration for [`ConsoleLogger`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Include timestamps.
    pub include_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            include_timestamps: true,
        }
    }
}

impl LogConfig {
    /// Creates a new log configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Omits timestamps from output.
    pub fn without_timestamps(mut self) -> Self {
        self.include_timestamps = false;
        self
    }
}

/// Structured key/value pairs attached to an event.
pub type Fields<'a> = &'a [(&'a str, String)];

/// Leveled structured logging capability.
///
/// Implementations must tolerate concurrent calls; one logger is shared by
/// every transport configured with it.
pub trait Logger: Send + Sync {
    /// Logs a message with attached fields at the specified level.
    fn log(&self, level: LogLevel, message: &str, fields: Fields<'_>);

    /// Logs at debug level.
    fn debug(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Debug, message, fields);
    }

    /// Logs at info level.
    fn info(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Info, message, fields);
    }

    /// Logs at warning level.
    fn warn(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Warn, message, fields);
    }

    /// Logs at error level.
    fn error(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Error, message, fields);
    }
}

/// Renders fields as a JSON object keyed by field name.
fn render_fields(fields: Fields<'_>) -> String {
    let map: BTreeMap<&str, &str> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    serde_json::to_string(&map).unwrap_or_default()
}

/// Logger that forwards events to `tracing` under the `hmock` target.
///
/// Fields travel as one JSON object in the `fields` attribute, so values
/// containing spaces or `=` stay unambiguous.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates a new tracing logger.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: Fields<'_>) {
        let fields = render_fields(fields);
        match level {
            LogLevel::Trace => tracing::trace!(target: "hmock", fields = %fields, "{}", message),
            LogLevel::Debug => tracing::debug!(target: "hmock", fields = %fields, "{}", message),
            LogLevel::Info => tracing::info!(target: "hmock", fields = %fields, "{}", message),
            LogLevel::Warn => tracing::warn!(target: "hmock", fields = %fields, "{}", message),
            LogLevel::Error => tracing::error!(target: "hmock", fields = %fields, "{}", message),
            LogLevel::Off => {}
        }
    }
}

/// Console logger writing one line per event.
pub struct ConsoleLogger {
    config: LogConfig,
}

impl ConsoleLogger {
    /// Creates a new console logger.
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    /// Creates with default configuration.
    pub fn default_config() -> Self {
        Self::new(LogConfig::default())
    }

    /// Formats an event, or returns `None` if it is below the configured level.
    fn format(&self, level: LogLevel, message: &str, fields: Fields<'_>) -> Option<String> {
        if level == LogLevel::Off || level < self.config.level {
            return None;
        }

        let mut parts = Vec::new();

        if self.config.include_timestamps {
            parts.push(format!("[{}]", chrono::Utc::now().to_rfc3339()));
        }
        parts.push(format!("[{}]", level));
        parts.push(message.to_string());

        if !fields.is_empty() {
            parts.push(render_fields(fields));
        }

        Some(parts.join(" "))
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str, fields: Fields<'_>) {
        let Some(output) = self.format(level, message, fields) else {
            return;
        };

        match level {
            LogLevel::Error | LogLevel::Warn => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::default_config()
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("config", &self.config)
            .finish()
    }
}

/// A captured log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Event level.
    pub level: LogLevel,
    /// Event message.
    pub message: String,
    /// Attached fields in emission order.
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Returns the value of a field, if present.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Logger that keeps every event in memory, for assertions in tests.
#[derive(Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Creates an empty memory logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all captured events.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Returns the captured messages in order.
    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    /// Returns the number of captured events.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Discards captured events.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str, fields: Fields<'_>) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        });
    }
}

impl fmt::Debug for MemoryLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLogger")
            .field("records", &self.len())
            .finish()
    }
}
