//! Injected logging for Nebula GL
//!
//! The renderer never prints on its own: every diagnostic (driver compile
//! logs, link logs, reflection problems) goes through a [`Logger`] supplied
//! at construction. [`DefaultLogger`] provides colored console output.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route renderer diagnostics anywhere (test capture,
/// files, a host engine's own log system, etc.)
///
/// # Example
///
/// ```no_run
/// use nebula_gl::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("[{:?}] {}", entry.severity, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "nebula::Renderer", "nebula::Shader")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        // Color severity string
        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        // Color source
        let source = entry.source.bright_blue();

        // Print with or without file:line
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// # use nebula_gl::log::{DefaultLogger, Logger};
/// # let logger = DefaultLogger;
/// nebula_gl::nebula_trace!(logger, "nebula::Renderer", "Entering reflection pass");
/// ```
#[macro_export]
macro_rules! nebula_trace {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        $logger.log(&$crate::log::LogEntry {
            severity: $crate::log::LogSeverity::Trace,
            timestamp: ::std::time::SystemTime::now(),
            source: ::std::string::String::from($source),
            message: ::std::format!($($arg)*),
            file: ::std::option::Option::None,
            line: ::std::option::Option::None,
        })
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// # use nebula_gl::log::{DefaultLogger, Logger};
/// # let logger = DefaultLogger;
/// nebula_gl::nebula_debug!(logger, "nebula::Renderer", "Reflected {} uniforms", 3);
/// ```
#[macro_export]
macro_rules! nebula_debug {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        $logger.log(&$crate::log::LogEntry {
            severity: $crate::log::LogSeverity::Debug,
            timestamp: ::std::time::SystemTime::now(),
            source: ::std::string::String::from($source),
            message: ::std::format!($($arg)*),
            file: ::std::option::Option::None,
            line: ::std::option::Option::None,
        })
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// # use nebula_gl::log::{DefaultLogger, Logger};
/// # let logger = DefaultLogger;
/// nebula_gl::nebula_info!(logger, "nebula::Renderer", "Program linked successfully");
/// ```
#[macro_export]
macro_rules! nebula_info {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        $logger.log(&$crate::log::LogEntry {
            severity: $crate::log::LogSeverity::Info,
            timestamp: ::std::time::SystemTime::now(),
            source: ::std::string::String::from($source),
            message: ::std::format!($($arg)*),
            file: ::std::option::Option::None,
            line: ::std::option::Option::None,
        })
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// # use nebula_gl::log::{DefaultLogger, Logger};
/// # let logger = DefaultLogger;
/// nebula_gl::nebula_warn!(logger, "nebula::Renderer", "Empty buffer upload");
/// ```
#[macro_export]
macro_rules! nebula_warn {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        $logger.log(&$crate::log::LogEntry {
            severity: $crate::log::LogSeverity::Warn,
            timestamp: ::std::time::SystemTime::now(),
            source: ::std::string::String::from($source),
            message: ::std::format!($($arg)*),
            file: ::std::option::Option::None,
            line: ::std::option::Option::None,
        })
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use nebula_gl::log::{DefaultLogger, Logger};
/// # let logger = DefaultLogger;
/// nebula_gl::nebula_error!(logger, "nebula::Shader", "Compile failed: {}", "driver log");
/// ```
#[macro_export]
macro_rules! nebula_error {
    ($logger:expr, $source:expr, $($arg:tt)*) => {
        $logger.log(&$crate::log::LogEntry {
            severity: $crate::log::LogSeverity::Error,
            timestamp: ::std::time::SystemTime::now(),
            source: ::std::string::String::from($source),
            message: ::std::format!($($arg)*),
            file: ::std::option::Option::Some(::std::file!()),
            line: ::std::option::Option::Some(::std::line!()),
        })
    };
}
