//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodcal application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodcal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A one-sentence mood journal with a calendar view";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level; info and debug output appear with `--verbose`.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level enabled by `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal directory.
pub const ENV_VAR_MOODCAL_DIR: &str = "MOODCAL_DIR";
/// Environment variable for specifying the log format.
pub const ENV_VAR_MOODCAL_LOG_FORMAT: &str = "MOODCAL_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the journal within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "Documents/moodcal";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// File name of the entry document inside the journal directory.
pub const STORE_FILE_NAME: &str = "entries.json";
/// File name of the advisory lock guarding the entry document.
pub const STORE_LOCK_FILE_NAME: &str = "entries.lock";
/// Current version of the on-disk entry document.
pub const STORE_FORMAT_VERSION: u32 = 1;
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Entry Validation
/// Maximum number of characters accepted in an entry sentence.
pub const MAX_SENTENCE_CHARS: usize = 280;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Month format accepted by `calendar --month` (YYYY-MM).
pub const MONTH_FORMAT: &str = "%Y-%m";
/// Months the calendar may scroll back from the current month.
pub const PAST_SCROLL_MONTHS: u32 = 12;
/// Months the calendar may scroll forward from the current month.
pub const FUTURE_SCROLL_MONTHS: u32 = 12;

// Calendar Colors
/// Background for days without a recognized mood.
pub const COLOR_NEUTRAL: &str = "gray";
/// Highlight color of the selected day.
pub const COLOR_SELECTED: &str = "#007AFF";
/// Color of the dot shown under flagged days.
pub const COLOR_FLAG_DOT: &str = "#FFD700";
/// Text color used on colored day cells.
pub const COLOR_DAY_TEXT: &str = "white";
/// Glyph attached to flagged days.
pub const FLAG_GLYPH: &str = "\u{2b50}";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodcal";
