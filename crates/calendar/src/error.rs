//! Error types for the kalends-calendar crate.

use kalends_scope::CalendarError;

/// Error type for building a calendar from configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the TOML document cannot be parsed.
    #[error("failed to parse calendar config: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },

    /// Returned when the configuration is well-formed but inconsistent.
    #[error("invalid calendar config: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Scope construction failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
