//! Error types
//!
//! Per-tick camera operations never fail: degenerate numeric input is
//! clamped or guarded instead. Only loading and validating a rig
//! configuration can produce an error.

use thiserror::Error;

/// Errors raised while loading, saving, or validating a [`RigConfig`](crate::config::RigConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for a rig config.
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the rig cannot work with.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Field name as written in the config file
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
