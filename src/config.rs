//! Estimator configuration
//!
//! Handles reading runtime settings from the environment.

use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the settle delay, in milliseconds.
pub const SETTLE_DELAY_ENV: &str = "PWD_STRENGTH_SETTLE_MS";

const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for asynchronous strength evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Pause before an asynchronous evaluation runs. A newer submission
    /// arriving during the pause cancels the older one before any work.
    pub settle_delay: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl EstimatorConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Environment Variable
    ///
    /// Set `PWD_STRENGTH_SETTLE_MS` to override the settle delay.
    /// If not set, defaults to 300 ms.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the variable is set but is not
    /// a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = std::env::var(SETTLE_DELAY_ENV) else {
            return Ok(Self::default());
        };

        let millis: u64 = raw.trim().parse().map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::error!("Rejecting {}={:?}", SETTLE_DELAY_ENV, raw);
            ConfigError::InvalidValue {
                var: SETTLE_DELAY_ENV,
                value: raw.clone(),
            }
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Settle delay set to {} ms from environment", millis);

        Ok(Self {
            settle_delay: Duration::from_millis(millis),
        })
    }
}
