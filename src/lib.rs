//! Password strength estimation library
//!
//! Classifies passwords into four tiers (`Weak`, `Fair`, `Good`, `Strong`)
//! from an entropy estimate, either from the options a password will be
//! generated with or from a concrete password.
//!
//! # Features
//!
//! - `async` (default): Enables latest-wins async refresh with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Deserializes options and serializes results for the native
//!   command bridge
//!
//! # Environment Variables
//!
//! - `PWD_STRENGTH_SETTLE_MS`: Delay before an async evaluation runs
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use passy_strength::{
//!     estimate_strength_from_options, estimate_strength_from_password, GenerationOptions,
//!     StrengthLabel,
//! };
//! use secrecy::SecretString;
//!
//! // Preview before anything is generated
//! let preview = estimate_strength_from_options(&GenerationOptions::default());
//! assert_eq!(preview.label, StrengthLabel::Strong);
//!
//! // Exact estimate once a password exists
//! let password = SecretString::new("abc123".to_string().into());
//! let strength = estimate_strength_from_password(&password);
//! assert_eq!(strength.label, StrengthLabel::Weak);
//! assert_eq!(strength.fraction, 0.33);
//! ```

// Internal modules
mod config;
mod estimator;
mod generator;
mod pool;
mod types;

#[cfg(feature = "async")]
mod refresh;

// Public API
pub use config::{ConfigError, EstimatorConfig, SETTLE_DELAY_ENV};
pub use estimator::{
    classify, estimate_strength_from_options, estimate_strength_from_password, options_entropy,
    password_entropy,
};
pub use generator::{GenerationError, PasswordPanel, PasswordSource};
pub use pool::{ambiguous_deduction, category_pool, options_pool, CharClasses};
pub use types::{GenerationOptions, StrengthLabel, StrengthResult, MAX_LENGTH, MIN_LENGTH};

#[cfg(feature = "async")]
pub use estimator::estimate_strength_tx;

#[cfg(feature = "async")]
pub use refresh::{StrengthRefresher, StrengthUpdate};
