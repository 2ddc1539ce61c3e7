//! Password strength estimator - entropy calculation and classification.
//!
//! Two independent paths feed the same four-tier classification:
//! [`estimate_strength_from_options`] previews a configuration before any
//! password exists, [`estimate_strength_from_password`] scans a concrete
//! password. They can disagree for the same nominal composition.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::EstimatorConfig;

use crate::pool::{options_pool, CharClasses};
use crate::types::{GenerationOptions, StrengthLabel, StrengthResult};

const FAIR_THRESHOLD: f64 = 35.0;
const GOOD_THRESHOLD: f64 = 60.0;
const STRONG_THRESHOLD: f64 = 80.0;

/// Maps an entropy estimate to a strength tier.
///
/// Thresholds are strict, so a value exactly on a boundary lands in the
/// higher tier.
pub fn classify(entropy: f64) -> StrengthResult {
    let label = if entropy < FAIR_THRESHOLD {
        StrengthLabel::Weak
    } else if entropy < GOOD_THRESHOLD {
        StrengthLabel::Fair
    } else if entropy < STRONG_THRESHOLD {
        StrengthLabel::Good
    } else {
        StrengthLabel::Strong
    };
    StrengthResult::from_label(label)
}

fn entropy(pool: u32, length: usize) -> f64 {
    f64::from(pool).log2() * length as f64
}

/// Entropy estimate, in bits, of a password generated with `options`.
pub fn options_entropy(options: &GenerationOptions) -> f64 {
    let pool = options_pool(options);
    let bits = entropy(pool, options.length);

    #[cfg(feature = "tracing")]
    tracing::debug!("options pool={} length={} entropy={:.2}", pool, options.length, bits);

    bits
}

/// Entropy estimate, in bits, of an existing password.
pub fn password_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let pool = CharClasses::scan(pwd).pool();
    let length = pwd.chars().count();
    let bits = entropy(pool, length);

    #[cfg(feature = "tracing")]
    tracing::debug!("password pool={} length={} entropy={:.2}", pool, length, bits);

    bits
}

/// Estimates strength from the intended composition of a password.
///
/// Used as a preview before any password is generated. The result never
/// has a zero fraction: the weakest outcome is `Weak` at 0.33.
pub fn estimate_strength_from_options(options: &GenerationOptions) -> StrengthResult {
    classify(options_entropy(options))
}

/// Estimates strength from the character classes actually present in
/// `password`.
///
/// An empty password yields [`StrengthResult::EMPTY`] (`Weak`, fraction 0),
/// distinct from any non-empty weak password.
pub fn estimate_strength_from_password(password: &SecretString) -> StrengthResult {
    if password.expose_secret().is_empty() {
        return StrengthResult::EMPTY;
    }
    classify(password_entropy(password))
}

/// Async version that sends the estimate via channel.
///
/// Waits `config.settle_delay` first; if `token` is cancelled meanwhile,
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn estimate_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    config: &EstimatorConfig,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("estimation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::trace!("estimation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(config.settle_delay) => {}
    }

    let result = estimate_strength_from_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength estimate: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
