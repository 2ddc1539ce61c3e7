//! Latest-wins asynchronous strength refresh.
//!
//! Every regeneration submits the new password. Overlapping evaluations
//! are superseded: only the most recent submission is ever published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use secrecy::SecretString;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::EstimatorConfig;
use crate::estimator::estimate_strength_from_password;
use crate::types::StrengthResult;

/// A published estimate, tagged with the submission it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthUpdate {
    /// Submission number, starting at 1. Zero is the initial empty state.
    pub generation: u64,
    pub strength: StrengthResult,
}

/// Runs Path B estimation off the caller's task, discarding stale results.
pub struct StrengthRefresher {
    config: EstimatorConfig,
    generation: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
    tx: Arc<watch::Sender<StrengthUpdate>>,
}

impl StrengthRefresher {
    pub fn new(config: EstimatorConfig) -> Self {
        let (tx, _rx) = watch::channel(StrengthUpdate {
            generation: 0,
            strength: StrengthResult::EMPTY,
        });
        Self {
            config,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    /// Receiver observing the latest published estimate.
    pub fn subscribe(&self) -> watch::Receiver<StrengthUpdate> {
        self.tx.subscribe()
    }

    /// Most recently published estimate.
    pub fn current(&self) -> StrengthUpdate {
        *self.tx.borrow()
    }

    /// Submits a password for evaluation, superseding any evaluation still
    /// in flight.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// resolves to `true` if this submission's result was published.
    pub fn submit(&self, password: SecretString) -> JoinHandle<bool> {
        let token = CancellationToken::new();
        let generation = {
            let mut in_flight = self
                .in_flight
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(previous) = in_flight.replace(token.clone()) {
                previous.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let settle_delay = self.config.settle_delay;
        let tx = Arc::clone(&self.tx);

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("strength evaluation {} superseded before start", generation);
                    return false;
                }
                _ = tokio::time::sleep(settle_delay) => {}
            }

            let strength = estimate_strength_from_password(&password);

            // Checked under the channel lock so an older result can never
            // replace a newer one.
            let published = tx.send_if_modified(|current| {
                if token.is_cancelled() || current.generation >= generation {
                    return false;
                }
                *current = StrengthUpdate { generation, strength };
                true
            });

            #[cfg(feature = "tracing")]
            {
                if !published {
                    tracing::trace!("discarding stale strength evaluation {}", generation);
                }
            }

            published
        })
    }

    /// Abandons the evaluation in flight, if any.
    pub fn cancel(&self) {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(token) = in_flight.take() {
            token.cancel();
        }
    }
}

impl Default for StrengthRefresher {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl Drop for StrengthRefresher {
    fn drop(&mut self) {
        self.cancel();
    }
}
