//! Generation boundary and per-window panel state.
//!
//! Passwords come from an external generator (the native
//! `generate_password` command). This module only defines the seam and the
//! state a window keeps around it.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::estimator::{estimate_strength_from_options, estimate_strength_from_password};
use crate::types::{GenerationOptions, StrengthResult};

/// Failure of the external generator.
///
/// Every variant displays the same opaque notice; the cause stays available
/// through `source()` for logging.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to generate password")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to generate password")]
    Unavailable,
}

/// Source of freshly generated passwords.
pub trait PasswordSource {
    fn generate(&self, options: &GenerationOptions) -> Result<SecretString, GenerationError>;
}

impl<F> PasswordSource for F
where
    F: Fn(&GenerationOptions) -> Result<SecretString, GenerationError>,
{
    fn generate(&self, options: &GenerationOptions) -> Result<SecretString, GenerationError> {
        self(options)
    }
}

/// State behind one generator window: the options, the password on
/// display and the last failure notice.
pub struct PasswordPanel<S> {
    source: S,
    options: GenerationOptions,
    password: SecretString,
    error: Option<String>,
}

impl<S: PasswordSource> PasswordPanel<S> {
    pub fn new(source: S, options: GenerationOptions) -> Self {
        Self {
            source,
            options: options.clamped(),
            password: SecretString::new(String::new().into()),
            error: None,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Replaces the options, clamping the length to the slider range.
    pub fn set_options(&mut self, options: GenerationOptions) {
        self.options = options.clamped();
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Notice from the last failed regeneration, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Asks the source for a new password.
    ///
    /// On failure the previous password stays on display and the generic
    /// notice is recorded. There is no retry.
    pub fn regenerate(&mut self) -> Result<&SecretString, &str> {
        self.error = None;

        match self.source.generate(&self.options) {
            Ok(password) => {
                self.password = password;
                Ok(&self.password)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                {
                    match std::error::Error::source(&e) {
                        Some(cause) => tracing::warn!("Password generation failed: {}", cause),
                        None => tracing::warn!("Password generation failed: {}", e),
                    }
                }
                Err(self.error.insert(e.to_string()).as_str())
            }
        }
    }

    /// Strength preview from the current options.
    pub fn preview(&self) -> StrengthResult {
        estimate_strength_from_options(&self.options)
    }

    /// Strength of the password on display; empty before the first success.
    pub fn strength(&self) -> StrengthResult {
        estimate_strength_from_password(&self.password)
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLabel;
    use std::cell::Cell;
    use std::rc::Rc;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    /// Cycles through fixed passwords, failing once `fail` is set.
    struct Scripted {
        outputs: Vec<&'static str>,
        next: Cell<usize>,
        fail: Rc<Cell<bool>>,
    }

    impl Scripted {
        fn new(outputs: Vec<&'static str>) -> Self {
            Self { outputs, next: Cell::new(0), fail: Rc::new(Cell::new(false)) }
        }
    }

    impl PasswordSource for Scripted {
        fn generate(&self, _options: &GenerationOptions) -> Result<SecretString, GenerationError> {
            if self.fail.get() {
                return Err(GenerationError::Backend("bridge closed".into()));
            }
            let i = self.next.get();
            self.next.set(i + 1);
            Ok(secret(self.outputs[i % self.outputs.len()]))
        }
    }

    #[test]
    fn test_panel_starts_empty() {
        let source = Scripted::new(vec!["abc123"]);
        let panel = PasswordPanel::new(source, GenerationOptions::default());

        assert!(!panel.has_password());
        assert_eq!(panel.strength(), StrengthResult::EMPTY);
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_regenerate_updates_strength() {
        let source = Scripted::new(vec!["abc123", "xK9#mQ2$vL7!pR4&"]);
        let mut panel = PasswordPanel::new(source, GenerationOptions::default());

        panel.regenerate().expect("first generation");
        assert_eq!(panel.password().expose_secret(), "abc123");
        assert_eq!(panel.strength().label, StrengthLabel::Weak);
        assert_eq!(panel.strength().fraction, 0.33);

        panel.regenerate().expect("second generation");
        assert_eq!(panel.strength().label, StrengthLabel::Strong);
    }

    #[test]
    fn test_failure_keeps_password_and_reports_generic_notice() {
        let source = Scripted::new(vec!["abc123"]);
        let fail = Rc::clone(&source.fail);
        let mut panel = PasswordPanel::new(source, GenerationOptions::default());
        panel.regenerate().expect("first generation");

        fail.set(true);
        let err = panel.regenerate().expect_err("generation should fail");
        assert_eq!(err, "Failed to generate password");
        assert_eq!(panel.error(), Some("Failed to generate password"));
        assert_eq!(panel.password().expose_secret(), "abc123");

        fail.set(false);
        panel.regenerate().expect("recovered");
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_closure_source() {
        let source = |options: &GenerationOptions| -> Result<SecretString, GenerationError> {
            Ok(secret(&"a".repeat(options.length)))
        };
        let mut panel = PasswordPanel::new(source, GenerationOptions::tray(true, false, false));

        let pwd = panel.regenerate().expect("closure generation");
        assert_eq!(pwd.expose_secret().len(), 16);
    }

    #[test]
    fn test_unavailable_source() {
        let source = |_: &GenerationOptions| -> Result<SecretString, GenerationError> {
            Err(GenerationError::Unavailable)
        };
        let mut panel = PasswordPanel::new(source, GenerationOptions::default());

        assert!(panel.regenerate().is_err());
        assert!(!panel.has_password());
        assert_eq!(panel.strength(), StrengthResult::EMPTY);
    }

    #[test]
    fn test_options_are_clamped_and_previewed() {
        let source = Scripted::new(vec!["x"]);
        let mut panel = PasswordPanel::new(source, GenerationOptions { length: 0, ..Default::default() });
        assert_eq!(panel.options().length, 1);

        panel.set_options(GenerationOptions { length: 500, ..Default::default() });
        assert_eq!(panel.options().length, 128);
        assert_eq!(panel.preview().label, StrengthLabel::Strong);

        panel.set_options(GenerationOptions::tray(false, true, false));
        // pool 10 - 2 = 8, 16 * 3 bits = 48
        assert_eq!(panel.preview().label, StrengthLabel::Fair);
    }
}
