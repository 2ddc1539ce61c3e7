//! Option and result types shared by the estimator and the generator panel.

use std::fmt;

/// Shortest password the length slider allows.
pub const MIN_LENGTH: usize = 1;
/// Longest password the length slider allows.
pub const MAX_LENGTH: usize = 128;

const DEFAULT_LENGTH: usize = 16;

/// Desired composition of a generated password.
///
/// Field names match the argument object of the native `generate_password`
/// command, so with the `serde` feature the struct deserializes directly
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GenerationOptions {
    pub length: usize,
    pub use_alpha: bool,
    pub use_numeric: bool,
    pub use_symbols: bool,
    /// Exclude look-alike characters such as 0/O and 1/l/I.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoid_ambiguous: bool,
}

impl Default for GenerationOptions {
    /// Main window defaults: 16 characters, every category, no look-alikes.
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_alpha: true,
            use_numeric: true,
            use_symbols: true,
            avoid_ambiguous: true,
        }
    }
}

impl GenerationOptions {
    /// Options used by the compact tray window, where only the categories
    /// can be toggled.
    pub fn tray(use_alpha: bool, use_numeric: bool, use_symbols: bool) -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_alpha,
            use_numeric,
            use_symbols,
            avoid_ambiguous: true,
        }
    }

    /// Returns a copy with `length` clamped into `MIN_LENGTH..=MAX_LENGTH`.
    pub fn clamped(self) -> Self {
        Self {
            length: self.length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    /// True when no character category is selected.
    pub fn is_empty(&self) -> bool {
        !(self.use_alpha || self.use_numeric || self.use_symbols)
    }
}

/// Qualitative strength tier, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Bar fill for a non-empty evaluation landing in this tier.
    pub fn fraction(self) -> f64 {
        match self {
            StrengthLabel::Weak => 0.33,
            StrengthLabel::Fair => 0.5,
            StrengthLabel::Good => 0.75,
            StrengthLabel::Strong => 1.0,
        }
    }

    /// Presentation hint for the strength bar. Carries no meaning.
    pub fn color_hint(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "bg-red-500",
            StrengthLabel::Fair => "bg-orange-500",
            StrengthLabel::Good => "bg-yellow-500",
            StrengthLabel::Strong => "bg-green-600",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Outcome of a strength estimation: a tier plus how much of the bar to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthResult {
    pub label: StrengthLabel,
    /// Bar fill in `[0, 1]`.
    pub fraction: f64,
}

impl StrengthResult {
    /// State shown before any password exists.
    pub const EMPTY: StrengthResult = StrengthResult {
        label: StrengthLabel::Weak,
        fraction: 0.0,
    };

    pub fn from_label(label: StrengthLabel) -> Self {
        Self {
            label,
            fraction: label.fraction(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fraction == 0.0
    }
}

impl Default for StrengthResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StrengthResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StrengthResult", 3)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("color", self.label.color_hint())?;
        state.serialize_field("pct", &self.fraction)?;
        state.end()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_options_from_command_arguments() {
        let json = r#"{"length":12,"use_alpha":true,"use_numeric":false,"use_symbols":true}"#;
        let options: GenerationOptions = serde_json::from_str(json).expect("valid options");
        assert_eq!(options.length, 12);
        assert!(!options.avoid_ambiguous);
    }

    #[test]
    fn test_result_shape() {
        let value = serde_json::to_value(StrengthResult::from_label(StrengthLabel::Good))
            .expect("serializable");
        assert_eq!(value["label"], "Good");
        assert_eq!(value["color"], "bg-yellow-500");
        assert_eq!(value["pct"], 0.75);
    }
}
