//! Pool sizing from the character classes present in a password.

use super::{CASE_POOL, NUMERIC_POOL, SYMBOL_POOL};

/// Character classes detected in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    /// Anything outside `[A-Za-z0-9]`.
    pub symbol: bool,
}

impl CharClasses {
    pub fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'a'..='z' => classes.lower = true,
                'A'..='Z' => classes.upper = true,
                '0'..='9' => classes.digit = true,
                _ => classes.symbol = true,
            }
        }
        classes
    }

    /// Sum of the detected class sizes, or 1 when nothing was detected.
    pub fn pool(&self) -> u32 {
        let pool = [
            (self.lower, CASE_POOL),
            (self.upper, CASE_POOL),
            (self.digit, NUMERIC_POOL),
            (self.symbol, SYMBOL_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum::<u32>();

        pool.max(1)
    }

    pub fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_lower_and_digits() {
        let classes = CharClasses::scan("abc123");
        assert!(classes.lower && classes.digit);
        assert!(!classes.upper && !classes.symbol);
        assert_eq!(classes.pool(), 36);
    }

    #[test]
    fn test_scan_all_classes() {
        let classes = CharClasses::scan("aB3!");
        assert_eq!(classes.count(), 4);
        assert_eq!(classes.pool(), 94);
    }

    #[test]
    fn test_non_ascii_letters_are_symbols() {
        let classes = CharClasses::scan("éß");
        assert!(classes.symbol);
        assert!(!classes.lower);
        assert_eq!(classes.pool(), 32);
    }

    #[test]
    fn test_space_is_symbol() {
        assert!(CharClasses::scan("a b").symbol);
    }

    #[test]
    fn test_empty_pool_defaults_to_one() {
        let classes = CharClasses::scan("");
        assert_eq!(classes.count(), 0);
        assert_eq!(classes.pool(), 1);
    }
}
