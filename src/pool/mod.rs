//! Character pool estimation
//!
//! Each submodule sizes the pool from one kind of input.

mod classes;
mod options;

pub use classes::CharClasses;
pub use options::{ambiguous_deduction, category_pool, options_pool};

/// Approximate size of the alphabetic set (upper + lower).
pub const ALPHA_POOL: u32 = 52;
/// Size of one letter case.
pub const CASE_POOL: u32 = 26;
/// Size of the digit set.
pub const NUMERIC_POOL: u32 = 10;
/// Rough size of the symbol set.
pub const SYMBOL_POOL: u32 = 32;
