//! Pool sizing from generation options.

use super::{ALPHA_POOL, NUMERIC_POOL, SYMBOL_POOL};
use crate::types::GenerationOptions;

/// Sum of the category sizes selected in `options`.
pub fn category_pool(options: &GenerationOptions) -> u32 {
    let mut pool = 0;
    if options.use_alpha {
        pool += ALPHA_POOL;
    }
    if options.use_numeric {
        pool += NUMERIC_POOL;
    }
    if options.use_symbols {
        pool += SYMBOL_POOL;
    }
    pool
}

/// Characters removed from the pool when look-alikes are avoided.
///
/// Letters are deducted in two steps (i l I L, then O o), so alphabetic
/// pools lose 6 in total.
pub fn ambiguous_deduction(options: &GenerationOptions) -> u32 {
    if !options.avoid_ambiguous {
        return 0;
    }

    let mut deduction = 0;
    if options.use_alpha {
        deduction += 4; // i l I L
    }
    if options.use_numeric {
        deduction += 2; // 0 1
    }
    if options.use_alpha {
        deduction += 2; // O o
    }
    deduction
}

/// Approximate pool size for `options`, never below 1.
pub fn options_pool(options: &GenerationOptions) -> u32 {
    category_pool(options)
        .saturating_sub(ambiguous_deduction(options))
        .max(1)
}
