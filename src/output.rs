//! Rendering of numeric results.
//!
//! # Features
//!
//! - **Round-trip output** via [`format_number()`] - the shortest decimal that
//!   reads back as the same `f64`, so a printed result can be typed in again
//! - **Fixed precision** via [`format_number_with_precision()`] - rounded
//!   half away from zero through [`rust_decimal::Decimal`], trailing zeros
//!   dropped
//!
//! Negative zero prints as `0`. NaN and infinities print as `NaN`, `inf` and
//! `-inf`; they only reach this module when domain checks are turned off.
//!
//! # Examples
//!
//! ```
//! use tally_calc::output::{format_number, format_number_with_precision};
//!
//! assert_eq!(format_number(14.0), "14");
//! assert_eq!(format_number(2.5), "2.5");
//! assert_eq!(format_number_with_precision(2.0 / 3.0, 4), "0.6667");
//! assert_eq!(format_number_with_precision(1.5, 4), "1.5");
//! ```

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

pub struct NumberPrinter {
    precision: Option<u32>,
}

impl NumberPrinter {
    pub fn new(precision: Option<u32>) -> Self {
        NumberPrinter { precision }
    }

    pub fn print(&self, value: f64) -> String {
        // -0 and 0 print the same
        let value = if value == 0.0 { 0.0 } else { value };

        match self.precision {
            Some(dp) => self.print_rounded(value, dp),
            None => value.to_string(),
        }
    }

    fn print_rounded(&self, value: f64, dp: u32) -> String {
        match Decimal::from_f64(value) {
            Some(d) => {
                let rounded = d
                    .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
                    .normalize();
                if rounded.is_zero() {
                    "0".to_string()
                } else {
                    rounded.to_string()
                }
            }
            // outside Decimal's range, or not finite
            None => value.to_string(),
        }
    }
}

// Convenience functions

/// Formats a result as the shortest round-trip decimal.
pub fn format_number(value: f64) -> String {
    NumberPrinter::new(None).print(value)
}

/// Formats a result rounded to at most `dp` decimal places.
pub fn format_number_with_precision(value: f64, dp: u32) -> String {
    NumberPrinter::new(Some(dp)).print(value)
}
