//! Text notation for impedances and quantities.
//!
//! Impedances are written in rectangular form with `j` as the imaginary unit,
//! the way an RF engineer types them at a prompt:
//!
//! ```text
//! 50+0j     30 - 40j     (75-12.5j)     -40j     100
//! ```
//!
//! Whitespace is insignificant. Real quantities (capacitance, length, ...)
//! are plain decimal numbers in base SI units.

mod display;
mod lexer;
mod parser;

pub use display::{format_complex, format_complex_g, format_g, format_g4};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use num_complex::Complex64;

use crate::error::{CascadeError, Result};

/// Parse impedance text such as `"50+0j"` or `"30 - 40j"`.
pub fn parse_impedance(input: &str) -> Result<Complex64> {
    Parser::new(input)?.parse()
}

/// Parse a real quantity in base SI units, e.g. `"1e-9"` or `"0.75"`.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let text = input.trim();
    if text.is_empty() {
        return Err(CascadeError::QuantitySyntax {
            input: input.to_string(),
            message: "expected a number".to_string(),
        });
    }

    let value: f64 = text.parse().map_err(|_| CascadeError::QuantitySyntax {
        input: input.to_string(),
        message: "not a decimal number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(CascadeError::QuantitySyntax {
            input: input.to_string(),
            message: "number must be finite".to_string(),
        });
    }

    Ok(value)
}
