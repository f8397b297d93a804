//! Parser for complex impedance text.

use num_complex::Complex64;

use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{CascadeError, Result};

/// One signed real or imaginary term.
#[derive(Debug, Clone, Copy)]
struct Term {
    value: f64,
    imaginary: bool,
}

/// Parser for impedance notation.
///
/// ```text
/// impedance = '(' body ')' | body
/// body      = term [ sign term ]
/// term      = [sign] number ['j'] | [sign] 'j'
/// ```
///
/// A second term is only allowed after a real first term and must be
/// imaginary, so `50+10j`, `-40j`, `75`, `j` and `(30-40j)` are accepted
/// while `10j+50` and `5+5` are not.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            input,
            lexer,
            current,
        })
    }

    /// Parse the whole input as one complex number.
    pub fn parse(&mut self) -> Result<Complex64> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error("expected an impedance such as 50+0j"));
        }

        let parenthesized = self.current.kind == TokenKind::OpenParen;
        if parenthesized {
            self.advance()?;
        }

        let value = self.parse_body()?;

        if parenthesized {
            self.expect(TokenKind::CloseParen, "expected ')'")?;
        }
        self.expect(TokenKind::Eof, "unexpected trailing input")?;

        Ok(value)
    }

    fn parse_body(&mut self) -> Result<Complex64> {
        let first = self.parse_term(false)?;
        if first.imaginary {
            return Ok(Complex64::new(0.0, first.value));
        }

        if !matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            return Ok(Complex64::new(first.value, 0.0));
        }

        let second = self.parse_term(true)?;
        if !second.imaginary {
            return Err(self.error("second term must be imaginary (missing 'j')"));
        }
        Ok(Complex64::new(first.value, second.value))
    }

    fn parse_term(&mut self, sign_required: bool) -> Result<Term> {
        let negative = match self.current.kind {
            TokenKind::Plus => {
                self.advance()?;
                false
            }
            TokenKind::Minus => {
                self.advance()?;
                true
            }
            _ if sign_required => return Err(self.error("expected '+' or '-'")),
            _ => false,
        };
        let sign = if negative { -1.0 } else { 1.0 };

        match self.current.kind {
            TokenKind::Number => {
                let magnitude = self.number()?;
                self.advance()?;
                let imaginary = self.current.kind == TokenKind::Imaginary;
                if imaginary {
                    self.advance()?;
                }
                Ok(Term {
                    value: sign * magnitude,
                    imaginary,
                })
            }
            TokenKind::Imaginary => {
                self.advance()?;
                Ok(Term {
                    value: sign,
                    imaginary: true,
                })
            }
            _ => Err(self.error("expected a number or 'j'")),
        }
    }

    fn number(&self) -> Result<f64> {
        let value: f64 = self
            .current
            .text
            .parse()
            .map_err(|_| self.error(format!("invalid number '{}'", self.current.text)))?;
        if !value.is_finite() {
            return Err(self.error(format!("number '{}' is out of range", self.current.text)));
        }
        Ok(value)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<()> {
        if self.current.kind != kind {
            return Err(self.error(message));
        }
        if kind != TokenKind::Eof {
            self.advance()?;
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> CascadeError {
        CascadeError::impedance_syntax(self.input, self.current.column, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Complex64> {
        Parser::new(input)?.parse()
    }

    #[test]
    fn test_parse_rectangular_forms() {
        assert_eq!(parse("50+0j").unwrap(), Complex64::new(50.0, 0.0));
        assert_eq!(parse("30-40j").unwrap(), Complex64::new(30.0, -40.0));
        assert_eq!(parse(" 30 - 40 j ").unwrap(), Complex64::new(30.0, -40.0));
        assert_eq!(parse("(25+12.5J)").unwrap(), Complex64::new(25.0, 12.5));
        assert_eq!(parse("-1e2+2.5e-1j").unwrap(), Complex64::new(-100.0, 0.25));
    }

    #[test]
    fn test_parse_single_terms() {
        assert_eq!(parse("75").unwrap(), Complex64::new(75.0, 0.0));
        assert_eq!(parse("-40j").unwrap(), Complex64::new(0.0, -40.0));
        assert_eq!(parse("j").unwrap(), Complex64::new(0.0, 1.0));
        assert_eq!(parse("10-j").unwrap(), Complex64::new(10.0, -1.0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "50+", "5+5", "10j+50", "(50+0j", "50+0j)", "abc", "50 0j", "1e999"] {
            let err = parse(bad).unwrap_err();
            assert!(
                matches!(err, CascadeError::ImpedanceSyntax { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_error_column_points_at_offender() {
        match parse("50+0jx").unwrap_err() {
            CascadeError::ImpedanceSyntax { column, .. } => assert_eq!(column, 6),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
