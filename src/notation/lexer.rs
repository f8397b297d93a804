//! Lexer (tokenizer) for complex impedance text.

use crate::error::{CascadeError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Column number in the original input (1-indexed)
    pub column: usize,
}

/// Token types in impedance notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An unsigned decimal number, optionally with an exponent
    Number,
    /// '+'
    Plus,
    /// '-'
    Minus,
    /// Imaginary unit 'j' (or 'J')
    Imaginary,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// End of input
    Eof,
}

/// Lexer for tokenizing impedance text such as `"50 - 12.5j"`.
///
/// Whitespace is insignificant anywhere in the input.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let start_column = self.column;
        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    column: start_column,
                });
            }
        };

        let single = |kind: TokenKind| Token {
            kind,
            text: ch.to_string(),
            column: start_column,
        };

        let token = match ch {
            '+' => {
                self.advance();
                single(TokenKind::Plus)
            }
            '-' => {
                self.advance();
                single(TokenKind::Minus)
            }
            'j' | 'J' => {
                self.advance();
                single(TokenKind::Imaginary)
            }
            '(' => {
                self.advance();
                single(TokenKind::OpenParen)
            }
            ')' => {
                self.advance();
                single(TokenKind::CloseParen)
            }
            '.' | '0'..='9' => {
                let text = self.read_number()?;
                Token {
                    kind: TokenKind::Number,
                    text,
                    column: start_column,
                }
            }
            _ => {
                return Err(CascadeError::impedance_syntax(
                    self.input,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.column += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn read_number(&mut self) -> Result<String> {
        let start_column = self.column;
        let mut text = String::new();

        let mut digits = self.read_digits(&mut text);

        if let Some(&'.') = self.chars.peek() {
            text.push('.');
            self.advance();
            digits += self.read_digits(&mut text);
        }

        if digits == 0 {
            return Err(CascadeError::impedance_syntax(
                self.input,
                start_column,
                "a decimal point must be next to at least one digit",
            ));
        }

        if let Some(&ch) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                text.push(ch);
                self.advance();
                if let Some(&sign) = self.chars.peek() {
                    if sign == '-' || sign == '+' {
                        text.push(sign);
                        self.advance();
                    }
                }
                if self.read_digits(&mut text) == 0 {
                    return Err(CascadeError::impedance_syntax(
                        self.input,
                        self.column,
                        "exponent has no digits",
                    ));
                }
            }
        }

        Ok(text)
    }
}
