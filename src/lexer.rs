//! Tokenizer for textual complex numbers such as `"3+2i"`, `"-i"` or `"1+2+3i"`.
//!
//! A term is an optional sign, a run of digits and decimal points, and an
//! optional trailing `i` that marks the term as imaginary. Characters that
//! cannot start a term are skipped, so `"3 + 2i"` reads the same as `"3+2i"`.
//!
//! The digit run of a term must form a whole float. Runs such as `"1.2.3"`,
//! `"1..5"` or a lone `"."` fail with [`ComplexError::InvalidParameter`]; they
//! are never read up to their longest valid prefix.

use crate::error::{ComplexError, Result};

/// Letter marking a term as imaginary.
pub const IMAGINARY_UNIT: char = 'i';

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Real(f64),
    Imaginary(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub length: usize,
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    current_char: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            current_char: input.chars().next(),
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(ch) = self.current_char {
            let start_pos = self.position;

            if ch == '+' || ch == '-' {
                self.advance();
                if self.at_term_body() {
                    return self.read_term(start_pos).map(Some);
                }
                // A sign only belongs to a term it is directly attached to.
                continue;
            }

            if is_digit_or_point(ch) || ch == IMAGINARY_UNIT {
                return self.read_term(start_pos).map(Some);
            }

            self.advance();
        }

        Ok(None)
    }

    fn read_term(&mut self, start_pos: usize) -> Result<Token> {
        while let Some(ch) = self.current_char {
            if is_digit_or_point(ch) {
                self.advance();
            } else {
                break;
            }
        }

        let imaginary = self.current_char == Some(IMAGINARY_UNIT);
        if imaginary {
            self.advance();
        }

        let text = &self.input[start_pos..self.position];
        let kind = if imaginary {
            let coefficient = &text[..text.len() - IMAGINARY_UNIT.len_utf8()];
            TokenKind::Imaginary(match coefficient {
                "" | "+" => 1.0,
                "-" => -1.0,
                digits => parse_number(digits, start_pos)?,
            })
        } else {
            TokenKind::Real(parse_number(text, start_pos)?)
        };

        Ok(Token {
            kind,
            position: start_pos,
            length: self.position - start_pos,
        })
    }

    fn at_term_body(&self) -> bool {
        self.current_char
            .map_or(false, |c| is_digit_or_point(c) || c == IMAGINARY_UNIT)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char {
            self.position += ch.len_utf8();
            self.current_char = self.input[self.position..].chars().next();
        }
    }
}

fn is_digit_or_point(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

fn parse_number(text: &str, position: usize) -> Result<f64> {
    text.parse::<f64>().map_err(|_| {
        ComplexError::invalid(format!(
            "malformed number '{}' at position {}",
            text, position
        ))
    })
}
