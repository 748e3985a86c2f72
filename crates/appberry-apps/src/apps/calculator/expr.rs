//! Arithmetic expression evaluator
//!
//! Grammar (standard precedence, left associative):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('×' | '*' | '÷' | '/') factor)*
//! factor := ('-' | '+')* number
//! number := digit+ ('.' digit*)? | '.' digit+
//! ```

use thiserror::Error;

/// Reasons an expression cannot be evaluated
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("expression ends unexpectedly")]
    UnexpectedEnd,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,
}

/// Evaluate an arithmetic expression over decimal numbers and `+ - × ÷`.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    if input.trim().is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser { src: input, pos: 0 };
    let value = parser.expr()?;

    if let Some(ch) = parser.peek() {
        return Err(ExprError::UnexpectedChar {
            ch,
            offset: parser.pos,
        });
    }
    if !value.is_finite() {
        return Err(ExprError::NotFinite);
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    /// Byte offset into `src`
    pos: usize,
}

impl Parser<'_> {
    /// Next non-whitespace character without consuming it
    fn peek(&mut self) -> Option<char> {
        while let Some(ch) = self.src[self.pos..].chars().next() {
            if !ch.is_whitespace() {
                return Some(ch);
            }
            self.pos += ch.len_utf8();
        }
        None
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(op @ '+') => {
                    self.bump(op);
                    value += self.term()?;
                }
                Some(op @ '-') => {
                    self.bump(op);
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(op @ ('×' | '*')) => {
                    self.bump(op);
                    value *= self.factor()?;
                }
                Some(op @ ('÷' | '/')) => {
                    self.bump(op);
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    /// Leading signs are folded in a loop so long runs cannot exhaust the stack
    fn factor(&mut self) -> Result<f64, ExprError> {
        let mut negative = false;
        while let Some(op @ ('-' | '+')) = self.peek() {
            self.bump(op);
            negative ^= op == '-';
        }

        match self.peek() {
            Some(ch) if ch.is_ascii_digit() || ch == '.' => {
                let value = self.number()?;
                Ok(if negative { -value } else { value })
            }
            Some(ch) => Err(ExprError::UnexpectedChar {
                ch,
                offset: self.pos,
            }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        let start = self.pos;
        let mut seen_dot = false;

        while let Some(ch) = self.src[self.pos..].chars().next() {
            match ch {
                '0'..='9' => self.bump(ch),
                '.' if !seen_dot => {
                    seen_dot = true;
                    self.bump(ch);
                }
                _ => break,
            }
        }

        let literal = &self.src[start..self.pos];
        if literal == "." {
            return Err(ExprError::InvalidNumber(literal.to_string()));
        }
        literal
            .parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(literal.to_string()))
    }
}
