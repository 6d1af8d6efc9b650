use super::error::{ErrorKind, EvalError};
use super::functions;

const MAX_DEPTH: usize = 256;

/// Parsing state for a single evaluation.
///
/// Each grammar level is one method, and all of them advance the same cursor.
/// A `Parser` is consumed by [`Parser::run`], so a cursor never outlives the
/// evaluation that created it.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    pub fn run(mut self) -> Result<f64, EvalError> {
        let value = self.parse_expression()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error(ErrorKind::TrailingInput));
        }
        Ok(value)
    }

    // Expression := Term (('+' | '-') Term)*
    fn parse_expression(&mut self) -> Result<f64, EvalError> {
        let mut result = self.parse_term()?;
        loop {
            self.skip_whitespace();
            if self.match_char('+') {
                result += self.parse_term()?;
            } else if self.match_char('-') {
                result -= self.parse_term()?;
            } else {
                break;
            }
        }
        Ok(result)
    }

    // Term := Factor (('*' | '/' | '%') Factor)*
    fn parse_term(&mut self) -> Result<f64, EvalError> {
        let mut result = self.parse_factor()?;
        loop {
            self.skip_whitespace();
            let op_pos = self.pos;

            if self.input[self.pos..].starts_with("**") {
                break;
            }

            if self.match_char('*') {
                result *= self.parse_factor()?;
            } else if self.match_char('/') {
                let divisor = self.parse_factor()?;
                if divisor == 0.0 {
                    return Err(EvalError::new(ErrorKind::DivisionByZero, op_pos));
                }
                result /= divisor;
            } else if self.match_char('%') {
                let divisor = self.parse_factor()?;
                if divisor == 0.0 {
                    return Err(EvalError::new(ErrorKind::ModuloByZero, op_pos));
                }
                result %= divisor;
            } else {
                break;
            }
        }
        Ok(result)
    }

    fn parse_factor(&mut self) -> Result<f64, EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }
        let result = self.parse_factor_inner();
        self.depth -= 1;
        result
    }

    // Factor := ['-'] Primary [('^' | '**') Factor]
    //
    // The unary minus recurses into a whole Factor, so `-2^2` is `-(2^2)`.
    fn parse_factor_inner(&mut self) -> Result<f64, EvalError> {
        self.skip_whitespace();

        let Some(c) = self.current_char() else {
            return Err(self.error(ErrorKind::UnexpectedEnd));
        };

        let result = if c == '-' {
            self.pos += 1;
            -self.parse_factor()?
        } else if c == '(' {
            self.pos += 1;
            let value = self.parse_expression()?;
            self.skip_whitespace();
            if !self.match_char(')') {
                return Err(self.error(ErrorKind::MissingClosingParen));
            }
            value
        } else if c.is_ascii_alphabetic() {
            self.parse_function()?
        } else if c.is_ascii_digit() || c == '.' {
            self.parse_number()?
        } else {
            return Err(self.error(ErrorKind::InvalidExpression));
        };

        self.skip_whitespace();
        if self.match_char('^') || self.match_str("**") {
            let exponent = self.parse_factor()?;
            return Ok(result.powf(exponent));
        }

        Ok(result)
    }

    // Number := Digit+ ['.' Digit*], also accepting a leading '.' as in `.5`
    fn parse_number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;

        self.skip_digits();
        if self.match_char('.') {
            self.skip_digits();
        }

        let text = &self.input[start..self.pos];
        if text.is_empty() || text == "." {
            return Err(EvalError::new(ErrorKind::InvalidNumber, start));
        }

        text.parse::<f64>()
            .map_err(|_| EvalError::new(ErrorKind::InvalidNumber, start))
    }

    // Function := Identifier '(' Expression ')'
    fn parse_function(&mut self) -> Result<f64, EvalError> {
        let input = self.input;
        let start = self.pos;

        while matches!(self.current_char(), Some(c) if c.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        let name = &input[start..self.pos];

        self.skip_whitespace();
        if !self.match_char('(') {
            return Err(self.error(ErrorKind::MissingOpeningParen));
        }

        let argument = self.parse_expression()?;

        self.skip_whitespace();
        if !self.match_char(')') {
            return Err(self.error(ErrorKind::MissingFunctionCloseParen));
        }

        functions::apply(name, argument).map_err(|kind| EvalError::new(kind, start))
    }

    fn skip_digits(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn match_char(&mut self, c: char) -> bool {
        if self.current_char() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn match_str(&mut self, s: &str) -> bool {
        if self.input[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn error(&self, kind: ErrorKind) -> EvalError {
        EvalError::new(kind, self.pos)
    }
}
