use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Missing closing parenthesis")]
    MissingClosingParen,
    #[error("Missing closing parenthesis after function argument")]
    MissingFunctionCloseParen,
    #[error("Missing opening parenthesis after function")]
    MissingOpeningParen,
    #[error("Invalid number format")]
    InvalidNumber,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Square root of negative number")]
    NegativeSqrt,
    #[error("Natural logarithm of non-positive number")]
    NonPositiveLn,
    #[error("Logarithm of non-positive number")]
    NonPositiveLog10,
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
    #[error("Unexpected input after expression")]
    TrailingInput,
    #[error("Expression nested too deeply")]
    NestingTooDeep,
}

/// A failed evaluation: what went wrong and the byte offset where it was noticed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {pos}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub pos: usize,
}

impl EvalError {
    pub fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
