//! Arithmetic expression evaluation.
//!
//! Expressions support `+ - * / %`, exponentiation with `^` or `**`, unary
//! minus, parentheses, and the functions `sin cos tan abs sqrt exp ln log10`.
//!
//! ```
//! assert_eq!(exprcalc::evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(exprcalc::evaluate("-2^2"), Ok(-4.0));
//! assert!(exprcalc::evaluate("sqrt(-1)").is_err());
//! ```

pub mod batch;
pub mod calc;

pub use calc::{evaluate, ErrorKind, EvalError, Evaluator};
