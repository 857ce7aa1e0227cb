//! Arithmetic expression evaluation
//!
//! Takes the validated infix token sequence produced by `arith-parser`,
//! reorders it into postfix notation, and evaluates it to a single bounded
//! integer.
//!
//! ```text
//! Vec<Token> → infix_to_postfix() → Vec<Token> → evaluate() → i16
//! ```
//!
//! # Example
//!
//! ```
//! use arith_eval::{evaluate, infix_to_postfix};
//! use arith_parser::Parser;
//!
//! let tokens = Parser::parse("(1+2)*3").unwrap();
//! let value = evaluate(&infix_to_postfix(tokens)).unwrap();
//! assert_eq!(value, 9);
//! ```

pub mod eval;
pub mod postfix;

pub use eval::evaluate;
pub use postfix::infix_to_postfix;

/// Arithmetic failure during postfix evaluation.
///
/// Disjoint from the parser's `SyntaxError`: syntax problems never reach
/// evaluation, and these are only discoverable while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("numeric overflow")]
    NumericOverflow,
}
