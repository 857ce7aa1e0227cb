//! Arithmetic expression parser
//!
//! Tokenizes and grammar-checks integer arithmetic expressions over
//! `+ - * / % ^` and parentheses. A successful parse yields the token
//! sequence in source order, ready for infix-to-postfix conversion in
//! `arith-eval`; a failed parse pinpoints the offending column.
//!
//! # Example
//!
//! ```
//! use arith_parser::Parser;
//!
//! let tokens = Parser::parse("1 + 2 * 3").unwrap();
//! assert_eq!(tokens.len(), 5);
//! ```

pub mod parser;
pub mod token;

pub use parser::Parser;
pub use token::{Op, Token};

/// Everything that can go wrong while parsing an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("ill-formed integer")]
    IllFormedInteger,
    #[error("missing term")]
    MissingTerm,
    #[error("extraneous symbol after valid expression")]
    ExtraneousSymbol,
    #[error("missing closing parenthesis")]
    MissingClosingParenthesis,
    #[error("integer constant out of range")]
    IntegerOutOfRange,
}

/// Syntax error with position information.
///
/// `column` is the 0-based offset into the input string where the condition
/// was detected; the `Display` impl renders it 1-based for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {}", .column + 1)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub column: usize,
}
