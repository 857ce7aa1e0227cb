//! Infix-to-postfix conversion.
//!
//! Classic operator-precedence (shunting-yard) reordering over an explicit
//! operator/scope stack. The parser has already enforced balanced
//! parentheses and operand placement, so conversion cannot fail and has no
//! error outcome.

use arith_parser::{Op, Token};

/// Reorder a validated infix token sequence into postfix order.
///
/// Operands keep their relative order; each operator moves behind its
/// operands; parentheses never appear in the output.
pub fn infix_to_postfix(infix: Vec<Token>) -> Vec<Token> {
    let mut postfix = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in infix {
        match token {
            Token::Operand(_) => postfix.push(token),
            Token::OpenParen => stack.push(token),
            Token::CloseParen => {
                // Unwind to the matching opening scope, which is dropped.
                while let Some(top) = stack.pop() {
                    if matches!(top, Token::OpenParen) {
                        break;
                    }
                    postfix.push(top);
                }
            }
            Token::Operator(incoming) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if !outranks(top, incoming) {
                        break;
                    }
                    stack.pop();
                    postfix.push(Token::Operator(top));
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        postfix.push(top);
    }

    postfix
}

/// Whether the stacked operator binds at least as tightly as the incoming
/// one. Equal precedence normally pops (left association); the
/// right-associative `^` instead stops the unwinding, so `2^3^2` groups as
/// `2^(3^2)`.
fn outranks(top: Op, incoming: Op) -> bool {
    if top.precedence() == incoming.precedence() && incoming.is_right_assoc() {
        return false;
    }
    top.precedence() >= incoming.precedence()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_parser::Parser;
    use pretty_assertions::assert_eq;

    fn postfix_text(source: &str) -> String {
        let tokens = Parser::parse(source).expect("valid expression");
        infix_to_postfix(tokens)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    // =========================================================================
    // Precedence and associativity
    // =========================================================================

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(postfix_text("1+2*3"), "1 2 3 * +");
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(postfix_text("8-4-2"), "8 4 - 2 -");
        assert_eq!(postfix_text("2*3%4"), "2 3 * 4 %");
    }

    #[test]
    fn test_exponentiation_is_right_associative() {
        assert_eq!(postfix_text("2^3^2"), "2 3 2 ^ ^");
    }

    #[test]
    fn test_exponentiation_outranks_everything() {
        assert_eq!(postfix_text("2*3^4"), "2 3 4 ^ *");
        assert_eq!(postfix_text("2^3*4"), "2 3 ^ 4 *");
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix_text("(1+2)*3"), "1 2 + 3 *");
    }

    #[test]
    fn test_parenthesized_exponent() {
        assert_eq!(postfix_text("2^(1+1)"), "2 1 1 + ^");
    }

    #[test]
    fn test_redundant_parentheses_disappear() {
        assert_eq!(postfix_text("((2))"), "2");
    }

    #[test]
    fn test_single_operand_passes_through() {
        assert_eq!(postfix_text("42"), "42");
    }

    // =========================================================================
    // Permutation properties
    // =========================================================================

    #[test]
    fn test_conversion_preserves_operand_and_operator_multiset() {
        for source in ["1+2*3", "(1+2)*(3-4)", "2^3^2%5", "((7))/(1+0)"] {
            let infix = Parser::parse(source).expect("valid expression");
            let postfix = infix_to_postfix(infix.clone());

            let keep = |tokens: &[Token]| {
                let mut kept: Vec<String> = tokens
                    .iter()
                    .filter(|t| t.is_operand() || t.is_operator())
                    .map(ToString::to_string)
                    .collect();
                kept.sort();
                kept
            };
            assert_eq!(keep(&infix), keep(&postfix), "multiset of {source:?}");

            assert!(
                postfix
                    .iter()
                    .all(|t| t.is_operand() || t.is_operator()),
                "no parentheses in postfix of {source:?}"
            );
        }
    }
}
