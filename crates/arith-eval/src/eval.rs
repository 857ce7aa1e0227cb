//! Postfix evaluation.
//!
//! Walks a postfix token sequence with a single value stack. Arithmetic is
//! carried out in `i64`, strictly wider than the public `i16` result range,
//! so an out-of-range result is detected rather than wrapped.

use crate::EvalError;
use arith_parser::{Op, Token};

/// Working type for intermediate values.
type Wide = i64;

const RANGE_MIN: Wide = i16::MIN as Wide;
const RANGE_MAX: Wide = i16::MAX as Wide;

/// Evaluate a postfix token sequence to a single bounded integer.
///
/// The sequence must be well-formed postfix, which parsing and conversion
/// upstream guarantee; an operand-arity violation is a programming error
/// and panics rather than reporting.
///
/// The first arithmetic error wins: later operators still execute so the
/// walk completes, but they never overwrite or clear a recorded error.
pub fn evaluate(postfix: &[Token]) -> Result<i16, EvalError> {
    let mut stack: Vec<Wide> = Vec::with_capacity(postfix.len());
    let mut failure: Option<EvalError> = None;

    for token in postfix {
        match token {
            Token::Operand(text) => {
                let value = text
                    .parse::<Wide>()
                    .expect("operand text validated by the parser");
                stack.push(value);
            }
            Token::Operator(op) => {
                // Right operand is on top.
                let rhs = stack.pop().expect("operator missing its right operand");
                let lhs = stack.pop().expect("operator missing its left operand");

                match apply(*op, lhs, rhs) {
                    Ok(wide) => {
                        if failure.is_none() && !(RANGE_MIN..=RANGE_MAX).contains(&wide) {
                            failure = Some(EvalError::NumericOverflow);
                        }
                        // Out-of-range values stay on the stack so later
                        // operators keep their operand count.
                        stack.push(wide);
                    }
                    Err(err) => {
                        if failure.is_none() {
                            failure = Some(err);
                        }
                        // Placeholder; unobservable once an error is
                        // recorded.
                        stack.push(0);
                    }
                }
            }
            Token::OpenParen | Token::CloseParen => {
                unreachable!("parentheses are dropped by infix-to-postfix conversion")
            }
        }
    }

    if let Some(err) = failure {
        return Err(err);
    }

    let result = stack.pop().expect("postfix sequence produced no value");
    Ok(i16::try_from(result).expect("in-range result checked per operator"))
}

/// Apply one operator to its operands in the wide working type.
///
/// Saturates at the `i64` limits: a saturated value is far outside the
/// bounded result range, so the overflow check still fires.
fn apply(op: Op, lhs: Wide, rhs: Wide) -> Result<Wide, EvalError> {
    match op {
        Op::Add => Ok(lhs.saturating_add(rhs)),
        Op::Sub => Ok(lhs.saturating_sub(rhs)),
        Op::Mul => Ok(lhs.saturating_mul(rhs)),
        Op::Div if rhs == 0 => Err(EvalError::DivisionByZero),
        Op::Div => Ok(lhs.wrapping_div(rhs)),
        Op::Rem if rhs == 0 => Err(EvalError::DivisionByZero),
        Op::Rem => Ok(lhs.wrapping_rem(rhs)),
        Op::Pow => Ok(int_pow(lhs, rhs)),
    }
}

/// Integer exponentiation, truncating toward zero for negative exponents.
fn int_pow(base: Wide, exp: Wide) -> Wide {
    if exp < 0 {
        // 1 / base^|exp|, truncated.
        return match base {
            0 => Wide::MAX,
            1 => 1,
            -1 if exp % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
    }
    let exp = u32::try_from(exp).unwrap_or(u32::MAX);
    base.saturating_pow(exp)
}
