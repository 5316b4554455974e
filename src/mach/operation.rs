use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operators of the expression evaluator
///
/// Everything is 32-bit integer arithmetic that wraps on overflow.

pub struct Operation {}

impl Operation {
    pub fn is_operator(ch: u8) -> bool {
        matches!(
            ch,
            b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'E' | b'e' | b'~'
        )
    }

    pub fn apply(lhs: i32, operator: u8, rhs: i32) -> Result<i32> {
        match operator {
            b'+' => Ok(lhs.wrapping_add(rhs)),
            b'-' => Ok(lhs.wrapping_sub(rhs)),
            b'*' => Ok(lhs.wrapping_mul(rhs)),
            b'/' => Operation::divide(lhs, rhs),
            b'%' => Operation::modulo(lhs, rhs),
            b'&' => Ok(lhs & rhs),
            b'|' => Ok(lhs | rhs),
            b'^' => Ok(lhs ^ rhs),
            b'~' => Ok(!lhs),
            b'E' | b'e' => Operation::power(lhs, rhs),
            _ => Err(error!(UnknownOperand)),
        }
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    pub fn modulo(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs.wrapping_rem(rhs))
    }

    /// Same result as repeated wrapping multiplication, so `2E3` is 8.
    pub fn power(base: i32, exponent: i32) -> Result<i32> {
        if exponent < 0 {
            return Err(error!(BadExpression));
        }
        Ok(base.wrapping_pow(exponent as u32))
    }
}
