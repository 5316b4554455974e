use super::Var;
use crate::error;
use crate::lang::{atoi, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Logical evaluator for IF
///
/// Exactly `lhs operator rhs` with no spaces. The left side is a variable
/// or `@(v)`, the right side a literal or a variable. `&`, `|` and `^`
/// give back their raw bit pattern as the truth value.
pub fn eval_logic(var: &Var, expr: &str) -> Result<i32> {
    let bytes = expr.as_bytes();
    let at = |i: usize| bytes.get(i).copied().unwrap_or(b'\0');

    let (lvalue, mut p) = if at(0).is_ascii_lowercase() {
        (var.fetch(at(0)), 1)
    } else if at(0) == b'@' && at(1) == b'(' {
        if !at(2).is_ascii_lowercase() {
            return Err(error!(IndexMustBeVariable));
        }
        if at(3) != b')' {
            return Err(error!(MissingParen));
        }
        (var.fetch_array(var.fetch(at(2)))?, 4)
    } else {
        return Err(error!(LogicalEval));
    };

    let operator = at(p);
    p += 1;

    let rvalue = if at(p).is_ascii_digit() || at(p) == b'-' && at(p + 1).is_ascii_digit() {
        atoi(&expr[p..])
    } else if at(p).is_ascii_lowercase() {
        var.fetch(at(p))
    } else {
        return Err(error!(LogicalEval));
    };

    match operator {
        b'=' => Ok((lvalue == rvalue) as i32),
        b'#' => Ok((lvalue != rvalue) as i32),
        b'<' => Ok((lvalue < rvalue) as i32),
        b'>' => Ok((lvalue > rvalue) as i32),
        b'&' => Ok(lvalue & rvalue),
        b'|' => Ok(lvalue | rvalue),
        b'^' => Ok(lvalue ^ rvalue),
        _ => Err(error!(UnknownOperand)),
    }
}
