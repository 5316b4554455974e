use super::{Function, Operation, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic expression evaluator
///
/// `term (operator term)*`, strictly left to right with no precedence.
/// A term is a decimal literal, a variable, or `@(n)` / `@(v)`. A
/// leading `-` negates the one term it is attached to. Evaluation stops
/// at the end of the text, a newline, a comma, or a space.

fn is_terminator(ch: u8) -> bool {
    matches!(ch, b'\n' | b'\0' | b',' | b' ')
}

pub fn eval(var: &Var, expr: &str) -> Result<i32> {
    let expr = expr.as_bytes();
    let at = |i: usize| expr.get(i).copied().unwrap_or(b'\0');
    if at(0) == b'\n' || at(0) == b'\0' {
        return Err(error!(ExpressionEmpty));
    }
    if let Some(result) = Function::find(var, expr) {
        return result;
    }

    let mut p = 0;
    let mut lvalue: i32 = 0;
    let mut rvalue: i32 = 0;
    let mut operator: Option<u8> = None;
    loop {
        let negate = at(p) == b'-';
        if negate {
            p += 1;
        }
        if is_terminator(at(p)) {
            if let Some(op) = operator {
                lvalue = Operation::apply(lvalue, op, rvalue)?;
            }
            return Ok(lvalue);
        }

        rvalue = if at(p).is_ascii_digit() {
            let mut value: i32 = 0;
            while at(p).is_ascii_digit() {
                value = value
                    .wrapping_mul(10)
                    .wrapping_add(i32::from(at(p) - b'0'));
                p += 1;
            }
            value
        } else if at(p).is_ascii_lowercase() {
            p += 1;
            var.fetch(at(p - 1))
        } else if at(p) == b'@' && at(p + 1) == b'(' {
            p += 2;
            let mut index: i32 = 0;
            while at(p).is_ascii_digit() {
                index = index.wrapping_mul(10).wrapping_add(i32::from(at(p) - b'0'));
                p += 1;
            }
            if at(p).is_ascii_lowercase() {
                index = var.fetch(at(p));
                p += 1;
            }
            if at(p) != b')' {
                return Err(error!(MissingParen));
            }
            p += 1;
            var.fetch_array(index)?
        } else {
            return Err(error!(BadExpression));
        };
        if negate {
            rvalue = rvalue.wrapping_neg();
        }

        if is_terminator(at(p)) {
            return match operator {
                Some(op) => Operation::apply(lvalue, op, rvalue),
                None => Ok(rvalue),
            };
        }
        if let Some(op) = operator.take() {
            lvalue = Operation::apply(lvalue, op, rvalue)?;
            rvalue = 0;
            if Operation::is_operator(at(p)) {
                operator = Some(at(p));
                p += 1;
            }
        } else if Operation::is_operator(at(p)) {
            operator = Some(at(p));
            p += 1;
            lvalue = rvalue;
            rvalue = 0;
        }
    }
}
