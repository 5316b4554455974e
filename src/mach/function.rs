use super::Var;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// ## Built in functions
///
/// Functions are found by substring anywhere in the expression text,
/// not by position, and each one stands for the whole expression.

pub struct Function {}

impl Function {
    pub fn find(var: &Var, expr: &[u8]) -> Option<Result<i32>> {
        let text = std::str::from_utf8(expr).ok()?;
        if let Some(start) = text.find("abs(") {
            return Some(Function::abs(var, &expr[start + 4..]));
        }
        if text.contains("random()") {
            return Some(Ok(Function::random()));
        }
        None
    }

    /// The argument must be a single variable.
    pub fn abs(var: &Var, arg: &[u8]) -> Result<i32> {
        match arg {
            [name, b')', ..] if name.is_ascii_lowercase() => Ok(var.fetch(*name).wrapping_abs()),
            [name, ..] if name.is_ascii_lowercase() => Err(error!(MissingParen)),
            _ => Err(error!(BadExpression)),
        }
    }

    pub fn random() -> i32 {
        rand::thread_rng().gen_range(0..=i32::MAX)
    }
}
