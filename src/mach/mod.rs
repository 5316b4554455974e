/*!
## Rust Machine Module

This Rust module is the interpreter for BASIC. Lines are executed
straight from their stored text; there is no compile step.

*/

/// Where execution is. Running at an address runs the first stored line
/// whose number is equal or greater.
pub type Address = crate::lang::LineNumber;

mod config;
mod eval;
mod file;
mod function;
mod listing;
mod logic;
mod operation;
mod print;
mod runtime;
mod stack;
mod statement;
mod var;

pub use config::Config;
pub use eval::eval;
pub use file::DiskFile;
pub use function::Function;
pub use listing::Listing;
pub use logic::eval_logic;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::ForLoop;
pub use runtime::Halt;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
