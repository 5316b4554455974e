/*!
# Rust Language Module

This Rust module holds the text-level pieces of BASIC: line numbers,
the stored `Line`, the keyword table, and the raw text cursor that
every statement handler scans with.

*/

pub type LineNumber = u16;

pub const MAX_LINE_NUMBER: LineNumber = 32767;

#[macro_use]
mod error;
mod keyword;
mod line;
mod text;

pub use error::Error;
pub use error::ErrorCode;
pub use keyword::Keyword;
pub use line::Line;
pub use text::{atoi, Text};

#[cfg(test)]
mod tests;
