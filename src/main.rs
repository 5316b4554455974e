//! # BASIC
//!
//! Tiny BASIC interpreter.
//!

fn main() {
    basic::term::main();
}
