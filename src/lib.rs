//! # Tiny BASIC
//!
//! A line-oriented integer BASIC in the spirit of the small interpreters
//! of the late 1970s.
//!
//! Run the executable and type numbered lines to build a program, then
//! `run` it. A line with only a number deletes that line.
//! ```text
//! Ok> 10 print "hello"
//! Ok> run
//! hello
//! ```
//!
//! Variables are the integers `a` to `z`, the text variables `a$` to
//! `z$`, and one integer array `@()` sized with `DIM`. Expressions are
//! evaluated strictly left to right.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
