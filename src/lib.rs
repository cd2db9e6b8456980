//! An interpreter for arithmetic spelled out in filler words.
//!
//! `the`, `that` and `this` are the digits 0, 1 and 2. `um`, `umm`, `uh` and
//! `uhh` add, subtract, multiply and floor-divide, all at the same precedence
//! and left to right. `be` ... `gon` groups. Factors written next to each
//! other are glued together as decimal digits, so `that this` is 12.

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, PResult};
pub use num_bigint::BigInt;
use runtime::eval::Interpreter;

/// Evaluates one line of input.
///
/// Each call builds its own lexer, parser and tree, so a failed line has no
/// effect on the next one. Results are arbitrary precision.
pub fn interpret(text: &str) -> PResult<BigInt> {
    Interpreter::new().eval(text)
}
