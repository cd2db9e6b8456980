mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub use expr::Expression;
pub use lexer::Lexer;
pub use parser::{Parser, MAX_DEPTH};
pub use token::{Operator, Token};

use crate::error::PResult;

/// The grammar productions, from loosest to tightest:
///
/// ```text
/// expr   := term ( (um | umm | uh | uhh) term )*
/// term   := factor factor*
/// factor := INTEGER | be expr gon
/// ```
///
/// All four operators share one level and associate to the left.
pub trait ExprParser {
    fn parse_expr(&mut self) -> PResult<Expression>;
    fn parse_term(&mut self) -> PResult<Expression>;
    fn parse_factor(&mut self) -> PResult<Expression>;
}
