use std::fmt;

use super::token::Operator;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    Number(u32),
    Binary {
        lhs: Box<Expression>,
        op: Operator,
        rhs: Box<Expression>,
    },
    /// Juxtaposed factors. Always holds at least two items.
    Concat(Vec<Expression>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Binary { lhs, op, rhs } => write!(f, "({} {lhs} {rhs})", op.word()),
            Self::Concat(items) => {
                write!(f, "(concat")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
