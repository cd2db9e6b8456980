use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, Operator, Parser},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Lexes, parses and evaluates one line.
    pub fn eval(&self, src: &str) -> PResult<BigInt> {
        let expr = Parser::new(src)?.parse()?;
        let value = self.eval_expr(&expr)?;
        log::debug!("{expr} => {value}");
        Ok(value)
    }

    pub fn eval_expr(&self, expr: &Expression) -> PResult<BigInt> {
        match expr {
            Expression::Number(v) => Ok(BigInt::from(*v)),
            Expression::Binary { lhs, op, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                apply(*op, lhs, rhs)
            }
            Expression::Concat(items) => {
                let mut digits = String::new();
                for item in items {
                    digits.push_str(&self.eval_expr(item)?.to_string());
                }
                digits
                    .parse()
                    .map_err(|_| ErrorKind::InvalidNumber(digits))
            }
        }
    }
}

fn apply(op: Operator, lhs: BigInt, rhs: BigInt) -> PResult<BigInt> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::FloorDivide => {
            if rhs.is_zero() {
                return Err(ErrorKind::DivisionByZero);
            }
            Ok(lhs.div_floor(&rhs))
        }
    }
}
