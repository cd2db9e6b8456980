use crate::error::{ErrorKind, PResult};

use super::{token::Token, ExprParser, Expression, Parser};

impl<'src> ExprParser for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Expression> {
        let mut lhs = self.parse_term()?;
        let mut depth = self.depth;

        while let Token::Op(op) = self.current {
            self.bump()?;
            let rhs = self.parse_term()?;
            depth = self.check_depth(depth.max(self.depth) + 1)?;

            lhs = Expression::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }

        self.depth = depth;
        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult<Expression> {
        let first = self.parse_factor()?;

        if !starts_factor(self.current) {
            return Ok(first);
        }

        let mut depth = self.depth;
        let mut items = vec![first];
        while starts_factor(self.current) {
            items.push(self.parse_factor()?);
            depth = depth.max(self.depth);
        }

        self.depth = self.check_depth(depth + 1)?;
        Ok(Expression::Concat(items))
    }

    fn parse_factor(&mut self) -> PResult<Expression> {
        match self.current {
            Token::Integer(v) => {
                self.bump()?;
                self.depth = 1;
                Ok(Expression::Number(v))
            }
            Token::LParen => {
                self.nesting = self.check_depth(self.nesting + 1)?;
                self.bump()?;
                let expr = self.parse_expr()?;
                self.expect(Token::RParen)?;
                self.nesting -= 1;
                Ok(expr)
            }
            other => Err(ErrorKind::InvalidSyntax(format!(
                "Expected a number or `be`, found {other}"
            ))),
        }
    }
}

fn starts_factor(token: Token) -> bool {
    matches!(token, Token::Integer(_) | Token::LParen)
}
