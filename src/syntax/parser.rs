use crate::{
    error::{ErrorKind, PResult},
    syntax::{lexer::Lexer, token::Token, ExprParser, Expression},
};

/// Deepest tree the parser will build. Evaluation, printing and dropping
/// all recurse over the tree, so a line past this is a syntax error rather
/// than a stack overflow.
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    pub(super) current: Token,
    /// Open `be` groups around the current token.
    pub(super) nesting: usize,
    /// Depth of the subtree most recently returned by a production.
    pub(super) depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> PResult<Self> {
        Self::with_lexer(Lexer::new(src))
    }

    pub fn with_lexer(mut lexer: Lexer<'src>) -> PResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            nesting: 0,
            depth: 0,
        })
    }

    /// Parses a whole line. Anything left over after the top-level
    /// expression is rejected.
    pub fn parse(&mut self) -> PResult<Expression> {
        let expr = self.parse_expr()?;

        if self.current != Token::Eof {
            return Err(ErrorKind::InvalidSyntax(format!(
                "Expected end of input, found {}",
                self.current
            )));
        }

        log::debug!("parsed {expr}");
        Ok(expr)
    }

    #[inline(always)]
    pub(super) fn bump(&mut self) -> PResult<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    pub(super) fn check_depth(&self, depth: usize) -> PResult<usize> {
        if depth > MAX_DEPTH {
            return Err(ErrorKind::InvalidSyntax(format!(
                "Expression nested deeper than {MAX_DEPTH} levels"
            )));
        }
        Ok(depth)
    }

    pub(super) fn expect(&mut self, expected: Token) -> PResult<()> {
        if self.current == expected {
            return self.bump();
        }
        Err(ErrorKind::InvalidSyntax(format!(
            "Expected {expected}, found {}",
            self.current
        )))
    }
}

#[cfg(test)]
mod test {
    use super::{Parser, MAX_DEPTH};
    use crate::{
        error::ErrorKind,
        syntax::{token::Operator, Expression},
    };

    #[test]
    fn parse_flat_precedence() {
        use Expression::*;
        use Operator::*;

        let expr = Parser::new("this um that uh that").unwrap().parse().unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(2)),
                op: Add,
                rhs: Box::new(Number(1)),
            }),
            op: Multiply,
            rhs: Box::new(Number(1)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_grouping() {
        use Expression::*;
        use Operator::*;

        let expr = Parser::new("this umm be that uhh this gon")
            .unwrap()
            .parse()
            .unwrap();
        let expected = Binary {
            lhs: Box::new(Number(2)),
            op: Subtract,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(1)),
                op: FloorDivide,
                rhs: Box::new(Number(2)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_single_number_is_not_concat() {
        let expr = Parser::new("that").unwrap().parse().unwrap();
        assert_eq!(expr, Expression::Number(1));

        let expr = Parser::new("be be that gon gon").unwrap().parse().unwrap();
        assert_eq!(expr, Expression::Number(1));
    }

    #[test]
    fn parse_concat() {
        use Expression::*;

        let expr = Parser::new("that this the um that").unwrap().parse().unwrap();
        let expected = Binary {
            lhs: Box::new(Concat(vec![Number(1), Number(2), Number(0)])),
            op: Operator::Add,
            rhs: Box::new(Number(1)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_concat_with_grouping() {
        use Expression::*;

        let expr = Parser::new("that be this um that gon this")
            .unwrap()
            .parse()
            .unwrap();
        let expected = Concat(vec![
            Number(1),
            Binary {
                lhs: Box::new(Number(2)),
                op: Operator::Add,
                rhs: Box::new(Number(1)),
            },
            Number(2),
        ]);

        assert_eq!(expr, expected);
    }

    #[test]
    fn missing_rparen() {
        let err = Parser::new("be this um that").unwrap().parse().unwrap_err();
        assert_eq!(
            err,
            ErrorKind::InvalidSyntax("Expected Token(RPAREN, gon), found Token(EOF)".into())
        );
    }

    #[test]
    fn trailing_rparen_is_rejected() {
        let err = Parser::new("this gon").unwrap().parse().unwrap_err();
        assert_eq!(
            err,
            ErrorKind::InvalidSyntax(
                "Expected end of input, found Token(RPAREN, gon)".into()
            )
        );
    }

    #[test]
    fn operator_in_factor_position() {
        let result = Parser::new("um that").unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));

        let result = Parser::new("this um").unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));

        let result = Parser::new("this um uh that").unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));
    }

    #[test]
    fn empty_input() {
        let result = Parser::new("").unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));
    }

    #[test]
    fn deep_grouping_is_rejected() {
        let src = format!("{}that{}", "be ".repeat(5000), " gon".repeat(5000));
        let err = Parser::new(&src).unwrap().parse().unwrap_err();
        assert_eq!(
            err,
            ErrorKind::InvalidSyntax(format!(
                "Expression nested deeper than {MAX_DEPTH} levels"
            ))
        );
    }

    #[test]
    fn long_operator_chain_is_rejected() {
        let src = format!("that{}", " um that".repeat(50_000));
        let result = Parser::new(&src).unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));
    }

    #[test]
    fn depth_counts_the_whole_tree() {
        // neither the grouping nor the trailing chain is too deep alone
        let src = format!(
            "{}that{}{}",
            "be ".repeat(200),
            " um that gon".repeat(200),
            " um that".repeat(100)
        );
        let result = Parser::new(&src).unwrap().parse();
        assert!(matches!(result, Err(ErrorKind::InvalidSyntax(_))));
    }

    #[test]
    fn depth_within_limit() {
        let src = format!(
            "{}that{}",
            "be ".repeat(MAX_DEPTH - 1),
            " gon".repeat(MAX_DEPTH - 1)
        );
        let expr = Parser::new(&src).unwrap().parse().unwrap();
        assert_eq!(expr, Expression::Number(1));

        let src = format!("that{}", " um that".repeat(MAX_DEPTH - 1));
        assert!(Parser::new(&src).unwrap().parse().is_ok());
    }

    #[test]
    fn lex_error_on_first_token() {
        assert!(matches!(Parser::new("foo"), Err(ErrorKind::LexError(_))));
    }
}
