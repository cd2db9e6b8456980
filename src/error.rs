#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ErrorKind {
    #[error("lex error: {0}")]
    LexError(String),
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),
    #[error("division by zero")]
    DivisionByZero,
    /// A concatenation whose joined text is not an integer, such as `1-1`.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

pub type PResult<T> = Result<T, ErrorKind>;
