use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    FloorDivide,
}

impl Operator {
    pub fn word(self) -> &'static str {
        match self {
            Self::Add => "um",
            Self::Subtract => "umm",
            Self::Multiply => "uh",
            Self::FloorDivide => "uhh",
        }
    }

    fn kind_name(self) -> &'static str {
        match self {
            Self::Add => "PLUS",
            Self::Subtract => "MINUS",
            Self::Multiply => "MUL",
            Self::FloorDivide => "FLDIV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Integer(u32),
    Op(Operator),
    LParen,
    RParen,
    Eof,
}

/// Every word the lexer accepts. Lookup is exact and case-sensitive.
const VOCABULARY: &[(&str, Token)] = &[
    ("the", Token::Integer(0)),
    ("that", Token::Integer(1)),
    ("this", Token::Integer(2)),
    ("um", Token::Op(Operator::Add)),
    ("umm", Token::Op(Operator::Subtract)),
    ("uh", Token::Op(Operator::Multiply)),
    ("uhh", Token::Op(Operator::FloorDivide)),
    ("be", Token::LParen),
    ("gon", Token::RParen),
];

impl Token {
    pub fn from_word(word: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, token)| *token)
    }

    /// The word this token was spelled with, if any.
    ///
    /// Integers are spelled with a word too, but their value is what
    /// matters, so only operators and parentheses report one.
    pub fn word(self) -> Option<&'static str> {
        match self {
            Self::Op(op) => Some(op.word()),
            Self::LParen => Some("be"),
            Self::RParen => Some("gon"),
            Self::Integer(_) | Self::Eof => None,
        }
    }

    fn kind_name(self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Op(op) => op.kind_name(),
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.word()) {
            (Self::Integer(v), _) => write!(f, "Token(INTEGER, {v})"),
            (_, Some(word)) => write!(f, "Token({}, {word})", self.kind_name()),
            (_, None) => write!(f, "Token({})", self.kind_name()),
        }
    }
}
