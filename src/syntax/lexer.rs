use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::token::Token;

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    done: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Token::Eof) => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            done: false,
        }
    }

    /// Returns the next token, or `Token::Eof` once the input is exhausted.
    /// Calling it again after that keeps returning `Token::Eof`.
    pub fn next_token(&mut self) -> PResult<Token> {
        self.skip_whitespace();

        let token = match self.chars.peek() {
            None => Token::Eof,
            Some(&(off, c)) if c.is_alphabetic() => self.read_word(off)?,
            Some(&(off, c)) => {
                return Err(ErrorKind::LexError(format!(
                    "Invalid character `{c}` at offset {off}"
                )))
            }
        };

        log::trace!("{token}");
        Ok(token)
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_word(&mut self, from_off: usize) -> PResult<Token> {
        let word = self.slice_until(from_off, |c| !c.is_alphabetic());
        Token::from_word(word).ok_or_else(|| {
            ErrorKind::LexError(format!("Invalid word `{word}` at offset {from_off}"))
        })
    }
}
