//! Whitespace lexing.
//!
//! Whitespace is a real token here, not trivia to skip: editors need
//! the spans, and the token stream must cover every byte of the input.

use crate::classify::is_whitespace;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of whitespace as one token.
    pub(crate) fn lex_whitespace(&mut self) -> TokenKind {
        while is_whitespace(self.cursor.current_char()) {
            self.cursor.advance();
        }
        TokenKind::WhiteSpace
    }
}
