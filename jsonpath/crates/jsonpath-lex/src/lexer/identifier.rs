//! Identifier, keyword and named-operator lexing.
//!
//! An identifier run is classified by text against the reserved-word
//! table, except in member-name position (right after `.` or `..`),
//! where `$.demo.in` and `$.demo.null` must stay plain member names.

use crate::classify::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::{Lexer, ScanState};

impl<'a> Lexer<'a> {
    /// Lexes an identifier, literal keyword, or named operator.
    ///
    /// The dispatcher guarantees the cursor is on an identifier-start
    /// character.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.state == ScanState::MemberName {
            return TokenKind::Identifier;
        }

        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
    }
}
