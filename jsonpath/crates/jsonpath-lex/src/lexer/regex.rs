//! Regex literal lexing.
//!
//! `/` is unambiguous in this grammar (there is no division), so a
//! slash always opens a regex literal. The token spans the delimiters,
//! the body with escapes verbatim, and any trailing flag letters.

use crate::classify::is_ident_continue;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a regex literal with optional flag suffix.
    ///
    /// The dispatcher guarantees the cursor is on `/`. After the
    /// closing slash, identifier-continue characters are consumed
    /// greedily as flags (`/[0-9]/iu`). The flag letters themselves are
    /// not validated; delimiting the literal is all the lexer does.
    /// When the input ends before the closing slash, the consumed run
    /// becomes one bad-character token.
    pub(crate) fn lex_regex(&mut self) -> TokenKind {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated regular expression".to_string());
                return TokenKind::BadCharacter;
            }

            let c = self.cursor.current_char();
            self.cursor.advance();

            if c == '\\' {
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else if c == '/' {
                break;
            }
        }

        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        TokenKind::RegexString
    }
}
