//! Quoted string lexing.
//!
//! Strings keep their delimiters and their escape sequences verbatim;
//! interpreting escapes is the consumer's business. A backslash only
//! prevents the following character from terminating the literal.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single- or double-quoted string literal.
    ///
    /// The dispatcher guarantees the cursor is on `'` or `"`. The token
    /// spans both delimiters. When the input ends before the closing
    /// quote, the whole consumed run becomes one bad-character token
    /// and a diagnostic describes the anomaly.
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated string literal".to_string());
                return TokenKind::BadCharacter;
            }

            let c = self.cursor.current_char();
            self.cursor.advance();

            if c == '\\' {
                // Consume the escaped character verbatim; at end of
                // input the loop reports the unterminated literal.
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else if c == quote {
                break;
            }
        }

        if quote == '\'' {
            TokenKind::SingleQuotedString
        } else {
            TokenKind::DoubleQuotedString
        }
    }
}
