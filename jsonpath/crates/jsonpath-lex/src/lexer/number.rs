//! Number literal lexing.
//!
//! Numbers are scanned with maximal munch and no lookback: an optional
//! leading `-` is fused only when a digit follows it immediately, then
//! one or more digits, then an optional fraction. The same rule makes
//! `@[-100]` a single integer token and `@.length - 1` three tokens.

use crate::classify::is_digit;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or decimal literal.
    ///
    /// The dispatcher guarantees the cursor is on a digit, or on a `-`
    /// immediately followed by a digit.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `-100`
    /// - Decimal: `7.2`, `-0.5`
    ///
    /// A `.` not followed by a digit is left for the operator scanner,
    /// so `7.` lexes as `7` then `.`.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        if self.cursor.current_char() == '-' {
            self.cursor.advance();
        }

        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            while is_digit(self.cursor.current_char()) {
                self.cursor.advance();
            }
            TokenKind::DoubleNumber
        } else {
            TokenKind::IntegerNumber
        }
    }
}
