//! Operator and punctuation lexing.
//!
//! Multi-character operators are matched longest-first: `..` before
//! `.`, `>=` before `>`, `==` before the (invalid) lone `=`. Characters
//! that only open a two-character operator (`=`, `!`, `&`, `|`) become
//! bad-character tokens when the second character is missing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes dot or recursive descent.
    ///
    /// Handles: `.`, `..`
    pub(crate) fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            TokenKind::DotDot
        } else {
            TokenKind::Dot
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GeOp
        } else {
            TokenKind::GtOp
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LeOp
        } else {
            TokenKind::LtOp
        }
    }

    /// Lexes equality or regex match.
    ///
    /// Handles: `==`, `=~`. A lone `=` is not an operator in this
    /// grammar and becomes a bad character.
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqOp
        } else if self.cursor.match_char('~') {
            TokenKind::ReOp
        } else {
            self.report_error("unexpected character '=', expected '==' or '=~'".to_string());
            TokenKind::BadCharacter
        }
    }

    /// Lexes not-equals.
    ///
    /// Handles: `!=`. A lone `!` becomes a bad character.
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NeOp
        } else {
            self.report_error("unexpected character '!', expected '!='".to_string());
            TokenKind::BadCharacter
        }
    }

    /// Lexes logical and.
    ///
    /// Handles: `&&`. A lone `&` becomes a bad character.
    pub(crate) fn lex_ampersand(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            TokenKind::AndOp
        } else {
            self.report_error("unexpected character '&', expected '&&'".to_string());
            TokenKind::BadCharacter
        }
    }

    /// Lexes logical or.
    ///
    /// Handles: `||`. A lone `|` becomes a bad character.
    pub(crate) fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            TokenKind::OrOp
        } else {
            self.report_error("unexpected character '|', expected '||'".to_string());
            TokenKind::BadCharacter
        }
    }
}
