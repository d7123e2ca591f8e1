//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the dispatch loop, and
//! the resumable scan state.

use jsonpath_util::{DiagnosticBuilder, Handler, Span};
use thiserror::Error;

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// The resumable scanning mode.
///
/// A `(offset, ScanState)` pair taken at any token boundary (see
/// [`Lexer::checkpoint`]) is enough to continue tokenizing as if the
/// whole input had been scanned from the start. The grammar is almost
/// context-free per token; the one exception is member-name position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Ordinary scanning; identifier runs get reserved-word lookup.
    #[default]
    Default,
    /// Immediately after `.` or `..` (whitespace does not clear it).
    /// Identifier runs are member names, so `in`, `true` and the other
    /// reserved words lex as plain identifiers here.
    MemberName,
}

/// Error returned when a resumption point is not usable.
///
/// Checkpoints produced by [`Lexer::checkpoint`] are always valid; this
/// guards callers that persist offsets across edits of the source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResumeError {
    /// The offset is past the end of the source.
    #[error("resume offset {offset} is past the end of the source ({len} bytes)")]
    OffsetOutOfBounds {
        /// The requested offset.
        offset: usize,
        /// Length of the source in bytes.
        len: usize,
    },
    /// The offset splits a multi-byte character.
    #[error("resume offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The requested offset.
        offset: usize,
    },
}

/// Lexer for JSONPath query text.
///
/// The lexer transforms query text into a stream of [`Token`]s covering
/// every byte of the input, whitespace and anomalies included. It never
/// fails: unrecognized or unterminated input becomes
/// [`TokenKind::BadCharacter`] tokens and a diagnostic on the handler,
/// and scanning continues.
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic handler anomalies are described to.
    handler: &'a Handler,

    /// Current resumable mode.
    pub(crate) state: ScanState,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer at the start of the given query text.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            state: ScanState::default(),
            token_start: 0,
        }
    }

    /// Creates a lexer resuming from a saved `(offset, state)` pair.
    ///
    /// Tokenizing from a checkpoint yields exactly the tokens a scan
    /// from the start would have produced after that offset. The offset
    /// must come from a token boundary for that equivalence to hold.
    pub fn resume(
        source: &'a str,
        offset: usize,
        state: ScanState,
        handler: &'a Handler,
    ) -> Result<Self, ResumeError> {
        if offset > source.len() {
            return Err(ResumeError::OffsetOutOfBounds {
                offset,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(offset) {
            return Err(ResumeError::NotCharBoundary { offset });
        }
        Ok(Self {
            cursor: Cursor::at(source, offset),
            handler,
            state,
            token_start: offset,
        })
    }

    /// Returns the `(offset, state)` pair that [`Lexer::resume`] accepts.
    ///
    /// Valid at any token boundary, i.e. before the first call to
    /// [`Lexer::next_token`] or right after any token was returned.
    pub fn checkpoint(&self) -> (usize, ScanState) {
        (self.cursor.position(), self.state)
    }

    /// Returns the next token, or `None` at the end of the input.
    ///
    /// This is the main entry point for tokenization. It inspects at
    /// most two characters of lookahead, dispatches to the matching
    /// sub-scanner, and always advances by at least one character.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return None;
        }

        let kind = match self.cursor.current_char() {
            c if classify::is_whitespace(c) => self.lex_whitespace(),
            '$' => self.single(TokenKind::Root),
            '@' => self.single(TokenKind::At),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '?' => self.single(TokenKind::Question),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            '*' => self.single(TokenKind::Star),
            '.' => self.lex_dot(),
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '-' if classify::is_digit(self.cursor.peek_char(1)) => self.lex_number(),
            '-' => self.single(TokenKind::MinusOp),
            c if classify::is_digit(c) => self.lex_number(),
            '\'' | '"' => self.lex_string(),
            '/' => self.lex_regex(),
            c if classify::is_ident_start(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report_error(format!("unexpected character '{}'", c));
                TokenKind::BadCharacter
            },
        };

        Some(self.finish(kind))
    }

    /// Consumes one character and returns the given kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds the token for the consumed range and updates the mode.
    fn finish(&mut self, kind: TokenKind) -> Token<'a> {
        let span = Span::new(self.token_start, self.cursor.position());
        debug_assert!(!span.is_empty(), "sub-scanner made no progress");

        self.state = match kind {
            TokenKind::Dot | TokenKind::DotDot => ScanState::MemberName,
            // Whitespace separates the dot from the member name without
            // ending member-name position.
            TokenKind::WhiteSpace => self.state,
            _ => ScanState::Default,
        };

        Token::new(kind, span, self.cursor.source())
    }

    /// Describes a lexical anomaly at the current token to the handler.
    ///
    /// The token stream is unaffected; the anomaly is still emitted as
    /// a [`TokenKind::BadCharacter`] token by the caller.
    pub(crate) fn report_error(&mut self, message: String) {
        let span = Span::new(self.token_start, self.cursor.position());
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes query text from the start.
///
/// Returns the lexer itself, which is a lazy iterator over the token
/// stream; collect it for a vector. Anomalies are described through the
/// handler as they are encountered.
///
/// # Example
///
/// ```
/// use jsonpath_lex::{tokenize, TokenKind};
/// use jsonpath_util::Handler;
///
/// let handler = Handler::new();
/// let kinds: Vec<TokenKind> = tokenize("$[0]", &handler).map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Root,
///         TokenKind::LBracket,
///         TokenKind::IntegerNumber,
///         TokenKind::RBracket,
///     ]
/// );
/// ```
pub fn tokenize<'a>(source: &'a str, handler: &'a Handler) -> Lexer<'a> {
    Lexer::new(source, handler)
}
