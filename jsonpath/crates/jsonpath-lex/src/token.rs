//! Token type definitions.
//!
//! Tokens are flat values: a kind tag, a byte span, and the raw source
//! text the span covers. The lexer never interprets literal contents —
//! escape sequences, regex flags, and quote delimiters all appear
//! verbatim in `text`.

use jsonpath_util::Span;

/// The classification of a single token.
///
/// This is the exact set the parser and editor integration depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `$` - the document root anchor
    Root,
    /// `@` - the current-node anchor in filter expressions
    At,
    /// `.` - child member access
    Dot,
    /// `..` - recursive descent
    DotDot,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `?` - filter marker
    Question,
    /// `*` - always emitted for a star; the parser re-tags stars in
    /// expression position as [`TokenKind::MultiplyOp`]
    Star,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A member name or function name
    Identifier,
    /// An integer literal, optionally with a fused leading `-`
    IntegerNumber,
    /// A decimal literal like `7.2`, optionally with a fused leading `-`
    DoubleNumber,
    /// `'...'` including both delimiters, escapes verbatim
    SingleQuotedString,
    /// `"..."` including both delimiters, escapes verbatim
    DoubleQuotedString,
    /// `/.../flags` including delimiters and flag suffix
    RegexString,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `>`
    GtOp,
    /// `>=`
    GeOp,
    /// `<`
    LtOp,
    /// `<=`
    LeOp,
    /// `==`
    EqOp,
    /// `!=`
    NeOp,
    /// `=~` - regex match
    ReOp,
    /// `&&`
    AndOp,
    /// `||`
    OrOp,
    /// `-` when not fused into a number literal
    MinusOp,
    /// `*` in expression position; reserved for the parser, the lexer
    /// itself always emits [`TokenKind::Star`]
    MultiplyOp,
    /// A word operator such as `in` or `contains`
    NamedOp,
    /// A maximal run of whitespace
    WhiteSpace,
    /// An unrecognized character or an unterminated string/regex run
    BadCharacter,
}

impl TokenKind {
    /// Returns true for the kind that represents a lexical anomaly.
    ///
    /// The lexer never raises errors; consumers scan for this kind to
    /// decide whether and how to surface diagnostics.
    #[inline]
    pub fn is_anomaly(self) -> bool {
        self == TokenKind::BadCharacter
    }

    /// Returns true for whitespace, which separates tokens but carries
    /// no meaning to the parser.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self == TokenKind::WhiteSpace
    }
}

/// Looks up an identifier against the reserved-word table.
///
/// `true`, `false` and `null` map to their literal kinds; the named
/// comparison operators of the grammar map to [`TokenKind::NamedOp`].
/// Anything else is a plain identifier. The lookup is textual; the
/// driver skips it entirely for words in member-name position (after
/// `.` or `..`).
///
/// # Example
///
/// ```
/// use jsonpath_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("true"), Some(TokenKind::True));
/// assert_eq!(keyword_from_ident("in"), Some(TokenKind::NamedOp));
/// assert_eq!(keyword_from_ident("store"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "null" => Some(TokenKind::Null),
        "in" | "nin" | "contains" | "subsetof" | "anyof" | "noneof" | "size" | "empty" => {
            Some(TokenKind::NamedOp)
        },
        _ => None,
    }
}

/// A classified, contiguous substring of the query source.
///
/// Tokens are immutable once emitted. `text` is always exactly
/// `&source[span.start..span.end]`, so concatenating the texts of a
/// full token stream reproduces the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token classification.
    pub kind: TokenKind,
    /// Byte range in the source text (half-open).
    pub span: Span,
    /// The raw source text the span covers.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token over the given source slice.
    pub(crate) fn new(kind: TokenKind, span: Span, source: &'a str) -> Self {
        Self {
            kind,
            span,
            text: span.text(source),
        }
    }

    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Tokens are never empty; present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
