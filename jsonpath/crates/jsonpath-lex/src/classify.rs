//! Character classification for the JSONPath lexer.
//!
//! Pure predicates over single characters. These define the token
//! boundaries every sub-scanner agrees on.

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use jsonpath_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is valid as the start of a member name or
/// function name.
///
/// Letters (including non-ASCII letters, so paths over documents with
/// accented or CJK keys lex as identifiers) and `_` qualify.
///
/// # Example
///
/// ```
/// use jsonpath_lex::classify::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('é'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('$'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character is valid as a continuation of a member name.
///
/// All start characters plus decimal digits qualify.
///
/// # Example
///
/// ```
/// use jsonpath_lex::classify::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is whitespace as far as the query grammar is
/// concerned: space, tab, newline, or carriage return.
///
/// # Example
///
/// ```
/// use jsonpath_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
