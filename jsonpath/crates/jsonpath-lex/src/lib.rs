//! jsonpath-lex - Lexical Analyzer for the JSONPath Query Language
//!
//! This crate provides a complete lexer (tokenizer) for JSONPath query
//! text such as `$.demo[?(@.attr > 2)]`. It transforms a query into a
//! flat, ordered stream of typed tokens consumed by the parser and by
//! editor tooling (syntax highlighting, incremental re-scan on edit).
//!
//! # Overview
//!
//! The lexer is a single-pass, pull-based state machine. Every call to
//! [`Lexer::next_token`] consumes one token's worth of characters and
//! returns it; the stream ends with `None`. Three guarantees hold for
//! arbitrary input:
//!
//! - **Total**: lexing never fails and never panics. Unrecognized
//!   characters and unterminated strings or regexes become
//!   [`TokenKind::BadCharacter`] tokens, and scanning continues.
//! - **Lossless**: tokens are contiguous and cover every byte of the
//!   input, whitespace included; concatenating their texts reproduces
//!   the source exactly.
//! - **Resumable**: [`Lexer::checkpoint`] returns an `(offset,
//!   [`ScanState`])` pair from which [`Lexer::resume`] continues
//!   exactly as a from-scratch scan would, so editors can re-lex only
//!   the edited tail of a document.
//!
//! # Example Usage
//!
//! ```
//! use jsonpath_lex::{Lexer, TokenKind};
//! use jsonpath_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("$.store.book[*]", &handler);
//!
//! // Iterate through tokens
//! for token in &mut lexer {
//!     println!("{:?} {:?}", token.kind, token.text);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new("$[0]", &handler);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Root);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token-kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classification predicates
//!
//! # Token Categories
//!
//! - **Anchors**: `$` (root), `@` (current node)
//! - **Path structure**: `.`, `..`, `[`, `]`, `*`, quoted segments
//! - **Filter syntax**: `?`, `(`, `)`, `{`, `}`, `,`, `:`
//! - **Comparisons**: `==`, `!=`, `>`, `>=`, `<`, `<=`, `=~`, `&&`,
//!   `||`, `-`, and named operators such as `in` and `contains`
//! - **Literals**: integers, decimals, `'…'`/`"…"` strings,
//!   `/…/flags` regexes, `true`, `false`, `null`
//! - **Whitespace** and **bad characters** round out the stream so it
//!   covers the whole input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer, ResumeError, ScanState};
pub use token::{keyword_from_ident, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use jsonpath_util::Handler;

    /// Helper to collect all tokens from a query as (kind, text) pairs.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        let handler = Handler::new();
        tokenize(source, &handler)
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_root_index() {
        assert_eq!(
            lex_all("$[0]"),
            vec![
                (TokenKind::Root, "$".to_string()),
                (TokenKind::LBracket, "[".to_string()),
                (TokenKind::IntegerNumber, "0".to_string()),
                (TokenKind::RBracket, "]".to_string()),
            ]
        );
    }

    #[test]
    fn test_negative_index() {
        assert_eq!(
            lex_all("@[-100]"),
            vec![
                (TokenKind::At, "@".to_string()),
                (TokenKind::LBracket, "[".to_string()),
                (TokenKind::IntegerNumber, "-100".to_string()),
                (TokenKind::RBracket, "]".to_string()),
            ]
        );
    }

    #[test]
    fn test_dotted_paths() {
        assert_eq!(
            kinds("$.long.path.with.root"),
            vec![
                TokenKind::Root,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_recursive_descent() {
        assert_eq!(
            lex_all("$..path"),
            vec![
                (TokenKind::Root, "$".to_string()),
                (TokenKind::DotDot, "..".to_string()),
                (TokenKind::Identifier, "path".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_path() {
        assert_eq!(
            lex_all("$.['quoted'].path"),
            vec![
                (TokenKind::Root, "$".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::LBracket, "[".to_string()),
                (TokenKind::SingleQuotedString, "'quoted'".to_string()),
                (TokenKind::RBracket, "]".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Identifier, "path".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_path_with_escape() {
        let tokens = lex_all(r#"$.["quo\ted"]"#);
        assert_eq!(
            tokens[3],
            (TokenKind::DoubleQuotedString, r#""quo\ted""#.to_string())
        );
    }

    #[test]
    fn test_filter_with_double_literal() {
        let tokens = lex_all("$.demo[?(@.filter == 7.2)]");
        assert!(tokens.contains(&(TokenKind::EqOp, "==".to_string())));
        assert!(tokens.contains(&(TokenKind::DoubleNumber, "7.2".to_string())));
    }

    #[test]
    fn test_filter_with_literals() {
        assert!(kinds("$.demo[?(@.a == true)]").contains(&TokenKind::True));
        assert!(kinds("$.demo[?(@.a != false)]").contains(&TokenKind::False));
        assert!(kinds("$.demo[?(@.a != null)]").contains(&TokenKind::Null));
        assert!(kinds("$.demo[?(@.a != 'value')]").contains(&TokenKind::SingleQuotedString));
    }

    #[test]
    fn test_boolean_operations_fused() {
        // Comparison operators fuse with their operands when no
        // whitespace separates them.
        assert_eq!(
            kinds("$.demo[?(@.a>=10 && $.b<=2)]"),
            vec![
                TokenKind::Root,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LBracket,
                TokenKind::Question,
                TokenKind::LParen,
                TokenKind::At,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::GeOp,
                TokenKind::IntegerNumber,
                TokenKind::WhiteSpace,
                TokenKind::AndOp,
                TokenKind::WhiteSpace,
                TokenKind::Root,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LeOp,
                TokenKind::IntegerNumber,
                TokenKind::RParen,
                TokenKind::RBracket,
            ]
        );
    }

    #[test]
    fn test_index_expression_minus_is_separate() {
        let tokens = lex_all("$.demo[(@.length - 1)]");
        let minus = tokens
            .iter()
            .position(|(k, _)| *k == TokenKind::MinusOp)
            .unwrap();
        assert_eq!(tokens[minus].1, "-");
        assert_eq!(tokens[minus + 1].0, TokenKind::WhiteSpace);
        assert_eq!(
            tokens[minus + 2],
            (TokenKind::IntegerNumber, "1".to_string())
        );
    }

    #[test]
    fn test_regex_with_flags_is_one_token() {
        let tokens = lex_all("$.demo[?(@.attr =~ /[0-9]/iu)]");
        assert!(tokens.contains(&(TokenKind::ReOp, "=~".to_string())));
        assert!(tokens.contains(&(TokenKind::RegexString, "/[0-9]/iu".to_string())));
    }

    #[test]
    fn test_wildcard_and_multiply_positions() {
        // Both stars lex as Star; expression position is the parser's
        // concern.
        let tokens = lex_all("$.demo[*].demo[?(@.attr * 2 == 10)]");
        let stars: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| *k == TokenKind::Star)
            .collect();
        assert_eq!(stars.len(), 2);
        assert!(!tokens.iter().any(|(k, _)| *k == TokenKind::MultiplyOp));
    }

    #[test]
    fn test_array_literal_in_condition() {
        assert_eq!(
            kinds("@[?(@.attr in [1, 2, 3])]"),
            vec![
                TokenKind::At,
                TokenKind::LBracket,
                TokenKind::Question,
                TokenKind::LParen,
                TokenKind::At,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::WhiteSpace,
                TokenKind::NamedOp,
                TokenKind::WhiteSpace,
                TokenKind::LBracket,
                TokenKind::IntegerNumber,
                TokenKind::Comma,
                TokenKind::WhiteSpace,
                TokenKind::IntegerNumber,
                TokenKind::Comma,
                TokenKind::WhiteSpace,
                TokenKind::IntegerNumber,
                TokenKind::RBracket,
                TokenKind::RParen,
                TokenKind::RBracket,
            ]
        );
    }

    #[test]
    fn test_object_literal_in_condition() {
        let tokens = lex_all("$[?(@.attr in {'a': 1, 'b': { }, 'c': [1, 2]})]");
        assert!(tokens.contains(&(TokenKind::LBrace, "{".to_string())));
        assert!(tokens.contains(&(TokenKind::RBrace, "}".to_string())));
        assert!(tokens.contains(&(TokenKind::Colon, ":".to_string())));
        assert!(tokens.contains(&(TokenKind::SingleQuotedString, "'a'".to_string())));
    }

    #[test]
    fn test_named_operator_and_member_name() {
        let tokens = lex_all("$.x[?(@.a in $.b)].in.avg()");
        let in_tokens: Vec<_> = tokens.iter().filter(|(_, t)| t == "in").collect();
        assert_eq!(in_tokens.len(), 2);
        assert_eq!(in_tokens[0].0, TokenKind::NamedOp);
        assert_eq!(in_tokens[1].0, TokenKind::Identifier);
        assert!(tokens.contains(&(TokenKind::Identifier, "avg".to_string())));
    }

    #[test]
    fn test_contains_operator() {
        let tokens = lex_all("@[?([1] contains 1)]");
        assert!(tokens.contains(&(TokenKind::NamedOp, "contains".to_string())));
    }

    #[test]
    fn test_losslessness_of_scenarios() {
        let scenarios = [
            "$[0]",
            "@[-100]",
            "$.demo[?(@.filter == 7.2)]",
            "$.demo[(@.length - 1)]",
            "$.demo[?(@.attr =~ /[0-9]/iu)]",
            "$.['quoted'].path",
            "$[?(@.attr in {'a': 1, 'b': { }, 'c': [1, 2]})]",
            "'unterminated",
            "/unterminated",
            "a # b",
        ];
        for source in scenarios {
            let rebuilt: String = lex_all(source).into_iter().map(|(_, t)| t).collect();
            assert_eq!(rebuilt, source, "lossless for {:?}", source);
        }
    }
}
