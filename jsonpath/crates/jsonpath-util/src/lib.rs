//! jsonpath-util - Foundation Types for JSONPath Tooling
//!
//! This crate provides the small set of types shared by the JSONPath
//! lexer and its consumers (parser, editor integration):
//!
//! - [`Span`] - byte-offset ranges into source text
//! - [`diagnostic`] - diagnostic collection for reporting lexical
//!   anomalies to users
//!
//! The types here carry no dependency on the lexer itself so that
//! downstream crates (parser, evaluator) can reuse them without pulling
//! in tokenization.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::Span;
