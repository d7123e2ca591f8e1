//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and resumable state
//! - `identifier` - Identifier, keyword and named-operator lexing
//! - `number` - Signed integer and decimal literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `regex` - Regex literal lexing
//! - `string` - Quoted string lexing
//! - `whitespace` - Whitespace run lexing

mod core;
mod identifier;
mod number;
mod operator;
mod regex;
mod string;
mod whitespace;

pub use core::{tokenize, Lexer, ResumeError, ScanState};
