//! Edge case and invariant tests for jsonpath-lex
