//! Diagnostic module - Anomaly reporting infrastructure.
//!
//! The lexer never fails: malformed input is represented in the token
//! stream itself. It does, however, describe every anomaly it absorbs
//! through a caller-owned [`Handler`] so that the parser or editor can
//! surface user-visible messages with exact source locations.
//!
//! # Examples
//!
//! ```
//! use jsonpath_util::diagnostic::{DiagnosticBuilder, Handler};
//! use jsonpath_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .span(Span::new(3, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use jsonpath_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An anomaly the consumer should surface to the user
    Error,
    /// An anomaly the consumer may surface to the user
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location the diagnostic refers to
    pub span: Span,
    /// Optional suggestion for fixing the issue
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}..{}",
            self.level, self.message, self.span.start, self.span.end
        )
    }
}

/// Fluent builder for diagnostics
///
/// # Examples
///
/// ```
/// use jsonpath_util::diagnostic::{DiagnosticBuilder, Level};
/// use jsonpath_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '#'")
///     .span(Span::new(4, 5))
///     .help("remove the character or quote the member name")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    help: Option<String>,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span: Span::DUMMY,
            help: None,
        }
    }

    /// Start building a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span: Span::DUMMY,
            help: None,
        }
    }

    /// Attach a source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach a fix suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            help: self.help,
        }
    }

    /// Finish building and report through the handler
    pub fn emit(self, handler: &Handler) {
        handler.report(self.build());
    }
}

/// Collector for diagnostics
///
/// The handler uses interior mutability so that reporting requires only
/// a shared reference. A handler is owned by the caller of a tokenize
/// pass; separate passes with separate handlers are fully independent.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler with no diagnostics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Record an error with the given message and location
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.report(Diagnostic::error(message, span));
    }

    /// Record a warning with the given message and location
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.report(Diagnostic::warning(message, span));
    }

    /// Returns true if any error-level diagnostic was reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of diagnostics reported so far
    pub fn count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Clone out all diagnostics reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
