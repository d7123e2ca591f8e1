//! Character cursor for traversing query source text.
//!
//! The `Cursor` maintains a byte position in the source string and
//! provides methods for advancing and peeking ahead. It handles UTF-8
//! correctly and can be created at any character boundary, which is
//! what makes resumable scanning possible.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use jsonpath_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("$.demo");
/// assert_eq!(cursor.current_char(), '$');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '.');
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Creates a cursor at the given byte position.
    ///
    /// The position must be at most `source.len()` and must lie on a
    /// character boundary; callers validate before constructing.
    pub(crate) fn at(source: &'a str, position: usize) -> Self {
        debug_assert!(source.is_char_boundary(position));
        Self { source, position }
    }

    /// Returns the character at the cursor position, or `'\0'` at the
    /// end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpath_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpath_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("..");
    /// assert_eq!(cursor.peek_char(0), '.');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(">=");
    /// assert!(cursor.match_char('>'));
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to
    /// the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("demo[*]");
    /// let start = cursor.position();
    /// for _ in 0..4 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "demo");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
