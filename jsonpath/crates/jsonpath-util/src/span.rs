//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into a source
//! buffer. Query sources are short single buffers, so spans carry byte
//! offsets only; callers that need line/column information can derive
//! it from the source text.

/// Source location span.
///
/// A `Span` represents a contiguous byte range in source text. The
/// range is half-open: `start` is included, `end` is not.
///
/// # Examples
///
/// ```
/// use jsonpath_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(10));
/// assert!(!span.contains(20));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let point = Span::point(5);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(25));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if this span contains another span
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let merged = Span::new(10, 20).merge(Span::new(25, 35));
    /// assert_eq!(merged, Span::new(10, 35));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Join two adjacent spans into a single span
    ///
    /// Returns `None` if the spans are not adjacent (self.end != other.start).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let joined = Span::new(10, 20).join(Span::new(20, 30));
    /// assert_eq!(joined, Some(Span::new(10, 30)));
    /// assert_eq!(Span::new(10, 20).join(Span::new(25, 30)), None);
    /// ```
    #[inline]
    pub fn join(self, other: Span) -> Option<Span> {
        if self.end == other.start {
            Some(Span {
                start: self.start,
                end: other.end,
            })
        } else {
            None
        }
    }

    /// Extract the text this span covers from the given source
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds for `source` or does not lie
    /// on character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpath_util::span::Span;
    ///
    /// let source = "$.demo[*]";
    /// assert_eq!(Span::new(2, 6).text(source), "demo");
    /// ```
    #[inline]
    pub fn text(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
