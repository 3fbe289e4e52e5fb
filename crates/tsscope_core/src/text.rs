//! Source locations.
//!
//! Every node of the input tree carries a [`TextRange`]. The analyzer uses
//! ranges for textual ordering (temporal dead zone checks, reference order)
//! and diagnostics use [`TextSpan`].

use std::fmt;
use std::ops::Range;

/// A byte offset from the start of the source file.
pub type TextPos = u32;

/// A span defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A half-open range `[pos, end)` of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// Inclusive start offset.
    pub pos: TextPos,
    /// Exclusive end offset.
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// The length in bytes. Zero for inverted ranges.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// `end < pos`. Such a range never comes out of a well-formed tree.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.pos
    }

    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::new(self.pos, self.len())
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// Whether `other` lies entirely inside this range.
    #[inline]
    pub fn contains_range(&self, other: TextRange) -> bool {
        other.pos >= self.pos && other.end <= self.end
    }

    /// Whether this range ends at or before `other` starts.
    #[inline]
    pub fn precedes(&self, other: TextRange) -> bool {
        self.end <= other.pos
    }

    /// The smallest range covering both.
    pub fn cover(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

impl From<TextSpan> for TextRange {
    fn from(span: TextSpan) -> Self {
        TextRange::new(span.start, span.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_ordering_helpers() {
        let decl = TextRange::new(10, 20);
        let before = TextRange::new(2, 5);
        let inside = TextRange::new(12, 14);

        assert!(before.precedes(decl));
        assert!(!decl.precedes(before));
        assert!(decl.contains_range(inside));
        assert!(!decl.contains_range(before));
        assert_eq!(before.cover(decl), TextRange::new(2, 20));
    }

    #[test]
    fn test_inverted_range() {
        let r = TextRange::new(8, 3);
        assert!(r.is_inverted());
        assert_eq!(r.len(), 0);
        assert!(!TextRange::new(3, 3).is_inverted());
    }

    #[test]
    fn test_span_conversion() {
        let span: TextSpan = TextRange::new(5, 15).into();
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(TextRange::from(span), TextRange::new(5, 15));
    }
}
