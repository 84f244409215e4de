//! # Highlights
//!
//! Typed span layers produced by the scanners, the renderer-facing highlight
//! map, and the merge that combines them.

pub mod merge;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::parsing::rope::Span;

pub use merge::merge;

/// Style tag for spans the engine produces.
///
/// `as_str` gives the category name the renderer's theme is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanCategory {
    SpellError,
    CodeMarker,
    InlineCode,
    BoldMarker,
    Bold,
    ItalicMarker,
    Italic,
}

impl SpanCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            SpanCategory::SpellError => "spell.error",
            SpanCategory::CodeMarker => "code.marker",
            SpanCategory::InlineCode => "inline_code",
            SpanCategory::BoldMarker => "bold.marker",
            SpanCategory::Bold => "bold",
            SpanCategory::ItalicMarker => "italic.marker",
            SpanCategory::Italic => "italic",
        }
    }
}

impl fmt::Display for SpanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column span tagged with an engine category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    pub span: Span,
    pub category: SpanCategory,
}

impl StyledSpan {
    pub fn new(start: usize, end: usize, category: SpanCategory) -> Self {
        Self {
            span: Span::new(start, end),
            category,
        }
    }
}

/// Spans produced by one scanner, keyed by 0-based row.
///
/// Rows without spans are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightLayer {
    rows: BTreeMap<usize, Vec<StyledSpan>>,
}

impl HighlightLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the spans for `row`; an empty list is dropped.
    pub fn insert(&mut self, row: usize, spans: Vec<StyledSpan>) {
        if !spans.is_empty() {
            self.rows.insert(row, spans);
        }
    }

    pub fn get(&self, row: usize) -> &[StyledSpan] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[StyledSpan])> + '_ {
        self.rows.iter().map(|(row, spans)| (*row, spans.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows carrying at least one span.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn span_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }
}

/// Renderer-facing highlight entry.
///
/// Categories are free-form strings because the base map comes from an
/// external syntax highlighter (`"heading"`, `"keyword"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub category: String,
}

impl Highlight {
    pub fn new(start: usize, end: usize, category: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category: category.into(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl From<StyledSpan> for Highlight {
    fn from(s: StyledSpan) -> Self {
        Highlight::new(s.span.start, s.span.end, s.category.as_str())
    }
}

/// Per-row render instructions, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    rows: BTreeMap<usize, Vec<Highlight>>,
}

impl HighlightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `highlight` after any existing entries for `row`.
    pub fn push(&mut self, row: usize, highlight: Highlight) {
        self.rows.entry(row).or_default().push(highlight);
    }

    pub fn get(&self, row: usize) -> &[Highlight] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Highlight])> + '_ {
        self.rows.iter().map(|(row, hs)| (*row, hs.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_drops_empty_rows() {
        let mut layer = HighlightLayer::new();
        layer.insert(3, vec![]);
        assert!(layer.is_empty());
        assert!(layer.get(3).is_empty());
    }

    #[test]
    fn layer_counts() {
        let mut layer = HighlightLayer::new();
        layer.insert(0, vec![StyledSpan::new(0, 2, SpanCategory::BoldMarker)]);
        layer.insert(
            4,
            vec![
                StyledSpan::new(1, 3, SpanCategory::SpellError),
                StyledSpan::new(5, 9, SpanCategory::SpellError),
            ],
        );
        assert_eq!(layer.row_count(), 2);
        assert_eq!(layer.span_count(), 3);
        let rows: Vec<usize> = layer.iter().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![0, 4]);
    }

    #[test]
    fn styled_span_converts_to_named_highlight() {
        let h: Highlight = StyledSpan::new(2, 6, SpanCategory::InlineCode).into();
        assert_eq!(h, Highlight::new(2, 6, "inline_code"));
    }

    #[test]
    fn map_push_appends_in_order() {
        let mut map = HighlightMap::new();
        map.push(1, Highlight::new(0, 1, "heading.marker"));
        map.push(1, Highlight::new(2, 7, "heading"));
        let cats: Vec<&str> = map.get(1).iter().map(|h| h.category.as_str()).collect();
        assert_eq!(cats, vec!["heading.marker", "heading"]);
        assert!(map.get(0).is_empty());
    }
}
