//! # Annotation Pipeline
//!
//! Runs every scanner over one document snapshot and hands the results to
//! the UI collaborators.
//!
//! Each call to [`Annotator::annotate`] takes a fresh [`ScanGeneration`].
//! [`Annotator::publish`] only delivers the latest one, so a slow scan that
//! finishes after a newer edit is dropped instead of overwriting it.

use std::fmt;

use serde::Serialize;
use xi_rope::Rope;

use crate::{
    counting::DocumentStats,
    highlight::{HighlightMap, merge},
    parsing::{
        Heading, ParsedDoc, headings_in, inline::scan_inline_styles, parse_document, parse_rope,
    },
    spelling::{Dictionary, scan_spelling},
};

/// Monotonic scan counter, one per submitted snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ScanGeneration(u64);

impl ScanGeneration {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ScanGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotatorOptions {
    /// Count spaces, tabs and newlines as characters.
    pub include_spaces: bool,
}

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    pub highlights: HighlightMap,
    pub stats: DocumentStats,
    pub headings: Vec<Heading>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub generation: ScanGeneration,
    pub annotations: Annotations,
}

/// Receives published annotations. Implemented by the status bar, outline
/// and editor views.
pub trait AnnotationSink {
    fn update_stats(&mut self, stats: DocumentStats);
    fn update_outline(&mut self, headings: &[Heading]);
    fn update_highlights(&mut self, highlights: &HighlightMap);
}

pub struct Annotator<'d> {
    dictionary: Option<&'d dyn Dictionary>,
    options: AnnotatorOptions,
    latest: ScanGeneration,
}

impl<'d> Annotator<'d> {
    pub fn new(dictionary: Option<&'d dyn Dictionary>) -> Self {
        Self {
            dictionary,
            options: AnnotatorOptions::default(),
            latest: ScanGeneration::default(),
        }
    }

    pub fn with_options(mut self, options: AnnotatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> AnnotatorOptions {
        self.options
    }

    /// The generation of the most recently submitted scan.
    pub fn latest(&self) -> ScanGeneration {
        self.latest
    }

    /// Annotates a text snapshot against a caller-owned base map.
    pub fn annotate(&mut self, text: &str, base: &HighlightMap) -> Annotated {
        let doc = parse_document(text);
        self.run(&doc, text, base)
    }

    /// Annotates a rope snapshot against a caller-owned base map.
    pub fn annotate_rope(&mut self, rope: &Rope, base: &HighlightMap) -> Annotated {
        let doc = parse_rope(rope);
        let text = rope.slice_to_cow(0..rope.len());
        self.run(&doc, &text, base)
    }

    fn run(&mut self, doc: &ParsedDoc<'_>, text: &str, base: &HighlightMap) -> Annotated {
        self.latest = self.latest.next();
        let generation = self.latest;

        let spelling = scan_spelling(doc, self.dictionary);
        let styles = scan_inline_styles(doc);
        let highlights = merge(base, &spelling, &styles);
        let stats = DocumentStats::of(text, self.options.include_spaces);
        let headings = headings_in(doc);

        log::debug!(
            "Scan {generation}: {} lines, {} spelling spans, {} style spans, {} words",
            doc.len(),
            spelling.span_count(),
            styles.span_count(),
            stats.words
        );

        Annotated {
            generation,
            annotations: Annotations {
                highlights,
                stats,
                headings,
            },
        }
    }

    /// Delivers `annotated` to `sink` if it is still the latest scan.
    ///
    /// Returns `false` and leaves the sink untouched for a superseded scan.
    pub fn publish(&self, annotated: &Annotated, sink: &mut dyn AnnotationSink) -> bool {
        if annotated.generation != self.latest {
            log::debug!(
                "Dropping stale scan {} (latest is {})",
                annotated.generation,
                self.latest
            );
            return false;
        }
        let a = &annotated.annotations;
        sink.update_stats(a.stats);
        sink.update_outline(&a.headings);
        sink.update_highlights(&a.highlights);
        true
    }
}
