//! # Parsing
//!
//! Line-oriented markdown recognition shared by every scanner.
//!
//! ## Modules
//!
//! - **`rope`**: `Span` and line splitting for `&str` and `Rope` snapshots
//! - **`kinds`**: line constructs that own their delimiters (fences, frontmatter, headings, lists)
//! - **`classify`**: `MarkdownLineClassifier`, the single frontmatter/fence state machine
//! - **`headings`**: ATX heading extraction for the outline
//! - **`inline`**: cursor-based inline style scanning (code, bold, italic)
//!
//! ## Key Invariants
//!
//! - Classification is recomputed from scratch on every pass
//! - Frontmatter and fenced code are raw zones: no heading, spelling or style scanning inside
//! - All spans are byte columns within a single line

pub mod classify;
pub mod headings;
pub mod inline;
pub mod kinds;
pub mod rope;

use std::borrow::Cow;

use xi_rope::Rope;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use headings::{Heading, extract_headings, extract_headings_raw, headings_in};
use rope::{rope_lines, split_lines};

/// An immutable, classified snapshot of a document.
#[derive(Debug, Clone)]
pub struct ParsedDoc<'a> {
    pub lines: Vec<Cow<'a, str>>,
    /// One entry per line, same indices as `lines`.
    pub classes: Vec<LineClass>,
}

impl<'a> ParsedDoc<'a> {
    fn from_lines(lines: Vec<Cow<'a, str>>) -> Self {
        let classes = MarkdownLineClassifier.classify(&lines);
        Self { lines, classes }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates `(row, line)` for lines classified as prose.
    pub fn prose_lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines
            .iter()
            .zip(&self.classes)
            .enumerate()
            .filter(|(_, (_, class))| class.is_prose())
            .map(|(row, (line, _))| (row, line.as_ref()))
    }
}

pub fn parse_document(text: &str) -> ParsedDoc<'_> {
    ParsedDoc::from_lines(split_lines(text))
}

pub fn parse_rope(rope: &Rope) -> ParsedDoc<'static> {
    ParsedDoc::from_lines(rope_lines(rope))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_lines_skip_raw_zones() {
        let doc = parse_document("---\na: 1\n---\nhello\n```\ncode\n```\nbye");
        let prose: Vec<_> = doc.prose_lines().collect();
        assert_eq!(prose, vec![(3, "hello"), (7, "bye")]);
    }

    #[test]
    fn rope_and_text_parse_identically() {
        let text = "# Title\n\n```\nx\n```\nend\n";
        let from_text = parse_document(text);
        let from_rope = parse_rope(&Rope::from(text));
        assert_eq!(from_text.lines, from_rope.lines);
        assert_eq!(from_text.classes, from_rope.classes);
    }
}
