use serde::Serialize;

use super::{ParsedDoc, kinds::AtxHeading, parse_document, rope::split_lines};

/// An outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 to 6.
    pub level: u8,
    pub text: String,
    /// 1-based line number.
    pub line: usize,
}

fn heading_at(row: usize, line: &str) -> Option<Heading> {
    AtxHeading::parse(line.trim()).map(|(level, text)| Heading {
        level,
        text: text.to_string(),
        line: row + 1,
    })
}

/// Extracts ATX headings in document order, ignoring frontmatter and fenced
/// code so a `# comment` in a shell snippet never reaches the outline.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    headings_in(&parse_document(text))
}

/// Same as [`extract_headings`] over an already classified snapshot.
pub fn headings_in(doc: &ParsedDoc<'_>) -> Vec<Heading> {
    doc.prose_lines()
        .filter_map(|(row, line)| heading_at(row, line))
        .collect()
}

/// Extracts ATX headings from every raw line, including frontmatter and
/// fenced code.
pub fn extract_headings_raw(text: &str) -> Vec<Heading> {
    split_lines(text)
        .iter()
        .enumerate()
        .filter_map(|(row, line)| heading_at(row, line))
        .collect()
}
