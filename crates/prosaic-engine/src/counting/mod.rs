//! # Counting
//!
//! Markdown-aware word and character counts. Both run over the output of
//! [`normalize`], so markup, frontmatter and code never inflate the totals.

mod normalize;

use serde::Serialize;

pub use normalize::normalize;

/// Characters skipped when counting without spaces.
const SPACE_CHARS: [char; 3] = [' ', '\t', '\n'];

/// Counts whitespace-delimited words of prose.
pub fn count_words(text: &str) -> usize {
    normalize(text).split_whitespace().count()
}

/// Counts characters of prose, excluding space, tab and newline unless
/// `include_spaces` is set.
pub fn count_characters(text: &str, include_spaces: bool) -> usize {
    chars_in(&normalize(text), include_spaces)
}

fn chars_in(normalized: &str, include_spaces: bool) -> usize {
    if include_spaces {
        normalized.chars().count()
    } else {
        normalized.chars().filter(|c| !SPACE_CHARS.contains(c)).count()
    }
}

/// Word and character totals for the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub words: usize,
    pub characters: usize,
}

impl DocumentStats {
    /// Computes both totals from a single normalization pass.
    pub fn of(text: &str, include_spaces: bool) -> Self {
        let normalized = normalize(text);
        Self {
            words: normalized.split_whitespace().count(),
            characters: chars_in(&normalized, include_spaces),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn frontmatter_words_are_not_counted() {
        assert_eq!(count_words("---\ntitle: x\n---\nHello world"), 2);
    }

    #[test]
    fn fenced_code_words_are_not_counted() {
        assert_eq!(count_words("```\ncode here\n```\nReal text"), 2);
    }

    #[test]
    fn empty_document_counts_nothing() {
        assert_eq!(DocumentStats::of("", false), DocumentStats::default());
    }

    #[rstest]
    #[case("# Title\n\nOne **two** three.")]
    #[case("- a\n- b c\n\n> quoted *words* here")]
    #[case("[link text](http://x) and `code` and ![img](i.png)")]
    #[case("---\nk: v\n---\n```\nx\n```\n    indented\nend")]
    fn count_words_matches_normalized_tokens(#[case] text: &str) {
        assert_eq!(count_words(text), normalize(text).split_whitespace().count());
    }

    #[test]
    fn characters_skip_whitespace_by_default() {
        assert_eq!(count_characters("ab cd\ne\tf", false), 6);
        assert_eq!(count_characters("ab cd\ne\tf", true), 9);
    }

    #[test]
    fn characters_count_scalar_values_not_bytes() {
        assert_eq!(count_characters("café", false), 4);
    }

    #[test]
    fn characters_exclude_markup() {
        assert_eq!(count_characters("## **Hi**", false), 2);
    }

    #[test]
    fn stats_agree_with_individual_counts() {
        let text = "# Notes\n\nSome *emphasis* and a [link](u).\n";
        let stats = DocumentStats::of(text, false);
        assert_eq!(stats.words, count_words(text));
        assert_eq!(stats.characters, count_characters(text, false));
        assert_eq!(stats.words, 6);
    }
}
