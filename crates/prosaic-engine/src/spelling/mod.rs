//! # Spelling
//!
//! Flags unknown words on prose lines against an injected [`Dictionary`].

pub mod dictionary;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::{
    highlight::{HighlightLayer, SpanCategory, StyledSpan},
    parsing::{
        ParsedDoc,
        kinds::{AtxHeading, BlockQuote, CodeFence, Frontmatter, ListMarker},
    },
};

pub use dictionary::{Dictionary, DictionaryError, WordList};

const IMAGE_OPEN: &str = "![";

fn word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX.get_or_init(|| Regex::new(r"\b[a-zA-Z']{3,}\b").expect("Invalid word regex"))
}

/// Lines that are markup rather than prose, even though the classifier
/// calls them prose.
fn is_structural(trimmed: &str) -> bool {
    AtxHeading::marker_len(trimmed).is_some()
        || trimmed.starts_with(CodeFence::BACKTICKS)
        || trimmed.starts_with(Frontmatter::DELIMITER)
        || ListMarker::prefix_len(trimmed).is_some()
        || BlockQuote::is_marker(trimmed)
        || trimmed.starts_with(IMAGE_OPEN)
}

/// Strips one leading and one trailing apostrophe for the dictionary query.
fn query_form(token: &str) -> &str {
    let token = token.strip_prefix('\'').unwrap_or(token);
    token.strip_suffix('\'').unwrap_or(token)
}

/// Scans prose lines for words the dictionary does not know.
///
/// With no dictionary, or if any lookup fails, the result is an empty layer:
/// spelling must never take down styling or counting.
pub fn scan_spelling(doc: &ParsedDoc<'_>, dictionary: Option<&dyn Dictionary>) -> HighlightLayer {
    let Some(dictionary) = dictionary else {
        log::debug!("No dictionary configured, skipping spell check");
        return HighlightLayer::new();
    };

    match try_scan(doc, dictionary) {
        Ok(layer) => layer,
        Err(e) => {
            log::warn!("Spell check skipped: {e}");
            HighlightLayer::new()
        }
    }
}

fn try_scan(
    doc: &ParsedDoc<'_>,
    dictionary: &dyn Dictionary,
) -> Result<HighlightLayer, DictionaryError> {
    let mut unknown_cache: HashMap<&str, bool> = HashMap::new();
    let mut layer = HighlightLayer::new();

    for (row, line) in doc.prose_lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_structural(trimmed) {
            continue;
        }

        let mut spans = vec![];
        for m in word_regex().find_iter(line) {
            let word = query_form(m.as_str());
            let unknown = match unknown_cache.get(word) {
                Some(&unknown) => unknown,
                None => {
                    let unknown = dictionary.is_unknown(word)?;
                    unknown_cache.insert(word, unknown);
                    unknown
                }
            };
            if unknown {
                spans.push(StyledSpan::new(m.start(), m.end(), SpanCategory::SpellError));
            }
        }
        layer.insert(row, spans);
    }

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn known() -> WordList {
        WordList::new(["hello", "world", "say", "the", "and", "text"])
    }

    fn misspelled(text: &str, dict: &dyn Dictionary) -> Vec<(usize, usize, usize)> {
        let doc = parse_document(text);
        scan_spelling(&doc, Some(dict))
            .iter()
            .flat_map(|(row, spans)| spans.iter().map(move |s| (row, s.span.start, s.span.end)))
            .collect()
    }

    #[test]
    fn flags_single_unknown_word() {
        assert_eq!(misspelled("hello wrold", &known()), vec![(0, 6, 11)]);
    }

    #[test]
    fn quoted_word_is_checked_without_quotes() {
        assert_eq!(misspelled("say 'hello' wrold", &known()), vec![(0, 12, 17)]);
    }

    #[test]
    fn apostrophe_is_stripped_for_query_but_kept_in_span() {
        assert!(misspelled("9'hello", &known()).is_empty());
        assert_eq!(misspelled("9'wrold", &known()), vec![(0, 1, 7)]);
    }

    #[test]
    fn short_tokens_are_ignored() {
        assert!(misspelled("hello xy zq", &known()).is_empty());
    }

    #[rstest]
    #[case("# Helo wrold")]
    #[case("```wrold")]
    #[case("--- wrold")]
    #[case("- wrold item")]
    #[case("  * wrold item")]
    #[case("3. wrold item")]
    #[case("> wrold quote")]
    #[case("![wrold](img.png)")]
    #[case("   ")]
    fn structural_lines_are_skipped(#[case] line: &str) {
        assert!(misspelled(line, &known()).is_empty());
    }

    #[test]
    fn raw_zones_are_skipped() {
        let text = "---\ntitle: wrold\n---\n```\nwrold\n```\nwrold";
        assert_eq!(misspelled(text, &known()), vec![(6, 0, 5)]);
    }

    #[test]
    fn emphasis_line_is_not_a_bullet() {
        assert_eq!(misspelled("*wrold* text", &known()), vec![(0, 1, 6)]);
    }

    #[test]
    fn no_dictionary_yields_empty_layer() {
        let doc = parse_document("wrold");
        assert!(scan_spelling(&doc, None).is_empty());
    }

    struct Broken;

    impl Dictionary for Broken {
        fn is_known(&self, _word: &str) -> Result<bool, DictionaryError> {
            Err(DictionaryError::Unavailable("backend offline".into()))
        }
    }

    #[test]
    fn failing_dictionary_yields_empty_layer() {
        let doc = parse_document("hello wrold");
        assert!(scan_spelling(&doc, Some(&Broken)).is_empty());
    }

    struct Counting {
        inner: WordList,
        calls: AtomicUsize,
    }

    impl Dictionary for Counting {
        fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.is_known(word)
        }
    }

    #[test]
    fn repeated_words_are_looked_up_once_per_scan() {
        let dict = Counting {
            inner: known(),
            calls: AtomicUsize::new(0),
        };
        let found = misspelled("wrold wrold hello\nhello wrold", &dict);
        assert_eq!(found, vec![(0, 0, 5), (0, 6, 11), (1, 6, 11)]);
        assert_eq!(dict.calls.load(Ordering::SeqCst), 2);
    }
}
