use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    kinds::{AtxHeading, BlockQuote, CodeFence, Frontmatter, ListMarker, ThematicBreak},
    rope::split_lines,
};

/// Compiled patterns for the normalizer, in pipeline order.
struct Patterns {
    indented_code: Regex,
    inline_code: Regex,
    image: Regex,
    inline_link: Regex,
    reference_link: Regex,
    reference_definition: Regex,
    tag: Regex,
    emphasis: [Regex; 5],
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |pattern: &str| Regex::new(pattern).expect("Invalid normalizer regex");
        Patterns {
            indented_code: re(r"(?m)^(?: {4}|\t).*$"),
            inline_code: re(r"`[^`]+`"),
            image: re(r"!\[[^\]]*\]\([^)]+\)"),
            inline_link: re(r"\[([^\]]+)\]\([^)]+\)"),
            reference_link: re(r"\[([^\]]+)\]\[[^\]]*\]"),
            reference_definition: re(r"(?m)^\[[^\]]+\]:.*$"),
            tag: re(r"<[^>]+>"),
            emphasis: [
                re(r"\*\*([^*\n]+)\*\*"),
                re(r"__([^_\n]+)__"),
                // Single delimiters must hug their content, so a `* ` bullet
                // never opens an italic run.
                re(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*"),
                re(r"_([^_\s](?:[^_\n]*[^_\s])?)_"),
                re(r"~~([^~\n]+)~~"),
            ],
        }
    })
}

/// Strips markdown structure and emphasis, leaving prose for counting.
///
/// Not for rendering: blank lines and stray whitespace are left behind,
/// which is harmless once callers split on whitespace.
pub fn normalize(text: &str) -> String {
    let p = patterns();

    let text = strip_frontmatter(text);
    let text = strip_fenced_code(text);
    let text = p.indented_code.replace_all(&text, "");
    let text = p.inline_code.replace_all(&text, "");
    let text = p.image.replace_all(&text, "");
    let text = p.inline_link.replace_all(&text, "$1");
    let text = p.reference_link.replace_all(&text, "$1");
    let text = p.reference_definition.replace_all(&text, "");
    let mut text = p.tag.replace_all(&text, "").into_owned();
    for emphasis in &p.emphasis {
        text = emphasis.replace_all(&text, "$1").into_owned();
    }

    split_lines(&text)
        .iter()
        .map(|line| strip_line_prefixes(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drops a closed leading frontmatter block. An unterminated block is kept.
fn strip_frontmatter(text: &str) -> &str {
    let lines = split_lines(text);
    let Some(block_lines) = Frontmatter::closed_block_len(&lines) else {
        return text;
    };
    let offset: usize = text
        .split_inclusive('\n')
        .take(block_lines)
        .map(str::len)
        .sum();
    &text[offset..]
}

/// Drops fenced blocks, delimiter lines included. Only lines that
/// [`CodeFence::is_delimiter`] accepts toggle a block, so backticks quoted
/// mid-sentence stay prose. An unpaired fence swallows the rest of the text.
fn strip_fenced_code(text: &str) -> String {
    let mut in_code = false;
    let mut kept = Vec::new();
    for line in split_lines(text) {
        if CodeFence::is_delimiter(&line) {
            in_code = !in_code;
        } else if !in_code {
            kept.push(line);
        }
    }
    kept.join("\n")
}

fn strip_line_prefixes(line: &str) -> &str {
    let (_, quote_end) = BlockQuote::strip_prefixes(line);
    let mut line = &line[quote_end..];

    if is_bare_heading_marker(line) {
        return "";
    }
    if let Some(n) = AtxHeading::marker_len(line) {
        line = line[n..].trim_start();
    }
    if ThematicBreak::is_break(line) {
        return "";
    }
    if let Some(n) = ListMarker::prefix_len(line) {
        line = &line[n..];
    }
    line
}

fn is_bare_heading_marker(line: &str) -> bool {
    let t = line.trim_end();
    !t.is_empty() && t.len() <= AtxHeading::MAX_LEVEL && t.bytes().all(|b| b == AtxHeading::MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn words(text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn frontmatter_is_dropped() {
        assert_eq!(words("---\ntitle: x\n---\nHello world"), vec!["Hello", "world"]);
    }

    #[test]
    fn frontmatter_ending_the_document_is_dropped() {
        assert_eq!(normalize("---\ntitle: x\n---"), "");
    }

    #[test]
    fn unterminated_frontmatter_is_kept() {
        // The opening delimiter still reads as a horizontal rule.
        assert_eq!(words("---\ntitle: x"), vec!["title:", "x"]);
    }

    #[test]
    fn fenced_code_is_dropped() {
        assert_eq!(words("```\ncode here\n```\nReal text"), vec!["Real", "text"]);
    }

    #[test]
    fn unterminated_fence_swallows_rest() {
        assert_eq!(words("Intro line\n```\nlet x = 1;"), vec!["Intro", "line"]);
    }

    #[test]
    fn backticks_inside_a_sentence_are_prose() {
        let text = "Type ``` to open a fence.\n\nChapter two has many more words here.";
        assert_eq!(normalize(text).split_whitespace().count(), 13);
    }

    #[test]
    fn inline_backticks_do_not_pair_with_a_fence() {
        let text = "Write ``` then code.\n```\nlet x = 1;\n```\nAfter the block there are words.";
        assert_eq!(
            words(text),
            vec!["Write", "```", "then", "code.", "After", "the", "block", "there", "are", "words."]
        );
    }

    #[test]
    fn indented_fence_still_toggles() {
        assert_eq!(words("Intro\n  ```sh\n  ls -la\n  ```\nOutro"), vec!["Intro", "Outro"]);
    }

    #[test]
    fn indented_code_is_dropped() {
        assert_eq!(words("Text\n    indented code\n\tmore code\nEnd"), vec!["Text", "End"]);
    }

    #[rstest]
    #[case("use `cargo build` now", vec!["use", "now"])]
    #[case("see ![a cat](cat.png) here", vec!["see", "here"])]
    #[case("a [nice link](http://x.y) b", vec!["a", "nice", "link", "b"])]
    #[case("a [ref link][1] b", vec!["a", "ref", "link", "b"])]
    #[case("[1]: http://example.com", vec![])]
    #[case("x <span class=\"k\">y</span> z", vec!["x", "y", "z"])]
    fn code_links_and_tags(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(input), expected);
    }

    #[rstest]
    #[case("**bold** word", "bold word")]
    #[case("__bold__ word", "bold word")]
    #[case("an *italic* word", "an italic word")]
    #[case("an _italic_ word", "an italic word")]
    #[case("~~gone~~ still", "gone still")]
    #[case("`**code**` kept out", " kept out")]
    fn emphasis_is_unwrapped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("# Title", "Title")]
    #[case("###   Spaced", "Spaced")]
    #[case("##", "")]
    #[case("> quoted text", "quoted text")]
    #[case("> > nested", "nested")]
    #[case("> # Quoted heading", "Quoted heading")]
    #[case("---", "")]
    #[case("* * *", "")]
    #[case("- item", "item")]
    #[case("  + nested item", "nested item")]
    #[case("12. ordered", "ordered")]
    #[case("* item with *emphasis*", "item with emphasis")]
    fn line_prefixes_are_stripped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("# Heading\n\nSome **bold** and *italic* text.\n\n- list\n- items\n")]
    #[case("---\ntags: [a]\n---\n## Part\n```rust\nfn x() {}\n```\n> quote __here__\n")]
    #[case("1. one\n2. two *three*\n\n***\n\n[link](u) ~~strike~~")]
    fn output_has_no_markup(#[case] input: &str) {
        let out = normalize(input);
        assert!(!out.contains("**"), "bold marker left in {out:?}");
        assert!(!out.contains("__"), "bold marker left in {out:?}");
        assert!(!out.contains("~~"), "strike marker left in {out:?}");
        assert!(!out.contains("```"), "fence left in {out:?}");
        for line in out.lines() {
            assert!(!line.starts_with('#'), "heading hash left in {out:?}");
            assert!(!line.starts_with('>'), "quote marker left in {out:?}");
        }
    }
}
