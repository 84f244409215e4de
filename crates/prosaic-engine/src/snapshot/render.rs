use std::fmt::Write;

use crate::annotate::Annotations;

/// Renders annotations as text for snapshot comparison.
///
/// ```text
/// stats: 4 words, 17 chars
/// outline:
///   L1 h1 "Title"
/// highlights:
///   2 [5..7) bold.marker "**"
/// ```
pub fn render<S: AsRef<str>>(lines: &[S], annotations: &Annotations) -> String {
    let mut out = String::new();
    let stats = annotations.stats;
    // Writing into a String cannot fail.
    let _ = writeln!(out, "stats: {} words, {} chars", stats.words, stats.characters);

    out.push_str("outline:\n");
    for h in &annotations.headings {
        let _ = writeln!(out, "  L{} h{} {:?}", h.line, h.level, h.text);
    }

    out.push_str("highlights:\n");
    for (row, hs) in annotations.highlights.iter() {
        let line: &str = lines.get(row).map_or("", |l| l.as_ref());
        for h in hs {
            let text = h.span().slice(line).unwrap_or_default();
            let _ = writeln!(
                out,
                "  {row} [{}..{}) {} {:?}",
                h.start, h.end, h.category, text
            );
        }
    }
    out
}
