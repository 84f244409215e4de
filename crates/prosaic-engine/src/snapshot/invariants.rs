use crate::highlight::HighlightMap;

/// Panics if any highlight falls outside its line.
pub fn check<S: AsRef<str>>(lines: &[S], highlights: &HighlightMap) {
    for (row, hs) in highlights.iter() {
        let line: &str = lines
            .get(row)
            .unwrap_or_else(|| panic!("highlight on missing row {row} ({} lines)", lines.len()))
            .as_ref();
        for h in hs {
            let span = h.span();
            assert!(
                !span.is_empty() && span.end <= line.len(),
                "span out of bounds on row {row}: [{}..{}) {} (line len: {})",
                h.start,
                h.end,
                h.category,
                line.len()
            );
            assert!(
                span.slice(line).is_some(),
                "span splits a character on row {row}: [{}..{}) {}",
                h.start,
                h.end,
                h.category
            );
        }
    }
}
