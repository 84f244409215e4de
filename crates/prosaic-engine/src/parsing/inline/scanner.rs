use crate::{
    highlight::{HighlightLayer, SpanCategory, StyledSpan},
    parsing::ParsedDoc,
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
};

/// One delimiter pass over a line: `marker content marker`, where content
/// is one or more bytes other than the marker's first byte.
#[derive(Debug, Clone, Copy)]
struct DelimiterPass {
    marker: &'static [u8],
    /// Reject a match when the same byte touches the opening marker from the
    /// left or the closing marker from the right, so `**` is never read as a
    /// pair of single italic markers.
    guard_adjacent: bool,
    marker_category: SpanCategory,
    content_category: SpanCategory,
}

impl DelimiterPass {
    fn byte(&self) -> u8 {
        self.marker[0]
    }
}

/// Fixed pass order; spans within a row are emitted pass by pass.
const PASSES: [DelimiterPass; 5] = [
    DelimiterPass {
        marker: CodeSpan::TICK,
        guard_adjacent: false,
        marker_category: SpanCategory::CodeMarker,
        content_category: SpanCategory::InlineCode,
    },
    DelimiterPass {
        marker: Emphasis::STRONG_STAR,
        guard_adjacent: false,
        marker_category: SpanCategory::BoldMarker,
        content_category: SpanCategory::Bold,
    },
    DelimiterPass {
        marker: Emphasis::STRONG_UNDERSCORE,
        guard_adjacent: false,
        marker_category: SpanCategory::BoldMarker,
        content_category: SpanCategory::Bold,
    },
    DelimiterPass {
        marker: Emphasis::STAR,
        guard_adjacent: true,
        marker_category: SpanCategory::ItalicMarker,
        content_category: SpanCategory::Italic,
    },
    DelimiterPass {
        marker: Emphasis::UNDERSCORE,
        guard_adjacent: true,
        marker_category: SpanCategory::ItalicMarker,
        content_category: SpanCategory::Italic,
    },
];

/// Scans every prose line for inline code, bold and italic runs.
///
/// Passes are independent: a line can carry overlapping spans from
/// different passes. Ordering them for painting is the merge layer's job.
pub fn scan_inline_styles(doc: &ParsedDoc<'_>) -> HighlightLayer {
    let mut layer = HighlightLayer::new();
    for (row, line) in doc.prose_lines() {
        layer.insert(row, scan_line(line));
    }
    layer
}

/// Runs all passes over a single line.
pub fn scan_line(line: &str) -> Vec<StyledSpan> {
    let mut out = vec![];
    for pass in &PASSES {
        scan_pass(line, pass, &mut out);
    }
    out
}

fn scan_pass(line: &str, pass: &DelimiterPass, out: &mut Vec<StyledSpan>) {
    let mut cur = Cursor::new(line);
    while !cur.eof() {
        if let Some(spans) = try_delimited(&mut cur, pass) {
            out.extend(spans);
            continue;
        }
        cur.bump();
    }
}

/// Attempts a delimited run at the current position.
///
/// On failure the cursor is restored and the caller advances by one byte,
/// which gives leftmost, non-overlapping matches.
fn try_delimited(cur: &mut Cursor<'_>, pass: &DelimiterPass) -> Option<[StyledSpan; 3]> {
    if !cur.starts_with(pass.marker) {
        return None;
    }
    if pass.guard_adjacent && cur.prev() == Some(pass.byte()) {
        return None;
    }

    let saved = cur.clone();
    let open_start = cur.pos();
    cur.bump_n(pass.marker.len());
    let inner_start = cur.pos();
    cur.skip_until(pass.byte());
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(pass.marker) {
        *cur = saved;
        return None;
    }
    cur.bump_n(pass.marker.len());
    let close_end = cur.pos();

    if pass.guard_adjacent && cur.peek() == Some(pass.byte()) {
        *cur = saved;
        return None;
    }

    Some([
        StyledSpan::new(open_start, inner_start, pass.marker_category),
        StyledSpan::new(inner_start, inner_end, pass.content_category),
        StyledSpan::new(inner_end, close_end, pass.marker_category),
    ])
}
