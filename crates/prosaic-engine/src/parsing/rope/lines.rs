use std::borrow::Cow;

use xi_rope::Rope;

/// Splits a text snapshot into lines on `\n`.
///
/// A trailing newline yields a final empty line, so the line count always
/// matches the editor's row count. `\r` is kept as part of the line.
pub fn split_lines(text: &str) -> Vec<Cow<'_, str>> {
    text.split('\n').map(Cow::Borrowed).collect()
}

/// Same as [`split_lines`] for a rope snapshot.
///
/// Uses `lines_raw` so a trailing newline can be detected and reported as a
/// final empty line.
pub fn rope_lines(rope: &Rope) -> Vec<Cow<'static, str>> {
    let mut out: Vec<Cow<'static, str>> = Vec::new();
    let mut ends_with_newline = true;
    for line in rope.lines_raw(..) {
        ends_with_newline = line.ends_with('\n');
        let text = line.strip_suffix('\n').unwrap_or(&*line).to_string();
        out.push(Cow::Owned(text));
    }
    if ends_with_newline {
        out.push(Cow::Borrowed(""));
    }
    out
}
