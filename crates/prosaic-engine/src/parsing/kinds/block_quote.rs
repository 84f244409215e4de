/// Blockquote line prefix.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True if a trimmed line starts with `>` followed by whitespace.
    pub fn is_marker(trimmed: &str) -> bool {
        trimmed
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    /// Only prefixes at the very start of the line count for the first level,
    /// matching how the normalizer treats `^>`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        while i < b.len() && b[i] == (Self::PREFIX as u8) {
            depth = depth.saturating_add(1);
            i += 1;
            while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                i += 1;
            }
        }
        (depth, i)
    }
}
