/// ATX heading marker (`#` through `######`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Length of the `#` run when it forms a heading marker: one to six
    /// hashes followed by whitespace.
    pub fn marker_len(s: &str) -> Option<usize> {
        let n = s.bytes().take_while(|&b| b == Self::MARKER).count();
        if n == 0 || n > Self::MAX_LEVEL {
            return None;
        }
        s[n..]
            .chars()
            .next()
            .filter(|c| c.is_whitespace())
            .map(|_| n)
    }

    /// Parses a trimmed line into `(level, text)`.
    ///
    /// Returns `None` for bare markers such as `##` with no heading text.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let n = Self::marker_len(trimmed)?;
        let text = trimmed[n..].trim();
        if text.is_empty() {
            return None;
        }
        Some((n as u8, text))
    }
}
