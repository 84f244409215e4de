/// Bullet (`-`, `*`, `+`) and ordered (`1.`) list item prefixes.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Byte length of a leading list prefix: optional indent, the marker and
    /// the whitespace after it. `None` if the line is not a list item.
    pub fn prefix_len(line: &str) -> Option<usize> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let rest = &line[indent..];

        let marker = if rest.starts_with(&Self::BULLETS[..]) {
            1
        } else {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 || !rest[digits..].starts_with('.') {
                return None;
            }
            digits + 1
        };

        let after = &rest[marker..];
        let gap = after.len() - after.trim_start_matches([' ', '\t']).len();
        if gap == 0 {
            return None;
        }
        Some(indent + marker + gap)
    }
}
