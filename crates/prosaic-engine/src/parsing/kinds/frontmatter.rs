/// YAML frontmatter delimiter.
///
/// Frontmatter can only open on the first line of a document and closes on
/// the next delimiter line. Both delimiter lines belong to the block.
pub struct Frontmatter;

impl Frontmatter {
    pub const DELIMITER: &'static str = "---";

    pub fn is_delimiter(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }

    /// Returns the number of leading lines that form a closed frontmatter
    /// block, or `None` when the document has no (or an unterminated) block.
    pub fn closed_block_len<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
        let first = lines.first()?;
        if !Self::is_delimiter(first.as_ref()) {
            return None;
        }
        lines[1..]
            .iter()
            .position(|l| Self::is_delimiter(l.as_ref()))
            .map(|close| close + 2)
    }
}
