/// Fenced code delimiter.
///
/// Fences are plain toggles: any line whose trimmed text starts with three
/// backticks opens a block, and the next such line closes it. Info strings
/// (```` ```rust ````) are ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the line opens or closes a fenced block.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}
