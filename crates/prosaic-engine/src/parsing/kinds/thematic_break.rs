/// Horizontal rule: three or more of the same `-`, `*` or `_`, optionally
/// separated by spaces.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    pub fn is_break(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 0;
        for c in t.chars() {
            if c == first {
                count += 1;
            } else if c != ' ' && c != '\t' {
                return false;
            }
        }
        count >= Self::MIN_RUN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rules() {
        assert!(ThematicBreak::is_break("---"));
        assert!(ThematicBreak::is_break("*****"));
        assert!(ThematicBreak::is_break("___"));
        assert!(ThematicBreak::is_break("* * *"));
    }

    #[test]
    fn not_rules() {
        assert!(!ThematicBreak::is_break("--"));
        assert!(!ThematicBreak::is_break("-*-"));
        assert!(!ThematicBreak::is_break("--- title"));
        assert!(!ThematicBreak::is_break(""));
    }
}
