use super::kinds::{CodeFence, Frontmatter};

/// Lexical region a line belongs to.
///
/// Derived on every pass; never stored between scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Ordinary text, eligible for spelling and inline style scanning.
    Prose,
    /// Inside the leading `---` block, delimiters included.
    Frontmatter,
    /// Inside a fenced code block, fence lines included.
    FencedCode,
}

impl LineClass {
    pub fn is_prose(self) -> bool {
        matches!(self, LineClass::Prose)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrontmatterState {
    /// Line 0 was not a delimiter, or the block has closed.
    Done,
    Open,
}

/// Classifies every line of a document in one forward pass.
///
/// Toggle state is carried line to line, so this is the single place that
/// knows about frontmatter and fence regions. Scanners consume its output.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineClass> {
        let mut out = Vec::with_capacity(lines.len());
        let mut frontmatter = match lines.first() {
            Some(first) if Frontmatter::is_delimiter(first.as_ref()) => FrontmatterState::Open,
            _ => FrontmatterState::Done,
        };
        let mut in_code = false;

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if frontmatter == FrontmatterState::Open {
                if row > 0 && Frontmatter::is_delimiter(line) {
                    frontmatter = FrontmatterState::Done;
                }
                out.push(LineClass::Frontmatter);
                continue;
            }

            if CodeFence::is_delimiter(line) {
                in_code = !in_code;
                out.push(LineClass::FencedCode);
                continue;
            }

            out.push(if in_code {
                LineClass::FencedCode
            } else {
                LineClass::Prose
            });
        }
        out
    }
}
