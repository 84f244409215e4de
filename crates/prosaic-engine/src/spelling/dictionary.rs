use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read word list at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Word lookup capability injected into the spelling scanner.
///
/// Lookups are read-only, so one dictionary can serve any number of
/// documents. Case handling is up to the implementation; the scanner passes
/// tokens through unchanged apart from apostrophe trimming.
pub trait Dictionary: Send + Sync {
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError>;

    fn is_unknown(&self, word: &str) -> Result<bool, DictionaryError> {
        self.is_known(word).map(|known| !known)
    }
}

/// An in-memory word set, typically loaded from a system word file such as
/// `/usr/share/dict/words`.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
    ignore_case: bool,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Parses a newline separated word list. Blank lines and `#` comments
    /// are skipped.
    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&content);
        log::debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Matches words regardless of case; the stored set is lowercased.
    pub fn ignore_case(self) -> Self {
        Self {
            words: self.words.iter().map(|w| w.to_lowercase()).collect(),
            ignore_case: true,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
        if self.ignore_case {
            Ok(self.words.contains(&word.to_lowercase()))
        } else {
            Ok(self.words.contains(word))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn lookups_are_case_sensitive_by_default() {
        let list = WordList::new(["hello", "Paris"]);
        assert!(list.is_known("hello").unwrap());
        assert!(list.is_known("Paris").unwrap());
        assert!(list.is_unknown("Hello").unwrap());
        assert!(list.is_unknown("paris").unwrap());
    }

    #[test]
    fn ignore_case_matches_any_case() {
        let list = WordList::new(["Hello"]).ignore_case();
        assert!(list.is_known("hello").unwrap());
        assert!(list.is_known("HELLO").unwrap());
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let list = WordList::parse("# words\nalpha\n\n  beta  \n");
        assert_eq!(list.len(), 2);
        assert!(list.is_known("beta").unwrap());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple\nbanana").unwrap();

        let list = WordList::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.is_known("apple").unwrap());
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = WordList::load(&missing).unwrap_err();
        match err {
            DictionaryError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}
