use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "prosaic";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "prosaic.log";
const DEFAULT_WORKSPACE: &str = "~/Prosaic";
const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
const NOTES_FILE: &str = "notes.md";
const NOTES_TEMPLATE: &str = "# Notes\n\n";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the writing workspace: `notes.md`, `pieces/` and `books/`.
    pub workspace_dir: PathBuf,
    pub theme: Theme,
    pub spell_check: bool,
    /// Newline separated word list used when `spell_check` is on.
    pub dictionary_path: PathBuf,
    /// Show the outline for every file, not just books.
    pub show_all_panes: bool,
    /// Count spaces, tabs and newlines in the character total.
    pub count_spaces: bool,
    pub last_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from(shellexpand::tilde(DEFAULT_WORKSPACE).as_ref()),
            theme: Theme::default(),
            spell_check: true,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            show_all_panes: false,
            count_spaces: false,
            last_file: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.workspace_dir =
            Self::expand_path(&config.workspace_dir).unwrap_or(config.workspace_dir);
        config.dictionary_path =
            Self::expand_path(&config.dictionary_path).unwrap_or(config.dictionary_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `PROSAIC_CONFIG_DIR`, then `$XDG_CONFIG_HOME/prosaic`, then
    /// `~/.config/prosaic`.
    pub fn config_dir() -> PathBuf {
        Self::resolve_config_dir(
            std::env::var("PROSAIC_CONFIG_DIR").ok(),
            std::env::var("XDG_CONFIG_HOME").ok(),
        )
    }

    fn resolve_config_dir(prosaic_dir: Option<String>, xdg_home: Option<String>) -> PathBuf {
        if let Some(dir) = prosaic_dir.filter(|d| !d.is_empty()) {
            return PathBuf::from(shellexpand::tilde(&dir).as_ref());
        }
        if let Some(xdg) = xdg_home.filter(|d| !d.is_empty()) {
            return PathBuf::from(xdg).join(APP_DIR);
        }
        PathBuf::from(shellexpand::tilde("~/.config").as_ref()).join(APP_DIR)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn log_path() -> PathBuf {
        Self::config_dir().join(LOG_FILE)
    }

    /// The word list to spell check with, `None` when spell check is off.
    pub fn dictionary(&self) -> Option<&Path> {
        self.spell_check.then_some(self.dictionary_path.as_path())
    }

    pub fn pieces_dir(&self) -> PathBuf {
        self.workspace_dir.join("pieces")
    }

    pub fn books_dir(&self) -> PathBuf {
        self.workspace_dir.join("books")
    }

    pub fn notes_path(&self) -> PathBuf {
        self.workspace_dir.join(NOTES_FILE)
    }

    /// True for files anywhere under the books directory.
    pub fn is_book(&self, path: &Path) -> bool {
        path.starts_with(self.books_dir())
    }

    pub fn shows_outline(&self, path: &Path) -> bool {
        self.show_all_panes || self.is_book(path)
    }

    /// The last edited file, if it still exists and is not the notes file.
    pub fn last_file(&self) -> Option<&Path> {
        self.last_file
            .as_deref()
            .filter(|p| p.exists() && *p != self.notes_path())
    }

    /// Remembers `path` as the last edited file. The notes file is never
    /// remembered. Returns whether anything changed.
    pub fn set_last_file(&mut self, path: &Path) -> bool {
        if path == self.notes_path() || self.last_file.as_deref() == Some(path) {
            return false;
        }
        self.last_file = Some(path.to_path_buf());
        true
    }

    /// Creates the workspace directories and a starter `notes.md`.
    pub fn ensure_workspace(&self) -> anyhow::Result<()> {
        for dir in [&self.workspace_dir, &self.pieces_dir(), &self.books_dir()] {
            std::fs::create_dir_all(dir)?;
        }
        let notes = self.notes_path();
        if !notes.exists() {
            std::fs::write(&notes, NOTES_TEMPLATE)?;
        }
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
