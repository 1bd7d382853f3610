use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which container backs a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Splay,
    Heap,
}

/// Format of a word-count table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableSource {
    /// SQLite for `.db`, `.sqlite` and `.sqlite3` files, delimited text otherwise.
    #[default]
    Auto,
    /// A SQLite database with a `lyrics(track_id, word, count)` table.
    Sqlite,
    /// Delimited text, one `track_id, word, count` row per line.
    Delimited,
}

impl TableSource {
    /// The concrete format to use for `path`. Never returns `Auto`.
    pub fn resolve(self, path: &Path) -> TableSource {
        match self {
            TableSource::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some("db" | "sqlite" | "sqlite3") => TableSource::Sqlite,
                _ => TableSource::Delimited,
            },
            other => other,
        }
    }
}

/// Settings for loading word-count tables and running a session.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```
/// use lyrics_rank::config::{ContainerKind, RankConfig};
///
/// let cfg = RankConfig::from_json(r#"{ "container": "heap" }"#).unwrap();
/// assert_eq!(cfg.container, ContainerKind::Heap);
/// assert_eq!(cfg.words, vec!["i", "me", "my"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Words whose counts add up to a song's score.
    pub words: Vec<String>,
    pub source: TableSource,
    /// Field separator of a delimited table.
    pub delimiter: char,
    /// Skip the first non-blank line of a delimited table.
    pub has_header: bool,
    pub container: ContainerKind,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            words: vec!["i".into(), "me".into(), "my".into()],
            source: TableSource::Auto,
            delimiter: ',',
            has_header: true,
            container: ContainerKind::Splay,
        }
    }
}

impl RankConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn counts_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
