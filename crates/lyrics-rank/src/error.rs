use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a word-count table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 3 fields, found {found}")]
    MissingFields { line: usize, found: usize },
    #[error("line {line}: invalid count {value:?}")]
    BadCount { line: usize, value: String },
    #[error("sqlite error on {path}: {source}")]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from parsing one command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument { command: &'static str, what: &'static str },
    #[error("`{command}`: {value:?} is not an integer")]
    NotAnInteger { command: &'static str, value: String },
    #[error("`{command}`: unexpected argument {value:?}")]
    Unexpected { command: &'static str, value: String },
    #[error("range: lower bound {lo} is above upper bound {hi}")]
    EmptyRange { lo: i64, hi: i64 },
}

/// Anything the binary can fail with.
#[derive(Debug, Error)]
pub enum RankError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
