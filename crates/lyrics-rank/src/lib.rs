//! `lyrics-rank`: rank songs by how often their lyrics say "I", "me" and
//! "my", using the containers from [`score_forest`].
//!
//! Provides the logic behind the `lyrics-rank` binary:
//! - [`loader`]:  turn a `track_id, word, count` table (SQLite or text) into
//!   scored records
//! - [`command`]: parse one session command per line
//! - [`session`]: execute commands against a container and time them
//! - [`config`]:  JSON configuration with defaults
//! - [`error`]:   error types
//! - [`logging`]: `env_logger` setup

pub mod command;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod session;

pub use command::Command;
pub use config::{ContainerKind, RankConfig, TableSource};
pub use error::{CommandError, ConfigError, LoadError, RankError};
pub use session::{Outcome, Session};
