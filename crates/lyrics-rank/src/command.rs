//! Parsing of session commands, one per line.

use std::path::PathBuf;

use crate::error::CommandError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Bulk-load a word-count table and build the container.
    Load(PathBuf),
    /// Insert with a known score.
    Insert { id: String, score: i64 },
    /// Insert with the score derived from per-word counts.
    InsertCounts { id: String, counts: Vec<i64> },
    Remove(String),
    Search(i64),
    /// One search per score in `lo..=hi`.
    Range { lo: i64, hi: i64 },
    Count,
    /// Extract up to `n` highest-scored records.
    Top(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  load <path>                     read a word-count table and build the container
  insert <id> <score>             insert a song with a known score
  insert-counts <id> <n> [<n>..]  insert a song scored by its word counts
  remove <id>                     remove a song by id
  search <score>                  find a song with exactly this score
  range <lo> <hi>                 search every score from lo to hi
  count                           number of songs stored
  top <n>                         print and remove the n highest-scored songs
  help                            this list
  quit                            end the session";

fn int(command: &'static str, value: &str) -> Result<i64, CommandError> {
    value.parse().map_err(|_| CommandError::NotAnInteger {
        command,
        value: value.to_string(),
    })
}

fn arg<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    args.next()
        .ok_or(CommandError::MissingArgument { command, what })
}

fn done<'a>(args: &mut impl Iterator<Item = &'a str>, command: &'static str) -> Result<(), CommandError> {
    match args.next() {
        Some(extra) => Err(CommandError::Unexpected {
            command,
            value: extra.to_string(),
        }),
        None => Ok(()),
    }
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut args = line.split_whitespace();
        let Some(name) = args.next() else {
            return Ok(None);
        };

        let cmd = match name {
            "load" => Command::Load(PathBuf::from(arg(&mut args, "load", "a file path")?)),
            "insert" => {
                let id = arg(&mut args, "insert", "an id and a score")?.to_string();
                let score = int("insert", arg(&mut args, "insert", "a score")?)?;
                Command::Insert { id, score }
            }
            "insert-counts" => {
                let id = arg(&mut args, "insert-counts", "an id and word counts")?.to_string();
                let counts = args
                    .by_ref()
                    .map(|v| int("insert-counts", v))
                    .collect::<Result<Vec<_>, _>>()?;
                if counts.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "insert-counts",
                        what: "at least one word count",
                    });
                }
                Command::InsertCounts { id, counts }
            }
            "remove" => Command::Remove(arg(&mut args, "remove", "an id")?.to_string()),
            "search" => Command::Search(int("search", arg(&mut args, "search", "a score")?)?),
            "range" => {
                let lo = int("range", arg(&mut args, "range", "a lower and upper score")?)?;
                let hi = int("range", arg(&mut args, "range", "an upper score")?)?;
                if lo > hi {
                    return Err(CommandError::EmptyRange { lo, hi });
                }
                Command::Range { lo, hi }
            }
            "count" => Command::Count,
            "top" => {
                let n = arg(&mut args, "top", "a count")?;
                let n = n.parse().map_err(|_| CommandError::NotAnInteger {
                    command: "top",
                    value: n.to_string(),
                })?;
                Command::Top(n)
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        done(&mut args, name_of(&cmd))?;
        Ok(Some(cmd))
    }
}

fn name_of(cmd: &Command) -> &'static str {
    match cmd {
        Command::Load(_) => "load",
        Command::Insert { .. } => "insert",
        Command::InsertCounts { .. } => "insert-counts",
        Command::Remove(_) => "remove",
        Command::Search(_) => "search",
        Command::Range { .. } => "range",
        Command::Count => "count",
        Command::Top(_) => "top",
        Command::Help => "help",
        Command::Quit => "quit",
    }
}
