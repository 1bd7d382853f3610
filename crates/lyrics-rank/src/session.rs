//! A timed command session over one container.

use std::fmt;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use score_forest::{MaxHeap, Record, ScoreContainer, SplayTree};

use crate::command::{Command, HELP};
use crate::config::{ContainerKind, RankConfig};
use crate::error::{LoadError, RankError};
use crate::loader::{load_path, score_of_counts};

/// Result of one executed command. `elapsed` covers only the container calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Loaded { stored: usize, elapsed: Duration },
    AlreadyLoaded,
    Inserted { record: Record, elapsed: Duration },
    Removed { id: String, found: bool, elapsed: Duration },
    Searched { score: i64, found: Option<Record>, elapsed: Duration },
    Ranged { searches: u64, found: Vec<Record>, elapsed: Duration },
    Counted { size: usize, elapsed: Duration },
    Extracted { records: Vec<Record>, elapsed: Duration },
    Help,
    Quit,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

pub fn new_container(kind: ContainerKind) -> Box<dyn ScoreContainer> {
    match kind {
        ContainerKind::Splay => Box::new(SplayTree::new()),
        ContainerKind::Heap => Box::new(MaxHeap::new()),
    }
}

pub struct Session {
    container: Box<dyn ScoreContainer>,
    config: RankConfig,
    loaded: bool,
}

impl Session {
    pub fn new(config: RankConfig) -> Self {
        Self::with_container(new_container(config.container), config)
    }

    pub fn with_container(container: Box<dyn ScoreContainer>, config: RankConfig) -> Self {
        Self {
            container,
            config,
            loaded: false,
        }
    }

    pub fn container(&self) -> &dyn ScoreContainer {
        self.container.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Build the container from already-read records. Refused once data is
    /// present, like `load`.
    pub fn preload(&mut self, records: Vec<Record>) -> Outcome {
        if self.loaded {
            return Outcome::AlreadyLoaded;
        }
        let ((), elapsed) = timed(|| self.container.build(records));
        self.loaded = true;
        Outcome::Loaded {
            stored: self.container.size(),
            elapsed,
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, LoadError> {
        let outcome = match cmd {
            Command::Load(path) => {
                if self.loaded {
                    log::warn!("ignoring load of {}: data already loaded", path.display());
                    return Ok(Outcome::AlreadyLoaded);
                }
                let records = load_path(&path, &self.config)?;
                return Ok(self.preload(records));
            }
            Command::Insert { id, score } => self.insert(Record::new(id, score)),
            Command::InsertCounts { id, counts } => {
                self.insert(Record::new(id, score_of_counts(&counts)))
            }
            Command::Remove(id) => {
                let (found, elapsed) = timed(|| self.container.remove(&id));
                Outcome::Removed { id, found, elapsed }
            }
            Command::Search(score) => {
                let (found, elapsed) = timed(|| self.container.search(score));
                Outcome::Searched { score, found, elapsed }
            }
            Command::Range { lo, hi } => {
                let (found, elapsed) = timed(|| {
                    (lo..=hi)
                        .filter_map(|s| self.container.search(s))
                        .collect::<Vec<_>>()
                });
                Outcome::Ranged {
                    searches: hi.abs_diff(lo) + 1,
                    found,
                    elapsed,
                }
            }
            Command::Count => {
                let (size, elapsed) = timed(|| self.container.size());
                Outcome::Counted { size, elapsed }
            }
            Command::Top(n) => {
                let (records, elapsed) = timed(|| {
                    std::iter::from_fn(|| self.container.extract_max())
                        .take(n)
                        .collect::<Vec<_>>()
                });
                Outcome::Extracted { records, elapsed }
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn insert(&mut self, record: Record) -> Outcome {
        let ((), elapsed) = timed(|| self.container.insert(record.clone()));
        self.loaded = true;
        Outcome::Inserted { record, elapsed }
    }

    /// Execute commands from `input` until it ends or `quit` is read.
    ///
    /// Bad commands and failed loads are reported to `output` and the
    /// session carries on. With `prompt` set a prompt precedes each read.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        prompt: bool,
    ) -> Result<(), RankError> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let cmd = match Command::parse(&line?) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("rejected command: {e}");
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };
            match self.execute(cmd) {
                Ok(Outcome::Quit) => {
                    writeln!(output, "{}", Outcome::Quit)?;
                    return Ok(());
                }
                Ok(outcome) => writeln!(output, "{outcome}")?,
                Err(e) => {
                    log::error!("load failed: {e}");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Loaded { stored, elapsed } => {
                writeln!(f, "Built container with {stored} songs.")?;
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::AlreadyLoaded => write!(
                f,
                "Container already holds data; restart to load a different dataset."
            ),
            Outcome::Inserted { record, elapsed } => {
                writeln!(f, "Added {} with score {}.", record.id, record.score)?;
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::Removed { id, found, elapsed } => {
                if *found {
                    writeln!(f, "{id} removed.")?;
                } else {
                    writeln!(f, "{id} not found; nothing removed.")?;
                }
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::Searched { score, found, elapsed } => {
                match found {
                    Some(r) => writeln!(f, "Found {} with score {}.", r.id, r.score)?,
                    None => writeln!(f, "No song with score {score}.")?,
                }
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::Ranged { searches, found, elapsed } => {
                if found.is_empty() {
                    writeln!(f, "No songs in range.")?;
                }
                for r in found {
                    writeln!(f, "Found {} with score {}.", r.id, r.score)?;
                }
                write!(f, "Time taken for {searches} searches: {}ns", elapsed.as_nanos())
            }
            Outcome::Counted { size, elapsed } => {
                writeln!(f, "{size} songs stored.")?;
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::Extracted { records, elapsed } => {
                for r in records {
                    writeln!(f, "{} has score {}", r.id, r.score)?;
                }
                write!(f, "Time taken: {}ns", elapsed.as_nanos())
            }
            Outcome::Help => write!(f, "{HELP}"),
            Outcome::Quit => write!(f, "Goodbye!"),
        }
    }
}
