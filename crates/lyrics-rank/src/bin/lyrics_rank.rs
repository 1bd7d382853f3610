//! `lyrics-rank`: interactive song ranking over a splay tree or max-heap.
//!
//! Usage:
//!   lyrics-rank [--container splay|heap] [--config <file>]
//!               [--data <file>] [--source auto|sqlite|delimited] [--script <file>]
//!
//! Commands are read from `--script` if given, otherwise from stdin. Type
//! `help` for the command list.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use lyrics_rank::config::{ContainerKind, RankConfig, TableSource};
use lyrics_rank::error::RankError;
use lyrics_rank::loader::load_path;
use lyrics_rank::logging::init_logger;
use lyrics_rank::session::Session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Container holding the songs. Overrides the config file.
    #[arg(short, long, value_enum)]
    container: Option<ContainerKind>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word-count table to load before the first command.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Format of word-count tables. Overrides the config file.
    #[arg(long, value_enum)]
    source: Option<TableSource>,

    /// File of commands to run instead of reading stdin.
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), RankError> {
    let mut config = match &args.config {
        Some(path) => RankConfig::from_path(path)?,
        None => RankConfig::default(),
    };
    if let Some(kind) = args.container {
        config.container = kind;
    }
    if let Some(source) = args.source {
        config.source = source;
    }
    log::info!("using {:?} container", config.container);

    let mut session = Session::new(config.clone());
    let mut stdout = io::stdout().lock();

    if let Some(data) = &args.data {
        let records = load_path(data, &config)?;
        writeln!(stdout, "{}", session.preload(records))?;
    }

    match &args.script {
        Some(path) => {
            let file = File::open(path)?;
            session.run(BufReader::new(file), &mut stdout, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(stdout, "Welcome to lyrics-rank! Type `help` for commands.")?;
            }
            session.run(stdin.lock(), &mut stdout, interactive)
        }
    }
}

fn main() {
    init_logger();
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
