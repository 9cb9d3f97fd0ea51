//! Todo Manager - Main Entry Point
//!
//! This is the interactive console for the todo manager.
//! The actual implementation is in the `todo_manager` library.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todo_manager::{Config, TaskStore, TodoConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Todo Manager - type `help` for commands, `exit` to quit";

/// Todo Manager - an in-memory todo list with priorities, tags and recurring tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "todo.toml")]
    config: PathBuf,

    /// Seed file of task records to import on startup
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr log subscriber; `RUST_LOG` wins over the config
fn init_tracing(config: &Config, verbose: bool) {
    let directive = if verbose {
        "todo_manager=debug"
    } else {
        config.log_filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    init_tracing(&config, args.verbose);
    info!(config = %args.config.display(), "starting todo console");

    let mut console = TodoConsole::new(TaskStore::new());
    if let Some(seed) = args.seed.as_ref().or(config.seed_file.as_ref()) {
        console.import_seed(seed)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if config.show_banner {
        writeln!(stdout, "{}", BANNER)?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        let reply = console.execute(&line);
        if !reply.output.is_empty() {
            writeln!(stdout, "{}", reply.output)?;
        }
        if reply.exit {
            break;
        }
    }
    Ok(())
}
