//! Terminal front end for the todo list.
//!
//! Runs an interactive session on stdin/stdout, or replays a JSON-lines
//! action script with `--script`.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use todos::session::{Session, replay};
use todos::{Config, TodoState, new_store, view};
use todostore_runtime::metrics::MetricsRecorder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// A reducer-driven todo list
#[derive(Parser, Debug)]
#[command(name = "todos", version, about)]
struct Cli {
    /// Replay actions from a JSON-lines file instead of reading commands
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Start from this JSON todo list (overrides TODOS_SEED_FILE)
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Print the final list as JSON when done
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }

    // Logs go to stderr so they never interleave with the rendered list
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut recorder = MetricsRecorder::new();
    if config.metrics {
        recorder.install().context("failed to install metrics recorder")?;
    }

    let initial = config.load_seed().context("failed to load seed todos")?;
    tracing::info!(todos = initial.len(), "Store initialized");
    let mut store = new_store(initial);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let count = replay(&mut store, BufReader::new(file))
                .with_context(|| format!("failed to replay {}", path.display()))?;
            tracing::info!(actions = count, "Script replayed");
            print_final(store.current(), cli.json, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            Session::new(&mut store)
                .with_prompt(config.prompt.clone())
                .with_metrics(&recorder)
                .run(stdin.lock(), &mut out)?;
            if cli.json {
                print_final(store.current(), true, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn print_final<W: Write>(state: &TodoState, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, state)?;
        writeln!(out)?;
    } else {
        view::render(state, out)?;
    }
    Ok(())
}
