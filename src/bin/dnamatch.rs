//! Command-line interface for the `dnamatch` crate.
//!
//! Subcommands are implemented in separate files (modules) under `src/bin/dnamatch/`:
//! - `search_cmd.rs`
//! - `align_cmd.rs`
//! - `stats_cmd.rs`
//! - `mutations_cmd.rs`
//! - `step_cmd.rs`
//!
//! Set `RUST_LOG=dnamatch=debug` to see what the library is doing.
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name="dnamatch", version=env!("CARGO_PKG_VERSION"), about="DNA pattern search, alignment and mutation analysis", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find every exact occurrence of a pattern with one or more matchers.
    Search(search_cmd::SearchCmd),
    /// Global (Needleman–Wunsch) or local (Smith–Waterman) alignment.
    Align(align_cmd::AlignCmd),
    /// Identity, similarity and gap statistics for an aligned pair.
    Stats(stats_cmd::StatsCmd),
    /// Classify the mutations between an original and a mutated sequence.
    #[command(visible_alias = "mut")]
    Mutations(mutations_cmd::MutationsCmd),
    /// Show the state of a matcher after a number of comparisons.
    Step(step_cmd::StepCmd),
}

#[path = "dnamatch/input.rs"] mod input;
#[path = "dnamatch/search_cmd.rs"] mod search_cmd;
#[path = "dnamatch/align_cmd.rs"] mod align_cmd;
#[path = "dnamatch/stats_cmd.rs"] mod stats_cmd;
#[path = "dnamatch/mutations_cmd.rs"] mod mutations_cmd;
#[path = "dnamatch/step_cmd.rs"] mod step_cmd;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Search(cmd) => search_cmd::run(cmd),
        Command::Align(cmd) => align_cmd::run(cmd),
        Command::Stats(cmd) => stats_cmd::run(cmd),
        Command::Mutations(cmd) => mutations_cmd::run(cmd),
        Command::Step(cmd) => step_cmd::run(cmd),
    }
}
