use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use dnamatch::*;

use crate::input::{write_json, OutputArgs};

/// Options for the `stats` subcommand.
#[derive(Debug, Args)]
pub struct StatsCmd {
    /// First aligned sequence, `-` for gaps.
    #[arg(long, value_name = "ALN")]
    pub aligned_a: String,
    /// Second aligned sequence, same length as the first.
    #[arg(long, value_name = "ALN")]
    pub aligned_b: String,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(cmd: StatsCmd) -> Result<()> {
    let a = normalize_sequence(&cmd.aligned_a);
    let b = normalize_sequence(&cmd.aligned_b);
    let stats = AlignmentStats::checked(&a, &b, &ScoringScheme::default()).context("cannot score aligned pair")?;

    let mut out = cmd.output.open()?;
    if cmd.output.json {
        write_json(&mut out, &stats)?;
    } else {
        writeln!(out, "Length:      {}", stats.length)?;
        writeln!(out, "Identity:    {:.2}%", stats.identity)?;
        writeln!(out, "Similarity:  {:.2}%", stats.similarity)?;
        writeln!(out, "Gaps:        {} ({:.2}%)", stats.gap_count, stats.gap_percentage)?;
    }
    out.flush()?;
    Ok(())
}
