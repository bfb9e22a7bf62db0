use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dnamatch::*;

use crate::input::{load, write_json, AlgorithmChoice, Alphabet, OutputArgs};

/// Options for the `search` subcommand.
#[derive(Debug, Args)]
pub struct SearchCmd {
    /// Sequence to search in.
    #[arg(long, value_name = "SEQ")]
    pub subject: Option<String>,
    /// FASTA file holding the subject (first record used).
    #[arg(long, value_name = "FILE")]
    pub subject_file: Option<PathBuf>,
    /// Pattern to look for.
    #[arg(long, value_name = "SEQ")]
    pub pattern: Option<String>,
    /// FASTA file holding the pattern (first record used).
    #[arg(long, value_name = "FILE")]
    pub pattern_file: Option<PathBuf>,
    /// Matchers to run, in order (repeatable). Defaults to all of them.
    #[arg(long = "algorithm", short = 'a', value_enum)]
    pub algorithms: Vec<AlgorithmChoice>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(cmd: SearchCmd) -> Result<()> {
    let subject = load("subject", cmd.subject.as_deref(), cmd.subject_file.as_deref(), Alphabet::Dna)?;
    let pattern = load("pattern", cmd.pattern.as_deref(), cmd.pattern_file.as_deref(), Alphabet::Dna)?;
    let algorithms: Vec<Algorithm> = if cmd.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cmd.algorithms.iter().map(|&a| a.into()).collect()
    };

    let runs = compare_algorithms(subject.as_str(), pattern.as_str(), &algorithms);

    let mut out = cmd.output.open()?;
    if cmd.output.json {
        write_json(&mut out, &runs)?;
    } else {
        writeln!(out, "# subject: {} bp   pattern: {} bp", subject.len(), pattern.len())?;
        writeln!(out, "{:<20} {:>12} {:>14}  positions", "algorithm", "comparisons", "elapsed")?;
        for r in &runs {
            let elapsed = format!("{:.2?}", r.elapsed);
            writeln!(out, "{:<20} {:>12} {:>14}  {:?}", r.algorithm.name(), r.comparisons, elapsed, r.positions)?;
        }
    }
    out.flush()?;
    Ok(())
}
