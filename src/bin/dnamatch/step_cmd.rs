use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dnamatch::*;

use crate::input::{load, write_json, AlgorithmChoice, Alphabet, OutputArgs};

/// Options for the `step` subcommand.
#[derive(Debug, Args)]
pub struct StepCmd {
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
    /// Matcher to replay.
    #[arg(long, short = 'a', value_enum, default_value_t = AlgorithmChoice::Horspool)]
    pub algorithm: AlgorithmChoice,
    /// Number of comparisons to run before reporting.
    #[arg(long, default_value_t = 0)]
    pub step: usize,
    /// Print every step instead of one.
    #[arg(long, conflicts_with = "step")]
    pub all: bool,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(cmd: StepCmd) -> Result<()> {
    let subject = load("subject", cmd.subject.as_deref(), cmd.subject_file.as_deref(), Alphabet::Dna)?;
    let pattern = load("pattern", cmd.pattern.as_deref(), cmd.pattern_file.as_deref(), Alphabet::Dna)?;
    let trace = StepTrace::record(subject.as_str(), pattern.as_str(), cmd.algorithm.into());
    let states: Vec<StepState> = if cmd.all { trace.iter().collect() } else { vec![trace.get(cmd.step)] };

    let mut out = cmd.output.open()?;
    if cmd.output.json {
        write_json(&mut out, &states)?;
    } else {
        writeln!(out, "# {}: {} steps", trace.result().algorithm, trace.len())?;
        for s in &states {
            write_state(&mut out, subject.as_str(), pattern.as_str(), s)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_state(out: &mut dyn Write, subject: &str, pattern: &str, s: &StepState) -> Result<()> {
    let action = match (s.phase, s.pattern_index) {
        (StepPhase::Comparing, Some(j)) => {
            let t = subject.as_bytes()[s.search_index + j] as char;
            let p = pattern.as_bytes()[j] as char;
            format!("compare text[{}]={} with pattern[{}]={}: {}", s.search_index + j, t, j, p, if s.is_match { "match" } else { "mismatch" })
        }
        (StepPhase::HashCheck, _) => format!("hash check at {}: {}", s.search_index, if s.is_match { "hit" } else { "miss" }),
        _ => "done".to_string(),
    };
    let shift = match s.shift_reason {
        Some(reason) => format!("last shift {} ({})", s.last_shift, reason),
        None => "no shift yet".to_string(),
    };
    writeln!(out, "step {:>4}  window {:>4}  comparisons {:>4}  {}  found {:?}  {}", s.step, s.search_index, s.comparisons_so_far, action, s.positions_found, shift)?;
    Ok(())
}
