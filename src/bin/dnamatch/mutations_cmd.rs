use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dnamatch::*;
use serde::Serialize;

use crate::input::{load, write_json, Alphabet, OutputArgs};

/// Options for the `mutations` subcommand.
#[derive(Debug, Args)]
pub struct MutationsCmd {
    /// Reference sequence.
    #[arg(long, value_name = "SEQ")]
    pub original: Option<String>,
    /// FASTA file holding the reference (first record used).
    #[arg(long, value_name = "FILE")]
    pub original_file: Option<PathBuf>,
    /// Mutated sequence.
    #[arg(long, value_name = "SEQ")]
    pub mutated: Option<String>,
    /// FASTA file holding the mutated sequence (first record used).
    #[arg(long, value_name = "FILE")]
    pub mutated_file: Option<PathBuf>,
    /// Hotspot window length in bases.
    #[arg(long, default_value_t = 10)]
    pub window: usize,
    /// Report windows with more than this many mutations per base.
    #[arg(long, default_value_t = 0.3)]
    pub min_density: f64,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    analysis: &'a MutationAnalysisResult,
    hotspots: &'a [Hotspot],
}

pub fn run(cmd: MutationsCmd) -> Result<()> {
    let original = load("original", cmd.original.as_deref(), cmd.original_file.as_deref(), Alphabet::Dna)?;
    let mutated = load("mutated", cmd.mutated.as_deref(), cmd.mutated_file.as_deref(), Alphabet::Dna)?;

    let analysis = classify_mutations(original.as_str(), mutated.as_str());
    let params = HotspotParams { window: cmd.window, min_density: cmd.min_density };
    let hotspots = find_hotspots(&analysis.mutations, original.len().max(mutated.len()), &params)?;

    let mut out = cmd.output.open()?;
    if cmd.output.json {
        write_json(&mut out, &Report { analysis: &analysis, hotspots: &hotspots })?;
    } else {
        let s = analysis.impact_summary;
        writeln!(out, "# original: {} bp   mutated: {} bp", original.len(), mutated.len())?;
        writeln!(out, "Mutations: {}   rate: {:.4}", analysis.mutations.len(), analysis.mutation_rate)?;
        writeln!(out, "Impact: high {}   medium {}   low {}", s.high, s.medium, s.low)?;
        writeln!(out)?;
        writeln!(out, "{:>8}  {:<10} {:<7} {:<13} description", "position", "kind", "impact", "class")?;
        for m in &analysis.mutations {
            let class = m.substitution.map(|c| format!("{c:?}")).unwrap_or_else(|| "-".to_string());
            writeln!(out, "{:>8}  {:<10} {:<7} {:<13} {}", m.position, format!("{:?}", m.kind), format!("{:?}", m.impact), class, m.description)?;
        }
        if !hotspots.is_empty() {
            writeln!(out)?;
            writeln!(out, "Hotspots (window {}, density > {}):", params.window, params.min_density)?;
            for h in &hotspots {
                writeln!(out, "  {}..{}  {} mutations  density {:.2}", h.start, h.end, h.count, h.density)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
