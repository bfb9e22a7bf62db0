use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dnamatch::*;

use crate::input::{load, write_json, Alphabet, OutputArgs};

/// Options for the `align` subcommand.
#[derive(Debug, Args)]
pub struct AlignCmd {
    /// First sequence (IUPAC codes allowed).
    #[arg(long, value_name = "SEQ")]
    pub asequence: Option<String>,
    /// FASTA file holding the first sequence (first record used).
    #[arg(long, value_name = "FILE")]
    pub asequence_file: Option<PathBuf>,
    /// Second sequence (IUPAC codes allowed).
    #[arg(long, value_name = "SEQ")]
    pub bsequence: Option<String>,
    /// FASTA file holding the second sequence (first record used).
    #[arg(long, value_name = "FILE")]
    pub bsequence_file: Option<PathBuf>,
    /// Global or local alignment.
    #[arg(long, value_enum, default_value_t = ModeChoice::Global)]
    pub mode: ModeChoice,
    /// Score for identical bases.
    #[arg(long, default_value_t = 2)]
    pub match_score: i32,
    /// Score for differing bases.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub mismatch: i32,
    /// Gap penalty preset.
    #[arg(long, value_enum, default_value_t = GapChoice::Default)]
    pub gap: GapChoice,
    /// Gap open penalty (<= 0); overrides the preset.
    #[arg(long, allow_negative_numbers = true)]
    pub gap_open: Option<i32>,
    /// Gap extension penalty (<= 0); overrides the preset.
    #[arg(long, allow_negative_numbers = true)]
    pub gap_extend: Option<i32>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeChoice { Global, Local }

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GapChoice { Default, Strict, Lenient }

impl AlignCmd {
    fn scheme(&self) -> Result<ScoringScheme> {
        let preset = match self.gap {
            GapChoice::Default => GapPenalty::DEFAULT,
            GapChoice::Strict => GapPenalty::STRICT,
            GapChoice::Lenient => GapPenalty::LENIENT,
        };
        let gap = GapPenalty::new(self.gap_open.unwrap_or(preset.open), self.gap_extend.unwrap_or(preset.extend))
            .context("bad gap penalties")?;
        Ok(ScoringScheme { match_score: self.match_score, mismatch: self.mismatch, gap })
    }
}

pub fn run(cmd: AlignCmd) -> Result<()> {
    let a = load("asequence", cmd.asequence.as_deref(), cmd.asequence_file.as_deref(), Alphabet::Iupac)?;
    let b = load("bsequence", cmd.bsequence.as_deref(), cmd.bsequence_file.as_deref(), Alphabet::Iupac)?;
    let scheme = cmd.scheme()?;
    let mode = match cmd.mode {
        ModeChoice::Global => AlignmentMode::Global,
        ModeChoice::Local => AlignmentMode::Local,
    };

    let aln = align(a.as_str(), b.as_str(), &scheme, mode);

    let mut out = cmd.output.open()?;
    if cmd.output.json {
        write_json(&mut out, &aln)?;
    } else {
        writeln!(out, "# {} alignment", aln.mode)?;
        writeln!(out, "# A: {} bp, aligned {}..{}", a.len(), aln.range_a.0, aln.range_a.1)?;
        writeln!(out, "# B: {} bp, aligned {}..{}", b.len(), aln.range_b.0, aln.range_b.1)?;
        writeln!(out, "# Scoring: match {} mismatch {} gap open {} extend {}", scheme.match_score, scheme.mismatch, scheme.gap.open, scheme.gap.extend)?;
        writeln!(out, "Score: {}", aln.score)?;
        writeln!(out, "Length: {}", aln.stats.length)?;
        writeln!(out, "Identity: {:.2}%   Similarity: {:.2}%   Gaps: {} ({:.2}%)", aln.stats.identity, aln.stats.similarity, aln.stats.gap_count, aln.stats.gap_percentage)?;
        writeln!(out, "CIGAR: {}", aln.cigar)?;
        writeln!(out)?;
        write_blocks(&mut out, &aln, &scheme)?;
    }
    out.flush()?;
    Ok(())
}

/// Blocked alignment printing (60 cols): `|` identical, `:` positive score,
/// `.` mismatch, blank for gaps.
fn write_blocks(out: &mut dyn Write, aln: &AlignmentResult, scheme: &ScoringScheme) -> Result<()> {
    let a = aln.aligned_a.as_bytes();
    let b = aln.aligned_b.as_bytes();
    for (a_block, b_block) in a.chunks(60).zip(b.chunks(60)) {
        let mid: String = a_block.iter().zip(b_block).map(|(&x, &y)| {
            if x == b'-' || y == b'-' { ' ' } else if x == y { '|' } else if scheme.score(x, y) > 0 { ':' } else { '.' }
        }).collect();
        writeln!(out, "A {}", String::from_utf8_lossy(a_block))?;
        writeln!(out, "  {}", mid)?;
        writeln!(out, "B {}", String::from_utf8_lossy(b_block))?;
        writeln!(out)?;
    }
    Ok(())
}
