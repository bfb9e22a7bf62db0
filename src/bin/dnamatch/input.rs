//! Sequence loading and output plumbing shared by the subcommands.
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, ValueEnum};
use dnamatch::{parse_fasta, Algorithm, Sequence};
use serde::Serialize;

/// Which symbols an input may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `A T G C N`
    Dna,
    /// Definite bases plus the IUPAC ambiguity codes.
    Iupac,
}

/// Take a sequence given inline or as the first record of a FASTA file,
/// normalise it and check it against `alphabet`.
pub fn load(name: &str, inline: Option<&str>, file: Option<&Path>, alphabet: Alphabet) -> Result<Sequence> {
    let raw = match (inline, file) {
        (Some(seq), None) => seq.to_string(),
        (None, Some(path)) => read_first_record(path)?,
        (Some(_), Some(_)) => bail!("give either --{name} or --{name}-file, not both"),
        (None, None) => bail!("missing --{name} or --{name}-file"),
    };
    let seq = match alphabet {
        Alphabet::Dna => Sequence::dna(&raw),
        Alphabet::Iupac => Sequence::iupac(&raw),
    };
    seq.with_context(|| format!("{name} sequence rejected"))
}

fn read_first_record(path: &Path) -> Result<String> {
    let mut s = String::new();
    File::open(path)
        .with_context(|| format!("open FASTA: {}", path.display()))?
        .read_to_string(&mut s)
        .with_context(|| format!("read FASTA: {}", path.display()))?;
    let rec = parse_fasta(&s)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no FASTA records in {}", path.display()))?;
    log::info!("{}: using record {} ({} bp)", path.display(), rec.id, rec.seq.len());
    Ok(rec.seq)
}

/// Output options common to every subcommand.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
    /// Write the report to a file instead of standard output.
    #[arg(long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,
}

impl OutputArgs {
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match &self.outfile {
            Some(path) => {
                let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(f)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Matcher names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Naive,
    Kmp,
    RabinKarp,
    Horspool,
    BoyerMoore,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(c: AlgorithmChoice) -> Self {
        match c {
            AlgorithmChoice::Naive => Algorithm::Naive,
            AlgorithmChoice::Kmp => Algorithm::Kmp,
            AlgorithmChoice::RabinKarp => Algorithm::RabinKarp,
            AlgorithmChoice::Horspool => Algorithm::Horspool,
            AlgorithmChoice::BoyerMoore => Algorithm::BoyerMoore,
        }
    }
}
