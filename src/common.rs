//! Input-layer helpers shared by the library and the CLI: the crate error
//! type, sequence normalisation and validation, the validated [`Sequence`]
//! newtype and a minimal FASTA reader.
//!
//! The algorithm modules never call into the validators. They are total over
//! any pair of strings; validation happens once, upstream, before a sequence
//! is handed to them.
//!
//! ## Examples
//! ```rust
//! use dnamatch::{normalize_sequence, Sequence};
//! let raw = "atg cat\ngc";
//! assert_eq!(normalize_sequence(raw), "ATGCATGC");
//! let seq = Sequence::dna(raw).unwrap();
//! assert_eq!(seq.as_str(), "ATGCATGC");
//! assert!(Sequence::dna("ATGX").is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::scoring::is_ambiguity_code;

/// Errors reported by the input layer of this crate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DnaMatchError {
    /// A character outside the accepted alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// Gap penalties must be zero or negative.
    #[error("gap penalties must be <= 0 (open={open}, extend={extend})")]
    InvalidGapPenalty { open: i32, extend: i32 },
    /// Returned if a hotspot window is zero.
    #[error("hotspot window must be > 0 (window={window})")]
    InvalidWindow { window: usize },
    /// Returned when sequence input is malformed.
    #[error("invalid sequence input: {0}")]
    InvalidSequence(&'static str),
}

/// Strip all whitespace and uppercase the remaining symbols.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check that `seq` only holds `A`, `T`, `G`, `C` or `N`.
pub fn validate_dna(seq: &str) -> Result<(), DnaMatchError> {
    validate_with(seq, |c| matches!(c, 'A' | 'T' | 'G' | 'C' | 'N'))
}

/// Check that `seq` only holds definite bases or IUPAC ambiguity codes.
pub fn validate_iupac(seq: &str) -> Result<(), DnaMatchError> {
    validate_with(seq, |c| matches!(c, 'A' | 'T' | 'G' | 'C') || (c.is_ascii() && is_ambiguity_code(c as u8)))
}

fn validate_with(seq: &str, accept: impl Fn(char) -> bool) -> Result<(), DnaMatchError> {
    match seq.chars().enumerate().find(|(_, c)| !accept(*c)) {
        Some((position, symbol)) => Err(DnaMatchError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

/// An immutable, normalised and validated nucleotide sequence.
///
/// Construct with [`Sequence::dna`] for search input (`ATGCN`) or
/// [`Sequence::iupac`] for alignment input, which additionally admits the
/// ambiguity codes `R Y S W K M B D H V`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    /// Normalise `raw` and accept it if it only holds `ATGCN`.
    pub fn dna(raw: &str) -> Result<Self, DnaMatchError> {
        let seq = normalize_sequence(raw);
        validate_dna(&seq)?;
        Ok(Self(seq))
    }

    /// Normalise `raw` and accept it if it holds definite or ambiguous bases.
    pub fn iupac(raw: &str) -> Result<Self, DnaMatchError> {
        let seq = normalize_sequence(raw);
        validate_iupac(&seq)?;
        Ok(Self(seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A simple in-memory FASTA record parsed by [`parse_fasta`].
#[derive(Clone, Debug)]
pub struct FastaRecord {
    /// Identifier from the FASTA header (first word after '>').
    pub id: String,
    /// Sequence with whitespace removed and letters uppercased. Symbols are
    /// not validated here.
    pub seq: String,
}

/// Parse a minimal FASTA string into a vector of [`FastaRecord`].
///
/// *Lines starting with `>` start a new record.* All other lines are
/// normalised and appended to the current sequence. Text before the first
/// header is ignored.
///
/// ```rust
/// use dnamatch::parse_fasta;
/// let recs = parse_fasta(">id desc\nac\nGT\n>b\nNN\n");
/// assert_eq!(recs.len(), 2);
/// assert_eq!(recs[0].id, "id");
/// assert_eq!(recs[0].seq, "ACGT");
/// ```
pub fn parse_fasta(text: &str) -> Vec<FastaRecord> {
    let mut out: Vec<FastaRecord> = vec![];
    let mut current: Option<FastaRecord> = None;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                out.push(done);
            }
            let id = rest.split_whitespace().next().unwrap_or("").to_string();
            current = Some(FastaRecord { id, seq: String::new() });
        } else if let Some(rec) = current.as_mut() {
            rec.seq.push_str(&normalize_sequence(line));
        }
    }
    out.extend(current);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_uppercases() {
        assert_eq!(normalize_sequence(" a t\tg\r\nc "), "ATGC");
        assert_eq!(normalize_sequence(""), "");
    }

    #[test]
    fn dna_validation_reports_first_bad_symbol() {
        assert!(validate_dna("ATGCN").is_ok());
        assert_eq!(
            validate_dna("ATGRX"),
            Err(DnaMatchError::InvalidSymbol { symbol: 'R', position: 3 })
        );
    }

    #[test]
    fn iupac_validation_admits_ambiguity_codes() {
        assert!(validate_iupac("ATGCRYSWKMBDHVN").is_ok());
        assert_eq!(
            validate_iupac("ACU"),
            Err(DnaMatchError::InvalidSymbol { symbol: 'U', position: 2 })
        );
        assert!(validate_iupac("AC-").is_err());
    }

    #[test]
    fn sequence_constructors_normalise() {
        let s = Sequence::iupac("ac gr").unwrap();
        assert_eq!(s.as_str(), "ACGR");
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "ACGR");
        assert!(Sequence::dna("acgr").is_err());
        assert!(Sequence::dna("").unwrap().is_empty());
    }

    #[test]
    fn fasta_ignores_preamble_and_keeps_empty_records() {
        let recs = parse_fasta("junk\n>a\nAC\n>b\n>c x\ngt\n");
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].seq, "AC");
        assert_eq!(recs[1].seq, "");
        assert_eq!(recs[2].id, "c");
        assert_eq!(recs[2].seq, "GT");
    }
}
