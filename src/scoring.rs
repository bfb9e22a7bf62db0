//! Nucleotide substitution scores, IUPAC ambiguity resolution and affine gap
//! penalties.
//!
//! Definite bases score `match_score` against themselves and `mismatch`
//! against any other definite base. An ambiguity code (including `N`) is
//! resolved optimistically: the pair scores the **maximum** over every
//! concrete expansion of both symbols, so `R` (A/G) against `A` scores as a
//! match. Symbols that are neither definite nor ambiguous (gaps, `X`, ...)
//! score [`UNKNOWN_SCORE`].
//!
//! ```rust
//! use dnamatch::{GapPenalty, ScoringScheme};
//! let scheme = ScoringScheme::default();
//! assert_eq!(scheme.score(b'A', b'A'), 2);
//! assert_eq!(scheme.score(b'A', b'C'), -1);
//! assert_eq!(scheme.score(b'R', b'G'), 2);
//! assert_eq!(scheme.score(b'A', b'-'), -1);
//! assert_eq!(scheme.gap, GapPenalty::DEFAULT);
//! ```

use serde::Serialize;

use crate::common::DnaMatchError;

/// Score for two identical definite bases.
pub const DNA_MATCH: i32 = 2;
/// Score for two different definite bases.
pub const DNA_MISMATCH: i32 = -1;
/// Score for any pair involving a symbol outside the nucleotide alphabet.
pub const UNKNOWN_SCORE: i32 = -1;

/// Concrete bases an IUPAC symbol stands for. Definite bases expand to
/// themselves; anything else expands to nothing.
pub fn expand(symbol: u8) -> &'static [u8] {
    match symbol.to_ascii_uppercase() {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'S' => b"GC",
        b'W' => b"AT",
        b'K' => b"GT",
        b'M' => b"AC",
        b'B' => b"CGT",
        b'D' => b"AGT",
        b'H' => b"ACT",
        b'V' => b"ACG",
        b'N' => b"ACGT",
        _ => b"",
    }
}

/// `true` for the IUPAC ambiguity codes `R Y S W K M B D H V N`.
pub fn is_ambiguity_code(symbol: u8) -> bool {
    expand(symbol).len() > 1
}

/// Affine gap penalty: `open` is charged for the first position of a gap,
/// `extend` for each further position. Both are zero or negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GapPenalty {
    pub open: i32,
    pub extend: i32,
}

impl GapPenalty {
    pub const DEFAULT: GapPenalty = GapPenalty { open: -2, extend: -1 };
    pub const STRICT: GapPenalty = GapPenalty { open: -4, extend: -2 };
    /// Integer scores only, so the extension cost is -1 rather than -0.5.
    pub const LENIENT: GapPenalty = GapPenalty { open: -1, extend: -1 };

    /// Build a penalty pair, rejecting positive (rewarding) values.
    pub fn new(open: i32, extend: i32) -> Result<Self, DnaMatchError> {
        if open > 0 || extend > 0 {
            return Err(DnaMatchError::InvalidGapPenalty { open, extend });
        }
        Ok(Self { open, extend })
    }
}

impl Default for GapPenalty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Substitution scores plus gap penalties, passed explicitly to every
/// alignment call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoringScheme {
    /// Score for identical definite bases.
    pub match_score: i32,
    /// Score for differing definite bases.
    pub mismatch: i32,
    /// Affine gap penalties.
    pub gap: GapPenalty,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self { match_score: DNA_MATCH, mismatch: DNA_MISMATCH, gap: GapPenalty::DEFAULT }
    }
}

impl ScoringScheme {
    /// Default substitution scores with the given gap penalties.
    pub fn with_gap(gap: GapPenalty) -> Self {
        Self { gap, ..Self::default() }
    }

    /// Symmetric substitution score for one pair of symbols.
    pub fn score(&self, a: u8, b: u8) -> i32 {
        let (xs, ys) = (expand(a), expand(b));
        if xs.is_empty() || ys.is_empty() {
            return UNKNOWN_SCORE;
        }
        let mut best = i32::MIN;
        for &x in xs {
            for &y in ys {
                let s = if x == y { self.match_score } else { self.mismatch };
                best = best.max(s);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definite_bases() {
        let s = ScoringScheme::default();
        for &a in b"ACGT" {
            for &b in b"ACGT" {
                let expected = if a == b { 2 } else { -1 };
                assert_eq!(s.score(a, b), expected);
            }
        }
    }

    #[test]
    fn ambiguity_takes_cartesian_max() {
        let s = ScoringScheme::default();
        assert_eq!(s.score(b'N', b'A'), 2);
        assert_eq!(s.score(b'N', b'N'), 2);
        assert_eq!(s.score(b'R', b'Y'), -1);
        assert_eq!(s.score(b'S', b'B'), 2);
        assert_eq!(s.score(b'r', b'a'), 2);
    }

    #[test]
    fn scores_are_symmetric() {
        let s = ScoringScheme::default();
        let alphabet = b"ACGTRYSWKMBDHVN-X";
        for &a in alphabet {
            for &b in alphabet {
                assert_eq!(s.score(a, b), s.score(b, a));
            }
        }
    }

    #[test]
    fn unknown_symbols_score_as_mismatch() {
        let s = ScoringScheme::default();
        assert_eq!(s.score(b'X', b'A'), UNKNOWN_SCORE);
        assert_eq!(s.score(b'-', b'N'), UNKNOWN_SCORE);
        assert!(!is_ambiguity_code(b'A'));
        assert!(is_ambiguity_code(b'N'));
        assert!(!is_ambiguity_code(b'X'));
    }

    #[test]
    fn gap_penalty_rejects_rewards() {
        assert_eq!(GapPenalty::new(-3, -1), Ok(GapPenalty { open: -3, extend: -1 }));
        assert!(GapPenalty::new(0, 0).is_ok());
        assert_eq!(
            GapPenalty::new(1, -1),
            Err(DnaMatchError::InvalidGapPenalty { open: 1, extend: -1 })
        );
        assert_eq!(ScoringScheme::with_gap(GapPenalty::STRICT).gap.open, -4);
    }
}
