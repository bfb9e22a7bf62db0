//! Identity, similarity and gap metrics for an aligned pair.
//!
//! A column is identical when both symbols are equal, similar when it is
//! identical or its substitution score is positive, and gapped when either
//! side is `-`. Percentages are over all columns; an empty alignment reports
//! zero everywhere.
//!
//! ```rust
//! use dnamatch::compute_stats;
//! let s = compute_stats("ACG--GCA", "ACGTTGCA");
//! assert_eq!(s.identity, 75.0);
//! assert_eq!(s.gap_count, 2);
//! assert_eq!(s.length, 8);
//! ```

use serde::Serialize;

use crate::align::GAP;
use crate::common::DnaMatchError;
use crate::scoring::ScoringScheme;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AlignmentStats {
    /// Percentage of identical columns.
    pub identity: f64,
    /// Percentage of identical or positively scoring columns.
    pub similarity: f64,
    /// Columns with a gap on either side.
    pub gap_count: usize,
    pub gap_percentage: f64,
    /// Number of columns.
    pub length: usize,
}

impl AlignmentStats {
    /// Metrics for an aligned pair under `scheme`. Only the columns both
    /// strings share are counted; use [`AlignmentStats::checked`] to reject
    /// unequal lengths.
    pub fn compute(aligned_a: &str, aligned_b: &str, scheme: &ScoringScheme) -> Self {
        let (mut identical, mut similar, mut gaps, mut length) = (0usize, 0usize, 0usize, 0usize);
        for (x, y) in aligned_a.bytes().zip(aligned_b.bytes()) {
            length += 1;
            if x == GAP || y == GAP {
                gaps += 1;
            } else if x == y {
                identical += 1;
                similar += 1;
            } else if scheme.score(x, y) > 0 {
                similar += 1;
            }
        }
        let cols = length.max(1) as f64;
        Self {
            identity: identical as f64 * 100.0 / cols,
            similarity: similar as f64 * 100.0 / cols,
            gap_count: gaps,
            gap_percentage: gaps as f64 * 100.0 / cols,
            length,
        }
    }

    /// Like [`AlignmentStats::compute`], but both strings must have the same length.
    pub fn checked(aligned_a: &str, aligned_b: &str, scheme: &ScoringScheme) -> Result<Self, DnaMatchError> {
        if aligned_a.len() != aligned_b.len() {
            return Err(DnaMatchError::InvalidSequence("aligned sequences differ in length"));
        }
        Ok(Self::compute(aligned_a, aligned_b, scheme))
    }
}

/// Statistics under the default scoring scheme.
pub fn compute_stats(aligned_a: &str, aligned_b: &str) -> AlignmentStats {
    AlignmentStats::compute(aligned_a, aligned_b, &ScoringScheme::default())
}
