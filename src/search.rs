//! Exact pattern search over nucleotide strings.
//!
//! Five interchangeable matchers share one contract: for the same subject
//! and pattern they return the same match positions, left to right. They
//! differ only in how many symbol comparisons they spend, and that count is
//! part of the result so callers can compare them.
//!
//! Matching is case-sensitive and literal. Ambiguity codes are ordinary
//! symbols here; only the aligners expand them.
//!
//! ```rust
//! use dnamatch::{search, Algorithm};
//! let hit = search("ATGCATGC", "ATGC", Algorithm::BoyerMoore);
//! assert_eq!(hit.positions, vec![0, 4]);
//! let none = search("AAAA", "", Algorithm::Naive);
//! assert!(none.positions.is_empty());
//! assert_eq!(none.comparisons, 0);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::replay::{Recorder, Snapshot};
use crate::{boyer_moore, horspool, kmp, naive, rabin_karp};

/// The exact-match algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// Left-to-right comparison at every offset.
    Naive,
    /// Knuth–Morris–Pratt with a longest-proper-prefix-suffix table.
    Kmp,
    /// Rolling hash, verified character by character on a hit.
    RabinKarp,
    /// Boyer–Moore–Horspool bad-character shifts.
    Horspool,
    /// Boyer–Moore with bad-character and strong good-suffix shifts.
    BoyerMoore,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] =
        [Algorithm::Naive, Algorithm::Kmp, Algorithm::RabinKarp, Algorithm::Horspool, Algorithm::BoyerMoore];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Kmp => "Knuth-Morris-Pratt",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Horspool => "Horspool",
            Algorithm::BoyerMoore => "Boyer-Moore",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub algorithm: Algorithm,
    /// 0-based start offsets, in discovery (ascending) order.
    pub positions: Vec<usize>,
    /// Symbol (and, for Rabin–Karp, hash) comparisons performed.
    pub comparisons: usize,
    /// Wall-clock time spent in the scan.
    pub elapsed: Duration,
}

/// Find every occurrence of `pattern` in `subject` with `algorithm`.
///
/// An empty pattern, or one longer than the subject, yields no positions and
/// zero comparisons.
pub fn search(subject: &str, pattern: &str, algorithm: Algorithm) -> MatchResult {
    let (result, _) = run(subject.as_bytes(), pattern.as_bytes(), algorithm, Recorder::new());
    result
}

/// Run several algorithms on the same input, in the order given.
pub fn compare_algorithms(subject: &str, pattern: &str, algorithms: &[Algorithm]) -> Vec<MatchResult> {
    algorithms.iter().map(|&a| search(subject, pattern, a)).collect()
}

pub(crate) fn run(text: &[u8], pattern: &[u8], algorithm: Algorithm, mut rec: Recorder) -> (MatchResult, Vec<Snapshot>) {
    log::debug!("{}: subject {} bp, pattern {} bp", algorithm, text.len(), pattern.len());
    let start = Instant::now();
    if pattern.is_empty() || pattern.len() > text.len() {
        return rec.finish(algorithm, 0, Duration::ZERO);
    }
    let window = match algorithm {
        Algorithm::Naive => naive::scan(text, pattern, &mut rec),
        Algorithm::Kmp => kmp::scan(text, pattern, &mut rec),
        Algorithm::RabinKarp => rabin_karp::scan(text, pattern, &mut rec),
        Algorithm::Horspool => horspool::scan(text, pattern, &mut rec),
        Algorithm::BoyerMoore => boyer_moore::scan(text, pattern, &mut rec),
    };
    rec.finish(algorithm, window, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all(text: &str, pattern: &str, expected: &[usize]) {
        for algorithm in Algorithm::ALL {
            let r = search(text, pattern, algorithm);
            assert_eq!(r.positions, expected, "{algorithm}");
            assert_eq!(r.algorithm, algorithm);
        }
    }

    #[test]
    fn matches_at_both_ends() {
        assert_all("ATGCATGC", "ATGC", &[0, 4]);
        assert_all("TTTTACGT", "ACGT", &[4]);
    }

    #[test]
    fn overlapping_matches() {
        assert_all("AAAAAA", "AA", &[0, 1, 2, 3, 4]);
        assert_all("ATATATA", "ATA", &[0, 2, 4]);
    }

    #[test]
    fn no_match_and_degenerate_inputs() {
        assert_all("ACGTACGT", "TTTT", &[]);
        assert_all("ACG", "ACGT", &[]);
        assert_all("", "A", &[]);
        assert_all("ACGT", "ACGT", &[0]);
        assert_all("ACGT", "G", &[2]);
    }

    #[test]
    fn ambiguity_codes_are_literal() {
        assert_all("ANGCATGC", "ATGC", &[4]);
        assert_all("ANGCATGC", "ANGC", &[0]);
    }

    #[test]
    fn degenerate_inputs_cost_nothing() {
        for algorithm in Algorithm::ALL {
            assert_eq!(search("AAAA", "", algorithm).comparisons, 0);
            assert_eq!(search("AA", "AAA", algorithm).comparisons, 0);
        }
    }

    #[test]
    fn compare_keeps_requested_order() {
        let runs = compare_algorithms("GATTACA", "TA", &[Algorithm::Horspool, Algorithm::Naive]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].algorithm, Algorithm::Horspool);
        assert_eq!(runs[1].algorithm, Algorithm::Naive);
        assert_eq!(runs[0].positions, runs[1].positions);
    }
}
