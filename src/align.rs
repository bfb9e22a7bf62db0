//! Pairwise alignment with affine gaps.
//!
//! Both aligners fill one `(|a|+1) x (|b|+1)` grid holding a score and the
//! direction that produced it. There are no separate gap-state matrices:
//! a vertical move into `(i, j)` costs `gap.extend` when the cell above was
//! itself reached vertically and `gap.open` otherwise (horizontally
//! likewise). Ties are broken diagonal first, then up, then left; the local
//! aligner prefers restarting at zero over any move of equal score.
//!
//! The CIGAR string uses `M` for an aligned column, `D` for a gap in `b`
//! and `I` for a gap in `a`.
//!
//! ```rust
//! use dnamatch::{align, AlignmentMode, ScoringScheme};
//! let r = align("ACGTTGCA", "ACGGCA", &ScoringScheme::default(), AlignmentMode::Global);
//! assert_eq!(r.aligned_a, "ACGTTGCA");
//! assert_eq!(r.aligned_b, "ACG--GCA");
//! assert_eq!(r.score, 9);
//! assert_eq!(r.cigar, "3M2D3M");
//! ```

use std::fmt;

use serde::Serialize;

use crate::scoring::ScoringScheme;
use crate::stats::AlignmentStats;
use crate::{needle, water};

/// Gap symbol used in aligned strings.
pub const GAP: u8 = b'-';

/// Global (Needleman–Wunsch) or local (Smith–Waterman) alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AlignmentMode {
    Global,
    Local,
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlignmentMode::Global => "global",
            AlignmentMode::Local => "local",
        })
    }
}

/// An aligned pair with its score and statistics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignmentResult {
    pub mode: AlignmentMode,
    /// `a` with gaps inserted; same length as `aligned_b`.
    pub aligned_a: String,
    /// `b` with gaps inserted.
    pub aligned_b: String,
    /// Corner cell for global alignments, best cell for local ones.
    pub score: i32,
    pub stats: AlignmentStats,
    /// Start (inclusive) and end (exclusive) of the aligned region of `a`.
    pub range_a: (usize, usize),
    /// Start (inclusive) and end (exclusive) of the aligned region of `b`.
    pub range_b: (usize, usize),
    /// Run-length edit operations, e.g. `3M2D3M`.
    pub cigar: String,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }
}

/// Align `a` against `b` under `scheme`.
pub fn align(a: &str, b: &str, scheme: &ScoringScheme, mode: AlignmentMode) -> AlignmentResult {
    match mode {
        AlignmentMode::Global => needle::needle(a, b, scheme),
        AlignmentMode::Local => water::water(a, b, scheme),
    }
}

/// Move that produced a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    /// Local restart (or an untouched cell).
    Stop,
    Diag,
    /// Consumes a symbol of `a` only (gap in `b`).
    Up,
    /// Consumes a symbol of `b` only (gap in `a`).
    Left,
}

/// Row-major score and traceback grid.
pub(crate) struct Grid {
    score: Vec<i32>,
    dir: Vec<Dir>,
    cols: usize,
}

impl Grid {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self { score: vec![0; rows * cols], dir: vec![Dir::Stop; rows * cols], cols }
    }

    #[inline]
    pub(crate) fn score(&self, i: usize, j: usize) -> i32 {
        self.score[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn dir(&self, i: usize, j: usize) -> Dir {
        self.dir[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, score: i32, dir: Dir) {
        self.score[i * self.cols + j] = score;
        self.dir[i * self.cols + j] = dir;
    }

    /// Diagonal, up and left candidates for cell `(i, j)`, in tie-break order.
    /// Requires `i > 0 && j > 0`.
    pub(crate) fn moves(&self, i: usize, j: usize, x: u8, y: u8, scheme: &ScoringScheme) -> [(i32, Dir); 3] {
        let gap = |prev: Dir, along: Dir| if prev == along { scheme.gap.extend } else { scheme.gap.open };
        [
            (self.score(i - 1, j - 1) + scheme.score(x, y), Dir::Diag),
            (self.score(i - 1, j) + gap(self.dir(i - 1, j), Dir::Up), Dir::Up),
            (self.score(i, j - 1) + gap(self.dir(i, j - 1), Dir::Left), Dir::Left),
        ]
    }
}

/// First strictly best candidate; earlier entries win ties.
pub(crate) fn first_best(first: (i32, Dir), rest: &[(i32, Dir)]) -> (i32, Dir) {
    rest.iter().fold(first, |best, &c| if c.0 > best.0 { c } else { best })
}

/// Walk back from `(i, j)`. Global tracebacks run to the origin, consuming
/// the border once either index reaches zero; local ones stop at a zero cell
/// or at the border. Returns the path and the cell where it stopped.
pub(crate) fn traceback(
    grid: &Grid,
    a: &[u8],
    b: &[u8],
    (mut i, mut j): (usize, usize),
    mode: AlignmentMode,
) -> (Path, (usize, usize)) {
    let mut path = Path::default();
    loop {
        let dir = match mode {
            AlignmentMode::Global if i == 0 && j == 0 => break,
            AlignmentMode::Global if i == 0 => Dir::Left,
            AlignmentMode::Global if j == 0 => Dir::Up,
            AlignmentMode::Local if i == 0 || j == 0 || grid.score(i, j) == 0 => break,
            _ => grid.dir(i, j),
        };
        match dir {
            Dir::Diag => {
                path.push(a[i - 1], b[j - 1], 'M');
                i -= 1;
                j -= 1;
            }
            Dir::Up => {
                path.push(a[i - 1], GAP, 'D');
                i -= 1;
            }
            Dir::Left => {
                path.push(GAP, b[j - 1], 'I');
                j -= 1;
            }
            Dir::Stop => break,
        }
    }
    (path, (i, j))
}

/// Alignment columns collected end to start.
#[derive(Default)]
pub(crate) struct Path {
    a: Vec<u8>,
    b: Vec<u8>,
    ops: Vec<(char, usize)>,
}

impl Path {
    fn push(&mut self, x: u8, y: u8, op: char) {
        self.a.push(x);
        self.b.push(y);
        push_cigar(&mut self.ops, op, 1);
    }

    pub(crate) fn into_result(
        mut self,
        mode: AlignmentMode,
        score: i32,
        range_a: (usize, usize),
        range_b: (usize, usize),
        scheme: &ScoringScheme,
    ) -> AlignmentResult {
        self.a.reverse();
        self.b.reverse();
        self.ops.reverse();
        let aligned_a: String = self.a.iter().map(|&c| c as char).collect();
        let aligned_b: String = self.b.iter().map(|&c| c as char).collect();
        let cigar = self.ops.into_iter().map(|(op, len)| format!("{len}{op}")).collect::<String>();
        let stats = AlignmentStats::compute(&aligned_a, &aligned_b, scheme);
        AlignmentResult { mode, aligned_a, aligned_b, score, stats, range_a, range_b, cigar }
    }
}

fn push_cigar(ops: &mut Vec<(char, usize)>, op: char, k: usize) {
    if let Some(last) = ops.last_mut() {
        if last.0 == op {
            last.1 += k;
            return;
        }
    }
    ops.push((op, k));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::GapPenalty;

    #[test]
    fn dispatches_on_mode() {
        let s = ScoringScheme::default();
        let g = align("GATTACA", "GCATGCA", &s, AlignmentMode::Global);
        let l = align("GATTACA", "GCATGCA", &s, AlignmentMode::Local);
        assert_eq!(g.mode, AlignmentMode::Global);
        assert_eq!(l.mode, AlignmentMode::Local);
        assert_eq!(g, needle::needle("GATTACA", "GCATGCA", &s));
        assert_eq!(l, water::water("GATTACA", "GCATGCA", &s));
    }

    #[test]
    fn first_best_prefers_earlier_on_ties() {
        let c = [(3, Dir::Diag), (3, Dir::Up), (3, Dir::Left)];
        assert_eq!(first_best(c[0], &c[1..]), (3, Dir::Diag));
        assert_eq!(first_best((0, Dir::Stop), &[(0, Dir::Diag), (-1, Dir::Up)]), (0, Dir::Stop));
        assert_eq!(first_best((1, Dir::Diag), &[(2, Dir::Up), (2, Dir::Left)]), (2, Dir::Up));
    }

    #[test]
    fn cigar_runs_merge() {
        let mut ops = Vec::new();
        for op in ['M', 'M', 'D', 'D', 'M', 'I'] {
            push_cigar(&mut ops, op, 1);
        }
        assert_eq!(ops, vec![('M', 2), ('D', 2), ('M', 1), ('I', 1)]);
    }

    #[test]
    fn gap_presets_change_the_score_not_the_path() {
        for (gap, score) in [(GapPenalty::DEFAULT, 9), (GapPenalty::STRICT, 6), (GapPenalty::LENIENT, 10)] {
            let r = align("ACGTTGCA", "ACGGCA", &ScoringScheme::with_gap(gap), AlignmentMode::Global);
            assert_eq!(r.aligned_b, "ACG--GCA");
            assert_eq!(r.score, score, "{gap:?}");
        }
    }

    #[test]
    fn no_column_is_gapped_twice() {
        let s = ScoringScheme::default();
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let r = align("TTTACGTAAA", "GGACGTGG", &s, mode);
            assert_eq!(r.aligned_a.len(), r.aligned_b.len());
            assert!(r.aligned_a.bytes().zip(r.aligned_b.bytes()).all(|(x, y)| !(x == GAP && y == GAP)));
        }
    }
}
