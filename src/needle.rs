//! Needleman–Wunsch global alignment with affine gaps.
use crate::align::{first_best, traceback, AlignmentMode, AlignmentResult, Dir, Grid};
use crate::scoring::ScoringScheme;

/// Align the whole of `a` against the whole of `b`.
///
/// Border cells cost `k * gap.open` for `k` leading gap positions. Aligning
/// against an empty sequence gives a result that is all gaps on that side.
///
/// ```rust
/// use dnamatch::{needle, ScoringScheme};
/// let r = needle("AAAA", "AAAATTTT", &ScoringScheme::default());
/// assert_eq!(r.aligned_a, "AAAA----");
/// assert_eq!(r.score, 3);
/// ```
pub fn needle(a: &str, b: &str, scheme: &ScoringScheme) -> AlignmentResult {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (m, n) = (a.len(), b.len());
    log::debug!("needle: {} x {} bp, gap {}/{}", m, n, scheme.gap.open, scheme.gap.extend);

    let mut grid = Grid::new(m + 1, n + 1);
    grid.set(0, 0, 0, Dir::Diag);
    for i in 1..=m {
        grid.set(i, 0, i as i32 * scheme.gap.open, Dir::Up);
    }
    for j in 1..=n {
        grid.set(0, j, j as i32 * scheme.gap.open, Dir::Left);
    }
    for i in 1..=m {
        for j in 1..=n {
            let moves = grid.moves(i, j, a[i - 1], b[j - 1], scheme);
            let (score, dir) = first_best(moves[0], &moves[1..]);
            grid.set(i, j, score, dir);
        }
    }

    let (path, _) = traceback(&grid, a, b, (m, n), AlignmentMode::Global);
    path.into_result(AlignmentMode::Global, grid.score(m, n), (0, m), (0, n), scheme)
}
