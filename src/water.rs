//! Smith–Waterman local alignment with affine gaps.
use crate::align::{first_best, traceback, AlignmentMode, AlignmentResult, Dir, Grid};
use crate::scoring::ScoringScheme;

/// Best-scoring local alignment of `a` and `b`.
///
/// Cells are floored at zero. The traceback starts from the first maximum
/// met in row-major order and stops at the first zero cell. Unrelated or
/// empty inputs give an empty alignment with score 0.
///
/// ```rust
/// use dnamatch::{water, ScoringScheme};
/// let r = water("TTTACGTAAA", "GGACGTGG", &ScoringScheme::default());
/// assert_eq!(r.aligned_a, "ACGT");
/// assert_eq!((r.range_a, r.range_b), ((3, 7), (2, 6)));
/// ```
pub fn water(a: &str, b: &str, scheme: &ScoringScheme) -> AlignmentResult {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (m, n) = (a.len(), b.len());
    log::debug!("water: {} x {} bp, gap {}/{}", m, n, scheme.gap.open, scheme.gap.extend);

    let mut grid = Grid::new(m + 1, n + 1);
    let (mut best, mut best_at) = (0, (0, 0));
    for i in 1..=m {
        for j in 1..=n {
            let moves = grid.moves(i, j, a[i - 1], b[j - 1], scheme);
            let (score, dir) = first_best((0, Dir::Stop), &moves);
            grid.set(i, j, score, dir);
            if score > best {
                best = score;
                best_at = (i, j);
            }
        }
    }

    let (path, (start_a, start_b)) = traceback(&grid, a, b, best_at, AlignmentMode::Local);
    path.into_result(AlignmentMode::Local, best, (start_a, best_at.0), (start_b, best_at.1), scheme)
}
