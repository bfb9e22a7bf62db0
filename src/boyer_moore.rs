//! Boyer–Moore with the bad-character rule and the strong good-suffix rule.
//!
//! Windows are compared right to left. A mismatch at pattern index `j`
//! moves the pattern by the larger of
//! `max(1, j - last_occurrence[text symbol])` and `good_suffix[j]`; a full
//! match moves it by `good_suffix[0]`.
//!
//! The good-suffix table is built from the suffix-length array
//! (`suff[i]` = length of the longest common suffix of `pattern[..=i]` and
//! the whole pattern), the border technique described by Charras and Lecroq.
use crate::replay::{Recorder, ShiftReason};

/// Last index of every byte value in `pattern`, or -1 when absent.
pub fn bad_character_table(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

fn suffix_lengths(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len() as isize;
    let mut suff = vec![0isize; m as usize];
    if m == 0 {
        return Vec::new();
    }
    suff[(m - 1) as usize] = m;
    let (mut f, mut g) = (m - 1, m - 1);
    for i in (0..m - 1).rev() {
        if i > g && suff[(i + m - 1 - f) as usize] < i - g {
            suff[i as usize] = suff[(i + m - 1 - f) as usize];
        } else {
            g = g.min(i);
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[(g + m - 1 - f) as usize] {
                g -= 1;
            }
            suff[i as usize] = f - g;
        }
    }
    suff.into_iter().map(|s| s as usize).collect()
}

/// Strong good-suffix shift for a mismatch at each pattern index.
///
/// ```rust
/// use dnamatch::boyer_moore::good_suffix_table;
/// assert_eq!(good_suffix_table(b"GCAGAGAG"), vec![7, 7, 7, 2, 7, 4, 7, 1]);
/// ```
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let suff = suffix_lengths(pattern);
    let mut shift = vec![m; m];
    let mut j = 0;
    for i in (0..m).rev() {
        if suff[i] == i + 1 {
            while j < m - 1 - i {
                if shift[j] == m {
                    shift[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }
    for i in 0..m.saturating_sub(1) {
        shift[m - 1 - suff[i]] = m - 1 - i;
    }
    shift
}

pub(crate) fn scan(text: &[u8], pattern: &[u8], rec: &mut Recorder) -> usize {
    let (n, m) = (text.len(), pattern.len());
    let bad = bad_character_table(pattern);
    let good = good_suffix_table(pattern);
    let mut i = 0;
    while i + m <= n {
        let mismatch = (0..m).rev().find(|&j| !rec.compare(i, j, text[i + j], pattern[j]));
        let (shift, reason) = match mismatch {
            None => {
                rec.found(i);
                (good[0], ShiftReason::GoodSuffix)
            }
            Some(j) => {
                let bad_shift = (j as isize - bad[text[i + j] as usize]).max(1) as usize;
                if bad_shift >= good[j] {
                    (bad_shift, ShiftReason::BadCharacter)
                } else {
                    (good[j], ShiftReason::GoodSuffix)
                }
            }
        };
        rec.shift(shift, reason);
        i += shift;
    }
    i
}
