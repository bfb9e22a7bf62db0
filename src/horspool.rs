//! Boyer–Moore–Horspool.
//!
//! Each window is compared right to left. On a mismatch the pattern moves by
//! the shift-table entry of the **text** symbol under the pattern's last
//! position; after a full match it moves by one so overlapping occurrences
//! are still found.
use crate::replay::{Recorder, ShiftReason};

/// Bad-character shift for every byte value.
///
/// Symbols occurring in `pattern[..m-1]` map to their distance from the
/// pattern end (rightmost occurrence wins); every other symbol maps to `m`.
///
/// ```rust
/// use dnamatch::horspool::shift_table;
/// let t = shift_table(b"ATGC");
/// assert_eq!((t[b'A' as usize], t[b'T' as usize], t[b'G' as usize]), (3, 2, 1));
/// assert_eq!(t[b'C' as usize], 4);
/// assert_eq!(t[b'N' as usize], 4);
/// ```
pub fn shift_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m; 256];
    for (i, &b) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        table[b as usize] = m - 1 - i;
    }
    table
}

pub(crate) fn scan(text: &[u8], pattern: &[u8], rec: &mut Recorder) -> usize {
    let (n, m) = (text.len(), pattern.len());
    let table = shift_table(pattern);
    let mut i = 0;
    while i + m <= n {
        let matched = (0..m).rev().all(|j| rec.compare(i, j, text[i + j], pattern[j]));
        if matched {
            rec.found(i);
            rec.shift(1, ShiftReason::MatchFound);
            i += 1;
        } else {
            let shift = table[text[i + m - 1] as usize];
            rec.shift(shift, ShiftReason::BadCharacter);
            i += shift;
        }
    }
    i
}
