//! Brute-force scan: try every offset, compare left to right, stop at the
//! first mismatch.
use crate::replay::{Recorder, ShiftReason};

/// Returns the window offset at which the scan stopped.
pub(crate) fn scan(text: &[u8], pattern: &[u8], rec: &mut Recorder) -> usize {
    let (n, m) = (text.len(), pattern.len());
    let mut i = 0;
    while i + m <= n {
        let mut j = 0;
        while j < m && rec.compare(i, j, text[i + j], pattern[j]) {
            j += 1;
        }
        if j == m {
            rec.found(i);
        }
        rec.shift(1, ShiftReason::Slide);
        i += 1;
    }
    i
}
