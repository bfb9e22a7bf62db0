//! Knuth–Morris–Pratt.
//!
//! The failure table holds, for every pattern prefix, the length of its
//! longest proper prefix that is also a suffix. On a mismatch after `j`
//! matched symbols the scan resumes at `failure[j - 1]` without moving back in
//! the text; after a full match it resumes at `failure[m - 1]`.
use crate::replay::{Recorder, ShiftReason};

/// Longest-proper-prefix-suffix lengths for each prefix of `pattern`.
///
/// ```rust
/// use dnamatch::kmp::failure_table;
/// assert_eq!(failure_table(b"AACAAAC"), vec![0, 1, 0, 1, 2, 2, 3]);
/// ```
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0usize; m];
    let mut len = 0usize;
    for i in 1..m {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}

pub(crate) fn scan(text: &[u8], pattern: &[u8], rec: &mut Recorder) -> usize {
    let (n, m) = (text.len(), pattern.len());
    let lps = failure_table(pattern);
    let (mut i, mut j) = (0usize, 0usize);
    // Window start is i - j; stop once the pattern would overrun the text.
    while i - j + m <= n {
        if rec.compare(i - j, j, text[i], pattern[j]) {
            i += 1;
            j += 1;
            if j == m {
                rec.found(i - m);
                let next = lps[m - 1];
                rec.shift(m - next, ShiftReason::FailureLink);
                j = next;
            }
        } else if j > 0 {
            let next = lps[j - 1];
            rec.shift(j - next, ShiftReason::FailureLink);
            j = next;
        } else {
            rec.shift(1, ShiftReason::Slide);
            i += 1;
        }
    }
    i - j
}
