//! Rabin–Karp rolling-hash search.
//!
//! Windows are hashed as base-256 polynomials modulo a small prime and
//! rolled forward in O(1). Equal hashes are only candidates: every hit is
//! verified symbol by symbol before it is reported.
use crate::replay::{Recorder, ShiftReason};

/// Polynomial base (one digit per byte value).
pub const RADIX: u64 = 256;
/// Hash modulus.
pub const MODULUS: u64 = 101;

/// Hash of a whole window.
///
/// ```rust
/// use dnamatch::rabin_karp::{window_hash, MODULUS};
/// assert_eq!(window_hash(b"A"), 65 % MODULUS);
/// assert_eq!(window_hash(b""), 0);
/// ```
pub fn window_hash(window: &[u8]) -> u64 {
    window.iter().fold(0, |h, &b| (h * RADIX + u64::from(b)) % MODULUS)
}

/// Drop `outgoing` from the front of the window and append `incoming`.
/// `high` is `RADIX^(m-1) mod MODULUS`.
fn roll(hash: u64, outgoing: u8, incoming: u8, high: u64) -> u64 {
    let without = (hash + MODULUS - (u64::from(outgoing) * high) % MODULUS) % MODULUS;
    (without * RADIX + u64::from(incoming)) % MODULUS
}

pub(crate) fn scan(text: &[u8], pattern: &[u8], rec: &mut Recorder) -> usize {
    let (n, m) = (text.len(), pattern.len());
    let high = (1..m).fold(1u64, |h, _| h * RADIX % MODULUS);
    let target = window_hash(pattern);
    let mut hash = window_hash(&text[..m]);
    for i in 0..=n - m {
        if rec.hash_check(i, hash == target) {
            let mut j = 0;
            while j < m && rec.compare(i, j, text[i + j], pattern[j]) {
                j += 1;
            }
            if j == m {
                rec.found(i);
            }
        }
        if i < n - m {
            hash = roll(hash, text[i], text[i + m], high);
        }
        rec.shift(1, ShiftReason::Slide);
    }
    n - m + 1
}
