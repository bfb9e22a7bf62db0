use dnamatch::{align, compute_stats, needle, water, AlignmentMode, AlignmentResult, GapPenalty, ScoringScheme};
use proptest::prelude::*;

fn dna_seq(min_len: usize, max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], min_len..=max_len)
        .prop_map(|v| v.into_iter().collect())
}

fn ungapped(s: &str) -> String {
    s.chars().filter(|&c| c != '-').collect()
}

/// Score an aligned pair with runs of gaps costing `open` then `extend`.
fn rescore(r: &AlignmentResult, scheme: &ScoringScheme) -> i32 {
    let mut prev = 'M';
    let mut total = 0;
    for (x, y) in r.aligned_a.bytes().zip(r.aligned_b.bytes()) {
        let op = if y == b'-' { 'D' } else if x == b'-' { 'I' } else { 'M' };
        total += match op {
            'M' => scheme.score(x, y),
            _ if op == prev => scheme.gap.extend,
            _ => scheme.gap.open,
        };
        prev = op;
    }
    total
}

proptest! {
    #[test]
    fn aligned_strings_line_up(a in dna_seq(0, 30), b in dna_seq(0, 30)) {
        let scheme = ScoringScheme::default();
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let r = align(&a, &b, &scheme, mode);
            prop_assert_eq!(r.aligned_a.len(), r.aligned_b.len());
            prop_assert!(r.aligned_a.bytes().zip(r.aligned_b.bytes()).all(|(x, y)| x != b'-' || y != b'-'));
            prop_assert_eq!(r.stats.length, r.len());
        }
    }

    #[test]
    fn global_alignment_consumes_both_inputs(a in dna_seq(0, 30), b in dna_seq(0, 30)) {
        let r = needle(&a, &b, &ScoringScheme::default());
        prop_assert_eq!(ungapped(&r.aligned_a), a.clone());
        prop_assert_eq!(ungapped(&r.aligned_b), b.clone());
        prop_assert_eq!(r.range_a, (0, a.len()));
        prop_assert_eq!(r.range_b, (0, b.len()));
    }

    #[test]
    fn local_alignment_is_a_scored_substring_pair(a in dna_seq(0, 30), b in dna_seq(0, 30)) {
        let scheme = ScoringScheme::with_gap(GapPenalty::STRICT);
        let r = water(&a, &b, &scheme);
        prop_assert!(r.score >= 0);
        prop_assert_eq!(ungapped(&r.aligned_a), a[r.range_a.0..r.range_a.1].to_string());
        prop_assert_eq!(ungapped(&r.aligned_b), b[r.range_b.0..r.range_b.1].to_string());
        prop_assert_eq!(rescore(&r, &scheme), r.score);
    }

    #[test]
    fn local_alignment_scores_a_shared_base(a in dna_seq(1, 30), b in dna_seq(1, 30)) {
        let r = water(&a, &b, &ScoringScheme::default());
        let shared = a.chars().any(|c| b.contains(c));
        prop_assert_eq!(r.score > 0, shared);
    }

    #[test]
    fn self_alignment_is_gapless(a in dna_seq(1, 40)) {
        let scheme = ScoringScheme::default();
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let r = align(&a, &a, &scheme, mode);
            prop_assert_eq!(&r.aligned_a, &a);
            prop_assert_eq!(&r.aligned_b, &a);
            prop_assert_eq!(r.score, 2 * a.len() as i32);
            prop_assert_eq!(r.stats.identity, 100.0);
        }
    }

    #[test]
    fn global_score_is_symmetric(a in dna_seq(0, 16), b in dna_seq(0, 16)) {
        let scheme = ScoringScheme::default();
        prop_assert_eq!(needle(&a, &b, &scheme).score, needle(&b, &a, &scheme).score);
    }

    #[test]
    fn stats_are_bounded_and_repeatable(a in dna_seq(0, 30), b in dna_seq(0, 30)) {
        let r = needle(&a, &b, &ScoringScheme::default());
        let s = compute_stats(&r.aligned_a, &r.aligned_b);
        prop_assert_eq!(s, r.stats);
        prop_assert_eq!(s, compute_stats(&r.aligned_a, &r.aligned_b));
        prop_assert!(s.identity <= s.similarity);
        prop_assert!(s.similarity <= 100.0);
        prop_assert!(s.gap_percentage <= 100.0);
    }
}

#[test]
fn gattaca_global_length_and_identity() {
    let r = align("GATTACA", "GCATGCU".replace('U', "A").as_str(), &ScoringScheme::default(), AlignmentMode::Global);
    assert_eq!(r.stats.length, 7);
    // four identical columns (G, A, C, A) in a gapless alignment
    assert!((r.stats.identity - 4.0 * 100.0 / 7.0).abs() < 1e-9);
}

#[test]
fn global_score_is_symmetric_on_known_pairs() {
    let scheme = ScoringScheme::default();
    for (a, b) in [("GATTACA", "GCATGCA"), ("ACGTTGCA", "ACGGCA"), ("TTTACGTAAA", "GGACGTGG"), ("AAAA", "AAAATTTT")] {
        assert_eq!(needle(a, b, &scheme).score, needle(b, a, &scheme).score, "{a} / {b}");
    }
}

#[test]
fn local_core_scores_at_least_the_global_alignment() {
    let scheme = ScoringScheme::default();
    for (a, b) in [("GATTACA", "GCATGCA"), ("ACGTTGCA", "ACGGCA"), ("TTTACGTAAA", "GGACGTGG"), ("AAAA", "AAAATTTT")] {
        assert!(water(a, b, &scheme).score >= needle(a, b, &scheme).score, "{a} / {b}");
    }
}

#[test]
fn degenerate_inputs() {
    let scheme = ScoringScheme::default();
    let g = align("ACGT", "", &scheme, AlignmentMode::Global);
    assert_eq!(g.aligned_b, "----");
    assert_eq!(g.stats.gap_count, 4);
    let l = align("ACGT", "", &scheme, AlignmentMode::Local);
    assert!(l.is_empty());
    assert_eq!(l.score, 0);
}
