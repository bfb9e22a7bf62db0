use dnamatch::{classify_mutations, find_hotspots, HotspotParams, Impact, MutationKind};
use proptest::prelude::*;

fn dna_seq(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], len)
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn equal_lengths_give_one_point_mutation_per_difference((a, b) in (1usize..40).prop_flat_map(|n| (dna_seq(n), dna_seq(n)))) {
        let r = classify_mutations(&a, &b);
        let differing = a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count();
        prop_assert_eq!(r.mutations.len(), differing);
        prop_assert!(r.mutations.iter().all(|m| m.kind == MutationKind::Point));
        let s = r.impact_summary;
        prop_assert_eq!(s.high + s.medium + s.low, differing);
        prop_assert!((r.mutation_rate - differing as f64 / a.len() as f64).abs() < 1e-12);
    }

    #[test]
    fn length_change_is_one_frameshift(a in dna_seq(12), extra in dna_seq(3)) {
        let b = format!("{a}{extra}");
        let r = classify_mutations(&a, &b);
        prop_assert_eq!(r.mutations.len(), 1);
        let m = &r.mutations[0];
        prop_assert_eq!(m.kind, MutationKind::Frameshift);
        prop_assert_eq!(m.impact, Impact::High);
        prop_assert_eq!(m.position, 12);
        prop_assert_eq!(&m.mutated, &extra);
    }
}

#[test]
fn point_mutation_c_to_g() {
    let r = classify_mutations("ATGCAT", "ATGGAT");
    assert_eq!(r.mutations.len(), 1);
    let m = &r.mutations[0];
    assert_eq!(m.kind, MutationKind::Point);
    assert_eq!(m.position, 3);
    assert_eq!((m.original.as_str(), m.mutated.as_str()), ("C", "G"));
}

#[test]
fn insertion_at_end_is_high_impact_frameshift() {
    let r = classify_mutations("ATGCAT", "ATGCATTT");
    assert_eq!(r.mutations.len(), 1);
    assert_eq!(r.mutations[0].kind, MutationKind::Frameshift);
    assert_eq!(r.mutations[0].position, 6);
    assert_eq!(r.mutations[0].impact, Impact::High);
    assert_eq!(r.impact_summary.high, 1);
}

#[test]
fn single_base_insertion_is_still_one_coarse_event() {
    let r = classify_mutations("ACGTACGTACGT", "ACGTTACGTACGT");
    assert_eq!(r.mutations.len(), 1);
    assert_eq!(r.mutations[0].position, 4);
    assert_eq!(r.mutations[0].original, "ACGTACGT");
    assert_eq!(r.mutations[0].mutated, "TACGTACGT");
}

#[test]
fn hotspots_from_a_clustered_report() {
    let original = "A".repeat(30);
    let mutated = format!("{}{}{}", "A".repeat(10), "CCCCC", "A".repeat(15));
    let r = classify_mutations(&original, &mutated);
    let spots = find_hotspots(&r.mutations, original.len(), &HotspotParams::default()).unwrap();
    // windows of ten holding at least four of the five substitutions at 10..15
    assert_eq!(spots.iter().map(|h| h.start).collect::<Vec<_>>(), (4..=11).collect::<Vec<_>>());
    assert!(spots.iter().all(|h| h.count >= 4));
}
