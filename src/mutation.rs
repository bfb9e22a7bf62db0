//! Mutation classification between an original and a mutated sequence.
//!
//! Equal-length inputs are diffed position by position into point
//! mutations. Inputs of different length are reported as a single
//! frameshift starting at the first diverging position and running to the
//! end of both sequences, however small the length difference is.
//!
//! The impact of a point mutation is estimated by repeating each base three
//! times, translating both codons with the standard genetic code and scoring
//! the amino-acid change with BLOSUM62:
//!
//! | change | impact |
//! |---|---|
//! | same amino acid | low |
//! | either side a stop codon | high |
//! | BLOSUM62 `> 0` | low |
//! | BLOSUM62 `> -2` | medium |
//! | otherwise | high |
//!
//! ```rust
//! use dnamatch::{classify_mutations, Impact, MutationKind};
//! let r = classify_mutations("ATGCAT", "ATGGAT");
//! assert_eq!(r.mutations.len(), 1);
//! assert_eq!(r.mutations[0].kind, MutationKind::Point);
//! assert_eq!(r.mutations[0].position, 3);
//! assert_eq!(r.mutations[0].impact, Impact::High);
//! ```

use serde::Serialize;

use crate::common::DnaMatchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Point,
    /// Part of the reporting vocabulary; the classifier folds every
    /// length change into [`MutationKind::Frameshift`].
    Insertion,
    /// See [`MutationKind::Insertion`].
    Deletion,
    Frameshift,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// Chemical class of a single-base substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionClass {
    /// Purine to purine (A/G) or pyrimidine to pyrimidine (C/T).
    Transition,
    /// Purine to pyrimidine or back.
    Transversion,
    /// Either base is not A, C, G or T.
    Unknown,
}

impl SubstitutionClass {
    pub fn of(original: u8, mutated: u8) -> Self {
        let class = |b: u8| match b.to_ascii_uppercase() {
            b'A' | b'G' => Some(true),
            b'C' | b'T' => Some(false),
            _ => None,
        };
        match (class(original), class(mutated)) {
            (Some(x), Some(y)) if x == y => SubstitutionClass::Transition,
            (Some(_), Some(_)) => SubstitutionClass::Transversion,
            _ => SubstitutionClass::Unknown,
        }
    }
}

/// One detected divergence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub kind: MutationKind,
    /// 0-based index of the first affected base.
    pub position: usize,
    pub original: String,
    pub mutated: String,
    pub impact: Impact,
    /// Set for point mutations only.
    pub substitution: Option<SubstitutionClass>,
    pub description: String,
}

/// Mutation counts per impact tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ImpactSummary {
    pub fn tally<'a>(mutations: impl IntoIterator<Item = &'a Mutation>) -> Self {
        let mut s = Self::default();
        for m in mutations {
            match m.impact {
                Impact::High => s.high += 1,
                Impact::Medium => s.medium += 1,
                Impact::Low => s.low += 1,
            }
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MutationAnalysisResult {
    pub mutations: Vec<Mutation>,
    /// Mutations per base of the longer sequence (0 when both are empty).
    pub mutation_rate: f64,
    pub impact_summary: ImpactSummary,
}

/// Diff `original` against `mutated`.
pub fn classify_mutations(original: &str, mutated: &str) -> MutationAnalysisResult {
    let (a, b) = (original.as_bytes(), mutated.as_bytes());
    log::debug!("classify_mutations: {} bp vs {} bp", a.len(), b.len());
    let mutations = if a.len() != b.len() { vec![frameshift(a, b)] } else { point_mutations(a, b) };
    let longest = a.len().max(b.len());
    let mutation_rate = if longest == 0 { 0.0 } else { mutations.len() as f64 / longest as f64 };
    let impact_summary = ImpactSummary::tally(&mutations);
    MutationAnalysisResult { mutations, mutation_rate, impact_summary }
}

fn text(bytes: &[u8]) -> String {
    bytes.iter().map(|&c| c as char).collect()
}

fn frameshift(a: &[u8], b: &[u8]) -> Mutation {
    let shorter = a.len().min(b.len());
    let at = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let change = if a.len() > b.len() { "deletion" } else { "insertion" };
    let delta = a.len().abs_diff(b.len());
    let description = if at == shorter {
        format!("Frameshift mutation at position {at}: {change} of {delta} nucleotides")
    } else {
        format!("Frameshift mutation at position {at}: sequences diverge with {change} of {delta} nucleotides")
    };
    Mutation {
        kind: MutationKind::Frameshift,
        position: at,
        original: text(&a[at..]),
        mutated: text(&b[at..]),
        impact: Impact::High,
        substitution: None,
        description,
    }
}

fn point_mutations(a: &[u8], b: &[u8]) -> Vec<Mutation> {
    a.iter()
        .zip(b)
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, (&x, &y))| Mutation {
            kind: MutationKind::Point,
            position: i,
            original: (x as char).to_string(),
            mutated: (y as char).to_string(),
            impact: point_impact(x, y),
            substitution: Some(SubstitutionClass::of(x, y)),
            description: format!("Point mutation from {} to {} at position {}", x as char, y as char, i),
        })
        .collect()
}

/// Impact tier of replacing base `original` with base `mutated`.
pub fn point_impact(original: u8, mutated: u8) -> Impact {
    let before = translate([original; 3]);
    let after = translate([mutated; 3]);
    if before == after {
        return Impact::Low;
    }
    if before == '*' || after == '*' {
        return Impact::High;
    }
    match blosum62_score(before, after) {
        s if s > 0 => Impact::Low,
        s if s > -2 => Impact::Medium,
        _ => Impact::High,
    }
}

/// Standard genetic code; `'*'` for stop codons and `'X'` for anything
/// containing a symbol other than A, C, G or T.
///
/// ```rust
/// use dnamatch::mutation::translate;
/// assert_eq!(translate(*b"ATG"), 'M');
/// assert_eq!(translate(*b"TGA"), '*');
/// assert_eq!(translate(*b"NNN"), 'X');
/// ```
pub fn translate(codon: [u8; 3]) -> char {
    // TCAG ordering: index = 16*first + 4*second + third
    const CODE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
    let idx = |b: u8| match b.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    };
    match (idx(codon[0]), idx(codon[1]), idx(codon[2])) {
        (Some(x), Some(y), Some(z)) => CODE[16 * x + 4 * y + z] as char,
        _ => 'X',
    }
}

/// BLOSUM62 substitution score; -4 for symbols outside the 20 amino acids.
pub fn blosum62_score(x: char, y: char) -> i32 {
    fn idx(c: char) -> Option<usize> {
        "ARNDCQEGHILKMFPSTWYV".find(c.to_ascii_uppercase())
    }
    const M: [[i32; 20]; 20] = [
        [ 4,-1,-2,-2, 0,-1,-1, 0,-2,-1,-1,-1,-1,-2,-1, 1, 0,-3,-2, 0], // A
        [-1, 5, 0,-2,-3, 1, 0,-2, 0,-3,-2, 2,-1,-3,-2,-1,-1,-3,-2,-3], // R
        [-2, 0, 6, 1,-3, 0, 0, 0, 1,-3,-3, 0,-2,-3,-2, 1, 0,-4,-2,-3], // N
        [-2,-2, 1, 6,-3, 0, 2,-1,-1,-3,-4,-1,-3,-3,-1, 0,-1,-4,-3,-3], // D
        [ 0,-3,-3,-3, 9,-3,-4,-3,-3,-1,-1,-3,-1,-2,-3,-1,-1,-2,-2,-1], // C
        [-1, 1, 0, 0,-3, 5, 2,-2, 0,-3,-2, 1, 0,-3,-1, 0,-1,-2,-1,-2], // Q
        [-1, 0, 0, 2,-4, 2, 5,-2, 0,-3,-3, 1,-2,-3,-1, 0,-1,-3,-2,-2], // E
        [ 0,-2, 0,-1,-3,-2,-2, 6,-2,-4,-4,-2,-3,-3,-2, 0,-2,-2,-3,-3], // G
        [-2, 0, 1,-1,-3, 0, 0,-2, 8,-3,-3,-1,-2,-1,-2,-1,-2,-2, 2,-3], // H
        [-1,-3,-3,-3,-1,-3,-3,-4,-3, 4, 2,-3, 1, 0,-3,-2,-1,-3,-1, 3], // I
        [-1,-2,-3,-4,-1,-2,-3,-4,-3, 2, 4,-2, 2, 0,-3,-2,-1,-2,-1, 1], // L
        [-1, 2, 0,-1,-3, 1, 1,-2,-1,-3,-2, 5,-1,-3,-1, 0,-1,-3,-2,-2], // K
        [-1,-1,-2,-3,-1, 0,-2,-3,-2, 1, 2,-1, 5, 0,-2,-1,-1,-1,-1, 1], // M
        [-2,-3,-3,-3,-2,-3,-3,-3,-1, 0, 0,-3, 0, 6,-4,-2,-2, 1, 3,-1], // F
        [-1,-2,-2,-1,-3,-1,-1,-2,-2,-3,-3,-1,-2,-4, 7,-1,-1,-4,-3,-2], // P
        [ 1,-1, 1, 0,-1, 0, 0, 0,-1,-2,-2, 0,-1,-2,-1, 4, 1,-3,-2,-2], // S
        [ 0,-1, 0,-1,-1,-1,-1,-2,-2,-1,-1,-1,-1,-2,-1, 1, 5,-2,-2, 0], // T
        [-3,-3,-4,-4,-2,-2,-3,-2,-2,-3,-2,-3,-1, 1,-4,-3,-2,11, 2,-3], // W
        [-2,-2,-2,-3,-2,-1,-2,-3, 2,-1,-1,-2,-1, 3,-3,-2,-2, 2, 7,-1], // Y
        [ 0,-3,-3,-3,-1,-2,-2,-3,-3, 3, 1,-2, 1,-1,-2,-2, 0,-3,-1, 4], // V
    ];
    match (idx(x), idx(y)) {
        (Some(ix), Some(iy)) => M[ix][iy],
        _ => -4,
    }
}

/// Sliding-window settings for [`find_hotspots`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HotspotParams {
    /// Window length in bases.
    pub window: usize,
    /// Minimum mutations per base (exclusive) for a window to be reported.
    pub min_density: f64,
}

impl Default for HotspotParams {
    fn default() -> Self {
        Self { window: 10, min_density: 0.3 }
    }
}

/// A window with an unusually high mutation density.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hotspot {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
    pub count: usize,
    pub density: f64,
}

/// Windows `[start, start + window)` for `start` in `0..sequence_len - window`
/// whose mutation density exceeds `params.min_density`. Overlapping windows
/// are all reported.
///
/// ```rust
/// use dnamatch::{classify_mutations, find_hotspots, HotspotParams};
/// let r = classify_mutations("AAAAAAAAAAAA", "CCCCAAAAAAAA");
/// let spots = find_hotspots(&r.mutations, 12, &HotspotParams::default()).unwrap();
/// assert_eq!(spots.first().map(|h| (h.start, h.count)), Some((0, 4)));
/// ```
pub fn find_hotspots(mutations: &[Mutation], sequence_len: usize, params: &HotspotParams) -> Result<Vec<Hotspot>, DnaMatchError> {
    if params.window == 0 {
        return Err(DnaMatchError::InvalidWindow { window: params.window });
    }
    let spots = (0..sequence_len.saturating_sub(params.window))
        .filter_map(|start| {
            let end = start + params.window;
            let count = mutations.iter().filter(|m| (start..end).contains(&m.position)).count();
            let density = count as f64 / params.window as f64;
            (density > params.min_density).then_some(Hotspot { start, end, count, density })
        })
        .collect();
    Ok(spots)
}
