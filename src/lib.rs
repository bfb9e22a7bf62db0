//! # dnamatch
//!
//! Exact pattern search, pairwise alignment and mutation classification for
//! nucleotide sequences.
//!
//! The crate has three families of operations:
//!
//! - **Exact search** ([`search`]): five interchangeable matchers (naive,
//!   Knuth–Morris–Pratt, Rabin–Karp, Horspool, Boyer–Moore). All of them
//!   return the same match positions; the number of symbol comparisons they
//!   spend is reported alongside so they can be compared. Every run can also
//!   be replayed one comparison at a time ([`step_state`], [`StepTrace`]).
//! - **Alignment** ([`align`], [`needle`], [`water`]): global and local
//!   dynamic-programming alignment with affine gap penalties, plus identity,
//!   similarity and gap statistics ([`compute_stats`]).
//! - **Mutations** ([`classify_mutations`]): point and frameshift events with
//!   an impact tier, and windowed hotspot detection ([`find_hotspots`]).
//!
//! The algorithms are total functions over any pair of strings. Sequence
//! validation ([`Sequence`], [`validate_dna`], [`parse_fasta`]) is a separate
//! input layer meant to run once before calling in.
//!
//! ### Example
//! ```
//! use dnamatch::{align, classify_mutations, search, AlignmentMode, Algorithm, ScoringScheme};
//! let hits = search("ATGCATGC", "ATGC", Algorithm::Kmp);
//! assert_eq!(hits.positions, vec![0, 4]);
//!
//! let aln = align("GATTACA", "GCATGCA", &ScoringScheme::default(), AlignmentMode::Global);
//! assert_eq!(aln.stats.length, 7);
//!
//! let report = classify_mutations("ATGCAT", "ATGCATTT");
//! assert_eq!(report.impact_summary.high, 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod align;
pub mod boyer_moore;
pub mod common;
pub mod horspool;
pub mod kmp;
pub mod mutation;
mod naive;
pub mod needle;
pub mod rabin_karp;
pub mod replay;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod water;

pub use align::{align, AlignmentMode, AlignmentResult};
pub use common::{
    normalize_sequence, parse_fasta, validate_dna, validate_iupac, DnaMatchError, FastaRecord, Sequence,
};
pub use mutation::{
    classify_mutations, find_hotspots, Hotspot, HotspotParams, Impact, ImpactSummary, Mutation,
    MutationAnalysisResult, MutationKind, SubstitutionClass,
};
pub use needle::needle;
pub use replay::{step_state, ShiftReason, StepPhase, StepState, StepTrace};
pub use scoring::{GapPenalty, ScoringScheme};
pub use search::{compare_algorithms, search, Algorithm, MatchResult};
pub use stats::{compute_stats, AlignmentStats};
pub use water::water;
