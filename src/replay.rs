//! Stepwise replay of the exact matchers for visualisation.
//!
//! Every matcher reports its work to one recorder: each character
//! comparison, each Rabin–Karp hash check, each match and each shift. A plain
//! search only counts. A traced search also snapshots the matcher state just
//! *before* every comparison, so snapshot `k` is the state after exactly `k`
//! comparisons, together with the comparison about to happen. A final
//! [`StepPhase::Done`] snapshot closes the trace.
//!
//! [`StepTrace`] records the whole run once and answers any step index from
//! memory. [`step_state`] is the one-shot form: it records and indexes in one
//! call, so repeated calls with the same arguments return identical states.
//!
//! ```rust
//! use dnamatch::{step_state, Algorithm, StepPhase, StepTrace};
//! let trace = StepTrace::record("ATGCATGC", "ATGC", Algorithm::Horspool);
//! assert_eq!(trace.len(), trace.result().comparisons + 1);
//! let first = step_state("ATGCATGC", "ATGC", Algorithm::Horspool, 0);
//! assert_eq!(first.phase, StepPhase::Comparing);
//! assert_eq!(first.pattern_index, Some(3));
//! assert_eq!(first, trace.get(0));
//! ```

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::search::{run, Algorithm, MatchResult};

/// What the matcher is doing at a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StepPhase {
    /// About to compare `text[search_index + pattern_index]` with `pattern[pattern_index]`.
    Comparing,
    /// About to compare the Rabin–Karp window hash with the pattern hash.
    HashCheck,
    /// The scan is over.
    Done,
}

/// Which rule produced the most recent shift of the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ShiftReason {
    /// Advance by one position.
    Slide,
    /// KMP: resume from the failure table entry.
    FailureLink,
    /// Horspool: advance by one after a full match.
    MatchFound,
    /// Bad-character rule.
    BadCharacter,
    /// Good-suffix rule.
    GoodSuffix,
}

impl fmt::Display for ShiftReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShiftReason::Slide => "slide by one",
            ShiftReason::FailureLink => "failure link",
            ShiftReason::MatchFound => "match found, slide by one",
            ShiftReason::BadCharacter => "bad character rule",
            ShiftReason::GoodSuffix => "good suffix rule",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Snapshot {
    phase: StepPhase,
    search_index: usize,
    pattern_index: Option<usize>,
    is_match: bool,
    comparisons: usize,
    positions_found: usize,
    last_shift: usize,
    shift_reason: Option<ShiftReason>,
}

/// Bookkeeping shared by every matcher.
pub(crate) struct Recorder {
    comparisons: usize,
    positions: Vec<usize>,
    last_shift: usize,
    shift_reason: Option<ShiftReason>,
    trace: Option<Vec<Snapshot>>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self { comparisons: 0, positions: Vec::new(), last_shift: 0, shift_reason: None, trace: None }
    }

    pub(crate) fn tracing() -> Self {
        Self { trace: Some(Vec::new()), ..Self::new() }
    }

    /// Compare one text symbol with one pattern symbol and return whether
    /// they are equal.
    pub(crate) fn compare(&mut self, window: usize, pattern_index: usize, text: u8, pattern: u8) -> bool {
        let matched = text == pattern;
        self.snapshot(StepPhase::Comparing, window, Some(pattern_index), matched);
        self.comparisons += 1;
        matched
    }

    /// Record a window-hash comparison; returns `matched` unchanged.
    pub(crate) fn hash_check(&mut self, window: usize, matched: bool) -> bool {
        self.snapshot(StepPhase::HashCheck, window, None, matched);
        self.comparisons += 1;
        matched
    }

    pub(crate) fn found(&mut self, window: usize) {
        self.positions.push(window);
    }

    pub(crate) fn shift(&mut self, by: usize, reason: ShiftReason) {
        self.last_shift = by;
        self.shift_reason = Some(reason);
    }

    fn snapshot(&mut self, phase: StepPhase, search_index: usize, pattern_index: Option<usize>, is_match: bool) {
        let (comparisons, positions_found) = (self.comparisons, self.positions.len());
        let (last_shift, shift_reason) = (self.last_shift, self.shift_reason);
        if let Some(trace) = self.trace.as_mut() {
            trace.push(Snapshot {
                phase,
                search_index,
                pattern_index,
                is_match,
                comparisons,
                positions_found,
                last_shift,
                shift_reason,
            });
        }
    }

    /// Close the run at `window` and split into the result and the trace.
    pub(crate) fn finish(mut self, algorithm: Algorithm, window: usize, elapsed: Duration) -> (MatchResult, Vec<Snapshot>) {
        self.snapshot(StepPhase::Done, window, None, false);
        let result = MatchResult { algorithm, positions: self.positions, comparisons: self.comparisons, elapsed };
        (result, self.trace.unwrap_or_default())
    }
}

/// Matcher state after a given number of steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepState {
    /// Step index this state answers (clamped to the final step).
    pub step: usize,
    pub phase: StepPhase,
    /// Start of the text window the pattern is currently aligned with.
    pub search_index: usize,
    /// Pattern index of the pending comparison.
    pub pattern_index: Option<usize>,
    /// Outcome of the pending comparison.
    pub is_match: bool,
    /// Comparisons completed before this step.
    pub comparisons_so_far: usize,
    /// Match positions discovered before this step.
    pub positions_found: Vec<usize>,
    /// Most recent shift distance (0 before the first shift).
    pub last_shift: usize,
    pub shift_reason: Option<ShiftReason>,
}

/// A fully recorded matcher run, indexable by step.
#[derive(Clone, Debug)]
pub struct StepTrace {
    snapshots: Vec<Snapshot>,
    result: MatchResult,
}

impl StepTrace {
    /// Run `algorithm` once with tracing enabled.
    pub fn record(subject: &str, pattern: &str, algorithm: Algorithm) -> Self {
        let (result, snapshots) = run(subject.as_bytes(), pattern.as_bytes(), algorithm, Recorder::tracing());
        log::trace!("{} trace: {} steps", algorithm, snapshots.len());
        Self { snapshots, result }
    }

    /// Number of recorded steps, including the final `Done` step.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a trace holds at least its `Done` step.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the final `Done` step.
    pub fn last_step(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// The search result of the recorded run.
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// State at `step`; indices past the end return the final state.
    pub fn get(&self, step: usize) -> StepState {
        let step = step.min(self.last_step());
        let snap = self.snapshots[step];
        StepState {
            step,
            phase: snap.phase,
            search_index: snap.search_index,
            pattern_index: snap.pattern_index,
            is_match: snap.is_match,
            comparisons_so_far: snap.comparisons,
            positions_found: self.result.positions[..snap.positions_found].to_vec(),
            last_shift: snap.last_shift,
            shift_reason: snap.shift_reason,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = StepState> + '_ {
        (0..self.len()).map(move |k| self.get(k))
    }
}

/// State of `algorithm` on (`subject`, `pattern`) after `step` comparisons.
pub fn step_state(subject: &str, pattern: &str, algorithm: Algorithm, step: usize) -> StepState {
    StepTrace::record(subject, pattern, algorithm).get(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    #[test]
    fn steps_line_up_with_comparisons() {
        for algorithm in Algorithm::ALL {
            let trace = StepTrace::record("ATGCATGCAATGC", "ATGC", algorithm);
            assert_eq!(trace.len(), trace.result().comparisons + 1, "{algorithm}");
            for (k, state) in trace.iter().enumerate() {
                assert_eq!(state.step, k);
                assert_eq!(state.comparisons_so_far, k);
            }
            assert_eq!(trace.get(trace.last_step()).phase, StepPhase::Done);
        }
    }

    #[test]
    fn final_state_matches_plain_search() {
        for algorithm in Algorithm::ALL {
            let plain = search("GATTACAGATTACA", "TACA", algorithm);
            let done = step_state("GATTACAGATTACA", "TACA", algorithm, usize::MAX);
            assert_eq!(done.phase, StepPhase::Done);
            assert_eq!(done.positions_found, plain.positions);
            assert_eq!(done.comparisons_so_far, plain.comparisons);
        }
    }

    #[test]
    fn replay_is_pure() {
        for k in 0..12 {
            let a = step_state("ATGCATGC", "ATGC", Algorithm::BoyerMoore, k);
            let b = step_state("ATGCATGC", "ATGC", Algorithm::BoyerMoore, k);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn empty_pattern_has_only_done() {
        let trace = StepTrace::record("AAAA", "", Algorithm::Naive);
        assert_eq!(trace.len(), 1);
        let s = trace.get(5);
        assert_eq!(s.step, 0);
        assert_eq!(s.phase, StepPhase::Done);
        assert_eq!(s.comparisons_so_far, 0);
        assert!(s.positions_found.is_empty());
    }

    #[test]
    fn positions_appear_after_the_completing_comparison() {
        // Naive on "ATGC" in "ATGCATGC": steps 0..=3 verify the first window.
        let trace = StepTrace::record("ATGCATGC", "ATGC", Algorithm::Naive);
        assert!(trace.get(3).positions_found.is_empty());
        assert_eq!(trace.get(4).positions_found, vec![0]);
        assert_eq!(trace.get(4).search_index, 1);
        assert_eq!(trace.get(4).last_shift, 1);
        assert_eq!(trace.get(4).shift_reason, Some(ShiftReason::Slide));
    }
}
