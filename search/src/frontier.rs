//! Priority frontier and visited set.
//!
//! One binary-heap frontier serves both search directions; the extraction
//! order is selected by a [`Direction`] value instead of duplicating the
//! heap for min and max. The visited set keys on identity fingerprints and
//! uses a `BTreeSet` (not `HashSet`) so its iteration order is
//! deterministic.

use std::collections::{BTreeSet, BinaryHeap};

use crate::contract::SearchState;
use crate::identity::Fingerprint;

/// Which end of the priority order `pop` extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Classical A*: smallest `cost + heuristic_value` pops first.
    Minimize,
    /// Branch-and-bound flavor: largest `cost + heuristic_value` pops first.
    Maximize,
}

/// A frontier entry wrapping a state with its ordering key.
///
/// Every entry in a given frontier carries the frontier's direction, so
/// comparisons within one heap are always consistent. Ties on priority are
/// broken by insertion sequence, older entries first; this makes extraction
/// order a documented contract rather than a heap implementation accident.
struct FrontierEntry<S> {
    priority: i64,
    seq: u64,
    direction: Direction,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // `BinaryHeap` pops the greatest entry, so "better" must compare
        // as greater here.
        let by_priority = match self.direction {
            Direction::Maximize => self.priority.cmp(&other.priority),
            Direction::Minimize => other.priority.cmp(&self.priority),
        };
        // Lower seq (pushed earlier) wins ties in both directions.
        by_priority.then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A binary-heap-backed priority queue of not-yet-expanded states.
///
/// Only the search driver reads or writes the frontier. Created fresh per
/// search invocation; never shared across runs.
pub struct Frontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    direction: Direction,
    next_seq: u64,
    high_water: usize,
}

impl<S: SearchState> Frontier<S> {
    /// Create an empty frontier extracting in the given direction.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            heap: BinaryHeap::new(),
            direction,
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Insert a state; O(log n), no other side effects.
    pub fn push(&mut self, state: S) {
        let entry = FrontierEntry {
            priority: state.priority(),
            seq: self.next_seq,
            direction: self.direction,
            state,
        };
        self.next_seq += 1;
        self.heap.push(entry);
        if self.heap.len() > self.high_water {
            self.high_water = self.heap.len();
        }
    }

    /// Remove and return the best state under the configured direction, or
    /// `None` when the frontier is empty.
    #[must_use]
    pub fn pop(&mut self) -> Option<S> {
        self.heap.pop().map(|e| e.state)
    }

    /// Current element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The configured extraction direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Largest element count the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Identities already expanded during one search run.
///
/// The driver consults this immediately after popping, not before pushing:
/// duplicate identities may coexist in the frontier with different costs,
/// and the admissible-heuristic guarantee is what makes the first pop of an
/// identity the optimal one. Grows monotonically for the duration of a run
/// and is discarded with it.
pub struct VisitedSet {
    set: BTreeSet<String>,
}

impl VisitedSet {
    /// Create an empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self { set: BTreeSet::new() }
    }

    /// Record an identity as expanded. Returns `false` if already present.
    pub fn mark(&mut self, fp: Fingerprint) -> bool {
        self.set.insert(fp.into_hex())
    }

    /// Whether an identity has already been expanded.
    #[must_use]
    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.set.contains(fp.as_hex())
    }

    /// Number of identities recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether no identity has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}
