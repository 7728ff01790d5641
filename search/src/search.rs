//! Search entry point and expansion loop.

use crate::contract::{HeuristicFn, Problem, SearchState};
use crate::frontier::{Direction, Frontier, VisitedSet};
use crate::identity::fingerprint;
use crate::stats::SearchStats;

/// How a search run terminated.
///
/// Frontier exhaustion is an expected outcome for some domains (e.g. grid
/// navigation with no reachable goal), so it is a distinct value rather
/// than an error or an implicit null.
#[derive(Debug)]
pub enum SearchOutcome<S> {
    /// A goal state was popped; its `cost` is the answer.
    Found(S),
    /// The frontier emptied without reaching a goal.
    Exhausted,
}

/// Result of a search execution: the outcome plus run counters.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// Terminal outcome of the run.
    pub outcome: SearchOutcome<S>,
    /// Counters accumulated over the run.
    pub stats: SearchStats,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated on a goal state.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// The goal state, if one was reached.
    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        match &self.outcome {
            SearchOutcome::Found(state) => Some(state),
            SearchOutcome::Exhausted => None,
        }
    }

    /// Consume the result into the goal state, if one was reached.
    #[must_use]
    pub fn into_goal(self) -> Option<S> {
        match self.outcome {
            SearchOutcome::Found(state) => Some(state),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// Run best-first search over `problem` with the given heuristic.
///
/// The control loop: pop the best state by `cost + heuristic_value` under
/// `direction`, discard it if its identity was already expanded, return it
/// if it is a goal, otherwise mark it expanded and push every successor.
///
/// With an admissible heuristic the first goal popped is optimal: never
/// overestimating remaining cost when minimizing, never underestimating
/// remaining gain when maximizing. A malformed heuristic is not detected
/// at runtime; it manifests as a silently suboptimal answer.
///
/// Strictly single-threaded and synchronous; terminates either by finding
/// a goal or by exhausting the frontier.
pub fn search<P: Problem>(
    problem: &P,
    heuristic: &HeuristicFn<P>,
    direction: Direction,
) -> SearchResult<P::State> {
    let mut frontier = Frontier::new(direction);
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats::default();

    frontier.push(problem.initial_state(heuristic));
    stats.nodes_generated += 1;

    while let Some(state) = frontier.pop() {
        let fp = fingerprint(&state.identity_bytes());

        // Checked after popping, not before pushing: duplicate identities
        // may coexist in the frontier with different costs, and the first
        // one popped is the one that wins.
        if visited.contains(&fp) {
            stats.duplicates_suppressed += 1;
            continue;
        }

        if problem.is_goal(&state) {
            finalize(&mut stats, &frontier, &visited);
            return SearchResult {
                outcome: SearchOutcome::Found(state),
                stats,
            };
        }

        visited.mark(fp);
        stats.expansions += 1;

        for child in problem.expand(&state, heuristic) {
            stats.nodes_generated += 1;
            frontier.push(child);
        }
    }

    finalize(&mut stats, &frontier, &visited);
    SearchResult {
        outcome: SearchOutcome::Exhausted,
        stats,
    }
}

fn finalize<S: SearchState>(stats: &mut SearchStats, frontier: &Frontier<S>, visited: &VisitedSet) {
    stats.frontier_high_water = frontier.high_water() as u64;
    stats.visited = visited.len() as u64;
}
