//! Shared helpers for summit benchmark suites.

#![forbid(unsafe_code)]

use summit_search::contract::{HeuristicFn, Problem, SearchState};

/// An open `side` × `side` grid searched corner to corner; big enough to
/// exercise the frontier without being input-dependent.
pub struct OpenGrid {
    /// Grid side length in cells.
    pub side: i64,
}

/// One grid position with accumulated steps.
pub struct OpenGridState {
    /// Current cell `(x, y)`.
    pub at: (i64, i64),
    cost: i64,
    heuristic_value: i64,
}

impl SearchState for OpenGridState {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&self.at.0.to_le_bytes());
        bytes.extend_from_slice(&self.at.1.to_le_bytes());
        bytes
    }
}

impl OpenGrid {
    fn state(&self, at: (i64, i64), cost: i64, h: &HeuristicFn<Self>) -> OpenGridState {
        let mut state = OpenGridState {
            at,
            cost,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }
}

impl Problem for OpenGrid {
    type State = OpenGridState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> OpenGridState {
        self.state((0, 0), 0, h)
    }

    fn is_goal(&self, state: &OpenGridState) -> bool {
        state.at == (self.side - 1, self.side - 1)
    }

    fn expand(&self, state: &OpenGridState, h: &HeuristicFn<Self>) -> Vec<OpenGridState> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .iter()
            .map(|&(dx, dy)| (state.at.0 + dx, state.at.1 + dy))
            .filter(|&(x, y)| x >= 0 && x < self.side && y >= 0 && y < self.side)
            .map(|at| self.state(at, state.cost + 1, h))
            .collect()
    }
}

/// Manhattan distance to the far corner.
#[must_use]
pub fn open_grid_manhattan(state: &OpenGridState, problem: &OpenGrid) -> i64 {
    (problem.side - 1 - state.at.0).abs() + (problem.side - 1 - state.at.1).abs()
}
