//! Shared synthetic problems for scenario tests and benchmarks.
//!
//! Three deliberately tiny search spaces with known-optimal answers:
//! an obstacle grid (minimize), a deadline switch (maximize), and a
//! diamond graph that exercises duplicate-identity collapse.

#![forbid(unsafe_code)]

use summit_search::contract::{HeuristicFn, Problem, SearchState};

// ---------------------------------------------------------------------------
// Obstacle grid (minimize steps to a goal cell)
// ---------------------------------------------------------------------------

/// A `width` × `height` grid with blocked cells; unit step cost.
pub struct GridProblem {
    /// Grid width in cells.
    pub width: i64,
    /// Grid height in cells.
    pub height: i64,
    /// Starting cell `(x, y)`.
    pub start: (i64, i64),
    /// Goal cell `(x, y)`.
    pub goal: (i64, i64),
    /// Impassable cells.
    pub walls: Vec<(i64, i64)>,
}

/// One grid position with accumulated steps.
pub struct GridState {
    /// Current cell.
    pub at: (i64, i64),
    cost: i64,
    heuristic_value: i64,
}

impl SearchState for GridState {
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

impl GridProblem {
    fn state(&self, at: (i64, i64), cost: i64, h: &HeuristicFn<Self>) -> GridState {
        let mut state = GridState {
            at,
            cost,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }

    fn open(&self, cell: (i64, i64)) -> bool {
        cell.0 >= 0
            && cell.0 < self.width
            && cell.1 >= 0
            && cell.1 < self.height
            && !self.walls.contains(&cell)
    }
}

impl Problem for GridProblem {
    type State = GridState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> GridState {
        self.state(self.start, 0, h)
    }

    fn is_goal(&self, state: &GridState) -> bool {
        state.at == self.goal
    }

    fn expand(&self, state: &GridState, h: &HeuristicFn<Self>) -> Vec<GridState> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .iter()
            .map(|&(dx, dy)| (state.at.0 + dx, state.at.1 + dy))
            .filter(|&cell| self.open(cell))
            .map(|cell| self.state(cell, state.cost + 1, h))
            .collect()
    }
}

/// Manhattan distance to the goal; admissible for unit-cost 4-moves.
#[must_use]
pub fn grid_manhattan(state: &GridState, problem: &GridProblem) -> i64 {
    (state.at.0 - problem.goal.0).abs() + (state.at.1 - problem.goal.1).abs()
}

// ---------------------------------------------------------------------------
// Deadline switch (maximize accumulated reward)
// ---------------------------------------------------------------------------

/// A single switch that, once flipped on, pays `reward` per remaining tick.
pub struct SwitchProblem {
    /// Number of ticks until the deadline.
    pub total_ticks: i64,
    /// Reward granted per tick while the switch is on.
    pub reward: i64,
}

/// Switch state at one tick.
pub struct SwitchState {
    /// Ticks elapsed.
    pub tick: i64,
    /// Whether the switch is on.
    pub on: bool,
    cost: i64,
    heuristic_value: i64,
}

impl SearchState for SwitchState {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(9);
        bytes.extend_from_slice(&self.tick.to_le_bytes());
        bytes.push(u8::from(self.on));
        bytes
    }
}

impl SwitchProblem {
    fn state(&self, tick: i64, on: bool, cost: i64, h: &HeuristicFn<Self>) -> SwitchState {
        let mut state = SwitchState {
            tick,
            on,
            cost,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }
}

impl Problem for SwitchProblem {
    type State = SwitchState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> SwitchState {
        self.state(0, false, 0, h)
    }

    fn is_goal(&self, state: &SwitchState) -> bool {
        state.tick == self.total_ticks
    }

    fn expand(&self, state: &SwitchState, h: &HeuristicFn<Self>) -> Vec<SwitchState> {
        // Reward for the elapsing tick accrues from the switch's current
        // position; a flip takes the whole tick and pays off afterwards.
        let next_cost = state.cost + if state.on { self.reward } else { 0 };
        let mut children = vec![self.state(state.tick + 1, state.on, next_cost, h)];
        if !state.on {
            children.push(self.state(state.tick + 1, true, next_cost, h));
        }
        children
    }
}

/// As if the switch were already on for every remaining tick; never
/// underestimates the remaining gain.
#[must_use]
pub fn switch_optimist(state: &SwitchState, problem: &SwitchProblem) -> i64 {
    problem.reward * (problem.total_ticks - state.tick)
}

// ---------------------------------------------------------------------------
// Diamond graph (duplicate-identity collapse)
// ---------------------------------------------------------------------------

/// `A → B` (1), `A → C` (2), `B → D` (5), `C → D` (1): node `D` enters the
/// frontier twice with different costs; only the cheaper may win.
pub struct DiamondProblem;

/// Node label in the diamond graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiamondNode {
    /// Start.
    A,
    /// Expensive branch.
    B,
    /// Cheap branch.
    C,
    /// Goal, reachable from both branches.
    D,
}

/// One node with accumulated edge cost.
pub struct DiamondState {
    /// Current node.
    pub node: DiamondNode,
    cost: i64,
}

impl SearchState for DiamondState {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        0
    }

    fn identity_bytes(&self) -> Vec<u8> {
        // Identity is the node alone: both incoming edges of D collapse.
        vec![self.node as u8]
    }
}

impl Problem for DiamondProblem {
    type State = DiamondState;

    fn initial_state(&self, _h: &HeuristicFn<Self>) -> DiamondState {
        DiamondState {
            node: DiamondNode::A,
            cost: 0,
        }
    }

    fn is_goal(&self, state: &DiamondState) -> bool {
        state.node == DiamondNode::D
    }

    fn expand(&self, state: &DiamondState, _h: &HeuristicFn<Self>) -> Vec<DiamondState> {
        let successors: &[(DiamondNode, i64)] = match state.node {
            DiamondNode::A => &[(DiamondNode::B, 1), (DiamondNode::C, 2)],
            DiamondNode::B => &[(DiamondNode::D, 5)],
            DiamondNode::C => &[(DiamondNode::D, 1)],
            DiamondNode::D => &[],
        };
        successors
            .iter()
            .map(|&(node, step)| DiamondState {
                node,
                cost: state.cost + step,
            })
            .collect()
    }
}

/// Zero heuristic: trivially admissible in both directions.
#[must_use]
pub fn diamond_zero(_state: &DiamondState, _problem: &DiamondProblem) -> i64 {
    0
}
