//! Two-agent valve schedule: maximize pressure released in 26 minutes.
//!
//! Both agents act simultaneously each minute: open the valve they stand
//! at, or move through one tunnel. Two prunings keep the joint branching
//! factor in check: an agent whose current valve is already open never
//! moves straight back to the valve it came from, and once every useful
//! valve is open the schedule jumps directly to the deadline with the
//! remaining flow paid out in one step.

use std::collections::BTreeMap;

use itertools::Itertools;

use summit_search::contract::{HeuristicFn, Problem, SearchState};
use summit_search::frontier::Direction;
use summit_search::search::search;

use super::{ValveId, ValveNetwork};

/// Deadline for the two-agent schedule.
pub const TOTAL_MINUTES: i64 = 26;

/// One point in a two-agent schedule.
#[derive(Debug, Clone)]
pub struct PairState {
    minute: i64,
    positions: [ValveId; 2],
    /// Where each agent stood one minute ago (backtrack pruning).
    parents: [ValveId; 2],
    open: BTreeMap<ValveId, i64>,
    cost: i64,
    heuristic_value: i64,
}

impl PairState {
    /// Minutes elapsed.
    #[must_use]
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Opened valves with their opening minutes.
    #[must_use]
    pub fn open(&self) -> &BTreeMap<ValveId, i64> {
        &self.open
    }
}

impl SearchState for PairState {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn identity_bytes(&self) -> Vec<u8> {
        // Parent positions are transient bookkeeping for the backtrack
        // pruning and deliberately excluded.
        let mut bytes = Vec::with_capacity(6 + self.open.len() * 4);
        bytes.extend_from_slice(&(self.minute as u16).to_le_bytes());
        bytes.extend_from_slice(&self.positions[0].to_le_bytes());
        bytes.extend_from_slice(&self.positions[1].to_le_bytes());
        for (&valve, &opened_at) in &self.open {
            bytes.extend_from_slice(&valve.to_le_bytes());
            bytes.extend_from_slice(&(opened_at as u16).to_le_bytes());
        }
        bytes
    }
}

/// The two-agent problem over a parsed network.
pub struct PairValveProblem {
    network: ValveNetwork,
}

impl PairValveProblem {
    /// Wrap a parsed network.
    #[must_use]
    pub fn new(network: ValveNetwork) -> Self {
        Self { network }
    }

    /// The underlying network.
    #[must_use]
    pub fn network(&self) -> &ValveNetwork {
        &self.network
    }

    #[allow(clippy::too_many_arguments)]
    fn state(
        &self,
        minute: i64,
        positions: [ValveId; 2],
        parents: [ValveId; 2],
        open: BTreeMap<ValveId, i64>,
        cost: i64,
        h: &HeuristicFn<Self>,
    ) -> PairState {
        let mut state = PairState {
            minute,
            positions,
            parents,
            open,
            cost,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }

    fn flow_per_minute(&self, open: &BTreeMap<ValveId, i64>) -> i64 {
        open.keys().map(|&v| self.network.valve(v).flow_rate).sum()
    }
}

impl Problem for PairValveProblem {
    type State = PairState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> PairState {
        let start = self.network.start();
        self.state(0, [start, start], [start, start], BTreeMap::new(), 0, h)
    }

    fn is_goal(&self, state: &PairState) -> bool {
        state.minute == TOTAL_MINUTES
    }

    #[allow(clippy::too_many_lines)]
    fn expand(&self, state: &PairState, h: &HeuristicFn<Self>) -> Vec<PairState> {
        let mut children = Vec::new();
        let flow = self.flow_per_minute(&state.open);
        let next_cost = state.cost + flow;

        // Every useful valve open: nothing left to decide, pay out the
        // remaining flow and jump to the deadline.
        if state.open.len() == self.network.useful() {
            return vec![self.state(
                TOTAL_MINUTES,
                state.positions,
                state.positions,
                state.open.clone(),
                state.cost + flow * (TOTAL_MINUTES - state.minute),
                h,
            )];
        }

        let [first, second] = state.positions;
        let first_open = state.open.contains_key(&first);
        let second_open = state.open.contains_key(&second);
        let first_flow = self.network.valve(first).flow_rate;
        let second_flow = self.network.valve(second).flow_rate;

        // First opens, second moves.
        if !first_open && first_flow > 0 {
            for &neighbour in &self.network.valve(second).neighbours {
                if !second_open || state.parents[1] != neighbour {
                    let mut open = state.open.clone();
                    open.insert(first, state.minute + 1);
                    children.push(self.state(
                        state.minute + 1,
                        [first, neighbour],
                        state.positions,
                        open,
                        next_cost,
                        h,
                    ));
                }
            }
        }

        // Second opens, first moves.
        if !second_open && second_flow > 0 {
            for &neighbour in &self.network.valve(first).neighbours {
                if !first_open || state.parents[0] != neighbour {
                    let mut open = state.open.clone();
                    open.insert(second, state.minute + 1);
                    children.push(self.state(
                        state.minute + 1,
                        [neighbour, second],
                        state.positions,
                        open,
                        next_cost,
                        h,
                    ));
                }
            }
        }

        // Both open where they stand.
        if !first_open && !second_open && first_flow > 0 && second_flow > 0 {
            let mut open = state.open.clone();
            open.insert(first, state.minute + 1);
            open.insert(second, state.minute + 1);
            children.push(self.state(
                state.minute + 1,
                state.positions,
                state.positions,
                open,
                next_cost,
                h,
            ));
        }

        // Both move.
        let first_neighbours = &self.network.valve(first).neighbours;
        let second_neighbours = &self.network.valve(second).neighbours;
        for (&a, &b) in first_neighbours.iter().cartesian_product(second_neighbours) {
            let first_ok = !first_open || state.parents[0] != a;
            let second_ok = !second_open || state.parents[1] != b;
            if first_ok && second_ok {
                children.push(self.state(
                    state.minute + 1,
                    [a, b],
                    state.positions,
                    state.open.clone(),
                    next_cost,
                    h,
                ));
            }
        }

        children
    }
}

/// Optimistic remaining-gain estimate for two agents.
///
/// Like the single-agent estimate, but closed valves are assigned in pairs:
/// both agents grab one valve each before the two-minute travel-and-open
/// charge is paid. Never underestimates.
#[must_use]
pub fn pair_heuristic(state: &PairState, problem: &PairValveProblem) -> i64 {
    let network = problem.network();
    let mut estimate = 0;
    let mut remaining = Vec::new();

    for &id in network.by_flow_desc() {
        if state.open().contains_key(&id) {
            estimate += network.valve(id).flow_rate * (TOTAL_MINUTES - state.minute());
        } else {
            remaining.push(id);
        }
    }

    let mut minute = state.minute();
    let mut grabbed = 0;
    for id in remaining {
        grabbed += 1;
        estimate += network.valve(id).flow_rate * (TOTAL_MINUTES - minute);
        if grabbed == 2 {
            minute += 2;
            if minute > TOTAL_MINUTES {
                break;
            }
            grabbed = 0;
        }
    }

    estimate
}

/// Best pressure two agents can release in 26 minutes, or `None` if the
/// search exhausted.
#[must_use]
pub fn best_pressure(network: &ValveNetwork) -> Option<i64> {
    let problem = PairValveProblem::new(network.clone());
    search(&problem, &pair_heuristic, Direction::Maximize)
        .into_goal()
        .map(|goal| goal.cost())
}
