//! Single-agent valve schedule: maximize pressure released in 30 minutes.
//!
//! Each minute the agent either opens the valve it stands at (if useful and
//! still closed) or moves through one tunnel. Cost accrues incrementally:
//! every expansion adds one minute's worth of flow from the already-open
//! valves, so a state's cost is the pressure released up to its minute.

use std::collections::BTreeMap;

use summit_search::contract::{HeuristicFn, Problem, SearchState};
use summit_search::frontier::Direction;
use summit_search::search::search;

use super::{ValveId, ValveNetwork};

/// Deadline for the single-agent schedule.
pub const TOTAL_MINUTES: i64 = 30;

/// One point in a single-agent schedule.
///
/// `open` maps each opened valve to the minute it was opened; a `BTreeMap`
/// so the identity encoding below iterates it in canonical (sorted) order
/// regardless of opening history.
#[derive(Debug, Clone)]
pub struct SoloState {
    minute: i64,
    position: ValveId,
    open: BTreeMap<ValveId, i64>,
    cost: i64,
    heuristic_value: i64,
}

impl SoloState {
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

impl SearchState for SoloState {
    fn cost(&self) -> i64 {
        self.cost
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.open.len() * 4);
        bytes.extend_from_slice(&(self.minute as u16).to_le_bytes());
        bytes.extend_from_slice(&self.position.to_le_bytes());
        for (&valve, &opened_at) in &self.open {
            bytes.extend_from_slice(&valve.to_le_bytes());
            bytes.extend_from_slice(&(opened_at as u16).to_le_bytes());
        }
        bytes
    }
}

/// The single-agent problem over a parsed network.
pub struct SoloValveProblem {
    network: ValveNetwork,
}

impl SoloValveProblem {
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

    fn state(
        &self,
        minute: i64,
        position: ValveId,
        open: BTreeMap<ValveId, i64>,
        cost: i64,
        h: &HeuristicFn<Self>,
    ) -> SoloState {
        let mut state = SoloState {
            minute,
            position,
            open,
            cost,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }

    /// Pressure released by the open valves during one more minute.
    fn flow_per_minute(&self, open: &BTreeMap<ValveId, i64>) -> i64 {
        open.keys().map(|&v| self.network.valve(v).flow_rate).sum()
    }
}

impl Problem for SoloValveProblem {
    type State = SoloState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> SoloState {
        self.state(0, self.network.start(), BTreeMap::new(), 0, h)
    }

    fn is_goal(&self, state: &SoloState) -> bool {
        state.minute == TOTAL_MINUTES
    }

    fn expand(&self, state: &SoloState, h: &HeuristicFn<Self>) -> Vec<SoloState> {
        let mut children = Vec::new();
        let next_cost = state.cost + self.flow_per_minute(&state.open);

        let here = self.network.valve(state.position);
        if !state.open.contains_key(&state.position) && here.flow_rate > 0 {
            let mut open = state.open.clone();
            open.insert(state.position, state.minute + 1);
            children.push(self.state(state.minute + 1, state.position, open, next_cost, h));
        }

        for &neighbour in &here.neighbours {
            children.push(self.state(
                state.minute + 1,
                neighbour,
                state.open.clone(),
                next_cost,
                h,
            ));
        }

        children
    }
}

/// Optimistic estimate of the pressure still obtainable.
///
/// Already-open valves contribute their full remaining flow. Closed valves
/// are assigned greedily in flow-descending order, one every two minutes
/// (travel + open), as if each were adjacent. Never underestimates, which
/// is what makes the first goal popped optimal under `Maximize`.
#[must_use]
pub fn solo_heuristic(state: &SoloState, problem: &SoloValveProblem) -> i64 {
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
    for id in remaining {
        estimate += network.valve(id).flow_rate * (TOTAL_MINUTES - minute);
        minute += 2;
        if minute > TOTAL_MINUTES {
            break;
        }
    }

    estimate
}

/// Best pressure releasable in 30 minutes, or `None` if the search
/// exhausted (structurally impossible for a well-formed network).
#[must_use]
pub fn best_pressure(network: &ValveNetwork) -> Option<i64> {
    let problem = SoloValveProblem::new(network.clone());
    search(&problem, &solo_heuristic, Direction::Maximize)
        .into_goal()
        .map(|goal| goal.cost())
}
