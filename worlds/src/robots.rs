//! Robot-factory blueprints: maximize geodes cracked before a deadline.
//!
//! Materials are indexed ore, clay, obsidian, geode. Each minute every
//! robot gathers one unit of its material, and at most one new robot is
//! built. The answer for a blueprint is the geode count at the deadline.

use regex::Regex;

use summit_search::contract::{HeuristicFn, Problem, SearchState};
use summit_search::frontier::Direction;
use summit_search::search::search;

use crate::ParseError;

/// Material indices: ore, clay, obsidian, geode.
pub const MATERIALS: usize = 4;

/// Robot build costs for one blueprint.
///
/// `costs[robot]` lists how much ore, clay and obsidian the robot takes
/// (geodes are never spent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Blueprint number from the input.
    pub id: i64,
    /// `costs[robot][material]` for the first three materials.
    pub costs: [[i64; 3]; MATERIALS],
}

/// Parse one blueprint per line (seven numbers each).
///
/// # Errors
///
/// Returns [`ParseError`] when the input is empty or a line does not carry
/// exactly seven numbers.
pub fn parse_blueprints(input: &str) -> Result<Vec<Blueprint>, ParseError> {
    let number_re = Regex::new("[0-9]+").expect("hard-coded pattern compiles");
    let mut blueprints = Vec::new();

    for (idx, line) in input.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let numbers: Vec<i64> = number_re
            .find_iter(line)
            .map(|m| m.as_str().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::MalformedLine {
                line: idx + 1,
                detail: "number out of range".into(),
            })?;
        if numbers.len() != 7 {
            return Err(ParseError::MalformedLine {
                line: idx + 1,
                detail: format!("expected 7 numbers, found {}", numbers.len()),
            });
        }
        blueprints.push(Blueprint {
            id: numbers[0],
            costs: [
                [numbers[1], 0, 0],
                [numbers[2], 0, 0],
                [numbers[3], numbers[4], 0],
                [numbers[5], 0, numbers[6]],
            ],
        });
    }

    if blueprints.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(blueprints)
}

/// One point in a build schedule.
#[derive(Debug, Clone)]
pub struct RobotsState {
    minute: i64,
    robots: [i64; MATERIALS],
    materials: [i64; MATERIALS],
    heuristic_value: i64,
}

impl RobotsState {
    /// Minutes elapsed.
    #[must_use]
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Robots per material.
    #[must_use]
    pub fn robots(&self) -> &[i64; MATERIALS] {
        &self.robots
    }

    /// Stockpile per material.
    #[must_use]
    pub fn materials(&self) -> &[i64; MATERIALS] {
        &self.materials
    }
}

impl SearchState for RobotsState {
    fn cost(&self) -> i64 {
        // Geodes cracked so far.
        self.materials[3]
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + MATERIALS * 4);
        bytes.extend_from_slice(&(self.minute as u16).to_le_bytes());
        for i in 0..MATERIALS {
            bytes.extend_from_slice(&(self.materials[i] as u16).to_le_bytes());
            bytes.extend_from_slice(&(self.robots[i] as u16).to_le_bytes());
        }
        bytes
    }
}

/// A build-schedule search for one blueprint and deadline.
pub struct RobotsProblem {
    max_minutes: i64,
    blueprint: Blueprint,
}

impl RobotsProblem {
    /// Search for the best schedule under `blueprint` within `max_minutes`.
    #[must_use]
    pub fn new(max_minutes: i64, blueprint: Blueprint) -> Self {
        Self {
            max_minutes,
            blueprint,
        }
    }

    /// The schedule deadline in minutes.
    #[must_use]
    pub fn max_minutes(&self) -> i64 {
        self.max_minutes
    }

    fn state(
        &self,
        minute: i64,
        robots: [i64; MATERIALS],
        materials: [i64; MATERIALS],
        h: &HeuristicFn<Self>,
    ) -> RobotsState {
        let mut state = RobotsState {
            minute,
            robots,
            materials,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }
}

impl Problem for RobotsProblem {
    type State = RobotsState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> RobotsState {
        self.state(0, [1, 0, 0, 0], [0; MATERIALS], h)
    }

    fn is_goal(&self, state: &RobotsState) -> bool {
        state.minute == self.max_minutes
    }

    fn expand(&self, state: &RobotsState, h: &HeuristicFn<Self>) -> Vec<RobotsState> {
        let mut gathered = [0; MATERIALS];
        for i in 0..MATERIALS {
            gathered[i] = state.materials[i] + state.robots[i];
        }

        // Always legal: build nothing, just gather.
        let mut children = vec![self.state(state.minute + 1, state.robots, gathered, h)];

        for (robot, cost) in self.blueprint.costs.iter().enumerate() {
            let affordable = cost
                .iter()
                .zip(&state.materials)
                .all(|(&needed, &held)| held >= needed);
            if affordable {
                let mut robots = state.robots;
                robots[robot] += 1;
                let mut materials = gathered;
                for (material, &needed) in cost.iter().enumerate() {
                    materials[material] -= needed;
                }
                children.push(self.state(state.minute + 1, robots, materials, h));
            }
        }

        children
    }
}

fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Optimistic remaining-geode estimate: the current geode robots keep
/// producing, and a new geode robot appears every remaining minute.
/// Never underestimates.
#[must_use]
pub fn robots_heuristic(state: &RobotsState, problem: &RobotsProblem) -> i64 {
    let remaining = problem.max_minutes() - state.minute();
    state.robots()[3] * remaining + triangular(remaining)
}

fn best_geodes(max_minutes: i64, blueprint: &Blueprint) -> Option<i64> {
    let problem = RobotsProblem::new(max_minutes, blueprint.clone());
    search(&problem, &robots_heuristic, Direction::Maximize)
        .into_goal()
        .map(|goal| goal.cost())
}

/// Sum of `id * geodes(24 minutes)` over all blueprints.
#[must_use]
pub fn quality_level_sum(blueprints: &[Blueprint]) -> Option<i64> {
    let mut sum = 0;
    for blueprint in blueprints {
        sum += blueprint.id * best_geodes(24, blueprint)?;
    }
    Some(sum)
}

/// Product of `geodes(32 minutes)` over the first three blueprints.
#[must_use]
pub fn max_geodes_product(blueprints: &[Blueprint]) -> Option<i64> {
    let mut product = 1;
    for blueprint in blueprints.iter().take(3) {
        product *= best_geodes(32, blueprint)?;
    }
    Some(product)
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";
