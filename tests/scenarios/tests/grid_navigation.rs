//! Grid navigation scenarios: optimality, exhaustion, heuristic swap.

use scenario_tests::{grid_manhattan, GridProblem, GridState};
use summit_search::contract::SearchState;
use summit_search::frontier::Direction;
use summit_search::search::{search, SearchOutcome};

fn open_3x3() -> GridProblem {
    GridProblem {
        width: 3,
        height: 3,
        start: (0, 0),
        goal: (2, 2),
        walls: Vec::new(),
    }
}

#[test]
fn open_grid_minimum_cost_is_4() {
    let result = search(&open_3x3(), &grid_manhattan, Direction::Minimize);
    let goal = result.into_goal().expect("goal reachable");
    assert_eq!(goal.cost(), 4);
}

#[test]
fn zero_heuristic_finds_the_same_optimum() {
    // Admissibility testing: the same problem searched with a different
    // heuristic must agree on the optimal cost.
    let zero = |_: &GridState, _: &GridProblem| 0;
    let with_zero = search(&open_3x3(), &zero, Direction::Minimize);
    let with_manhattan = search(&open_3x3(), &grid_manhattan, Direction::Minimize);
    assert_eq!(
        with_zero.into_goal().map(|g| g.cost()),
        with_manhattan.into_goal().map(|g| g.cost())
    );
}

#[test]
fn manhattan_expands_no_more_than_zero_heuristic() {
    let zero = |_: &GridState, _: &GridProblem| 0;
    let problem = GridProblem {
        width: 8,
        height: 8,
        start: (0, 0),
        goal: (7, 7),
        walls: vec![(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)],
    };
    let with_zero = search(&problem, &zero, Direction::Minimize);
    let with_manhattan = search(&problem, &grid_manhattan, Direction::Minimize);
    assert_eq!(
        with_zero.goal().map(|g| g.cost()),
        with_manhattan.goal().map(|g| g.cost())
    );
    assert!(with_manhattan.stats.expansions <= with_zero.stats.expansions);
}

#[test]
fn detour_around_a_wall_costs_more() {
    // A wall across column 2 with a single gap at (2, 4) forces every
    // path through that gap: 6 steps to the gap plus 6 back down.
    let problem = GridProblem {
        width: 5,
        height: 5,
        start: (0, 0),
        goal: (4, 0),
        walls: vec![(2, 0), (2, 1), (2, 2), (2, 3)],
    };
    let result = search(&problem, &grid_manhattan, Direction::Minimize);
    let goal = result.into_goal().expect("gap keeps the goal reachable");
    assert_eq!(goal.cost(), 12);
}

#[test]
fn walled_goal_exhausts_with_bounded_work() {
    let problem = GridProblem {
        width: 5,
        height: 5,
        start: (0, 0),
        goal: (4, 4),
        walls: vec![(3, 4), (4, 3)],
    };
    let result = search(&problem, &grid_manhattan, Direction::Minimize);
    assert!(matches!(result.outcome, SearchOutcome::Exhausted));
    // Finite state space: every open cell expanded at most once.
    assert!(result.stats.visited <= 25);
}
