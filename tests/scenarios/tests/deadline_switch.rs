//! Deadline-maximization scenario: the single-switch world.

use scenario_tests::{switch_optimist, SwitchProblem, SwitchState};
use summit_search::contract::SearchState;
use summit_search::frontier::Direction;
use summit_search::search::search;

#[test]
fn three_ticks_yield_two_rewards() {
    // Flip during the first tick, collect during the remaining two.
    let problem = SwitchProblem {
        total_ticks: 3,
        reward: 7,
    };
    let result = search(&problem, &switch_optimist, Direction::Maximize);
    let goal = result.into_goal().expect("deadline always reachable");
    assert_eq!(goal.cost(), 14);
}

#[test]
fn longer_deadline_scales_linearly() {
    let problem = SwitchProblem {
        total_ticks: 10,
        reward: 3,
    };
    let result = search(&problem, &switch_optimist, Direction::Maximize);
    assert_eq!(result.into_goal().map(|g| g.cost()), Some(27));
}

#[test]
fn zero_reward_still_reaches_the_deadline() {
    let problem = SwitchProblem {
        total_ticks: 3,
        reward: 0,
    };
    let result = search(&problem, &switch_optimist, Direction::Maximize);
    assert_eq!(result.into_goal().map(|g| g.cost()), Some(0));
}

#[test]
fn pessimist_heuristic_is_rejected_by_comparison() {
    // A heuristic that underestimates remaining gain can make the engine
    // settle for a worse schedule; this documents why admissibility
    // matters rather than asserting the engine detects it.
    let problem = SwitchProblem {
        total_ticks: 3,
        reward: 7,
    };
    let pessimist = |_: &SwitchState, _: &SwitchProblem| 0;
    let optimal = search(&problem, &switch_optimist, Direction::Maximize)
        .into_goal()
        .map(|g| g.cost());
    let maybe_worse = search(&problem, &pessimist, Direction::Maximize)
        .into_goal()
        .map(|g| g.cost());
    assert!(maybe_worse <= optimal);
}
