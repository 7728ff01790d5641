//! Diamond-graph scenario: duplicate identities collapse to the cheaper path.

use scenario_tests::{diamond_zero, DiamondProblem};
use summit_search::contract::SearchState;
use summit_search::frontier::Direction;
use summit_search::search::search;

#[test]
fn cheaper_incoming_edge_wins() {
    // D is discovered first via B (cost 6), then via C (cost 3); with an
    // admissible heuristic the cost-3 copy pops first and wins.
    let result = search(&DiamondProblem, &diamond_zero, Direction::Minimize);
    let goal = result.into_goal().expect("D reachable");
    assert_eq!(goal.cost(), 3);
}

#[test]
fn duplicate_copy_is_discarded_without_expansion() {
    let result = search(&DiamondProblem, &diamond_zero, Direction::Minimize);
    // A, B, C expanded; the first D popped is the goal, the second copy
    // never surfaces because the search stops. Expansions stay at 3.
    assert!(result.is_goal_reached());
    assert_eq!(result.stats.expansions, 3);
    assert_eq!(result.stats.nodes_generated, 5);
}
