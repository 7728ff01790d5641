//! Search stats render to a stable JSON artifact shape.

use scenario_tests::{grid_manhattan, GridProblem};
use summit_search::frontier::Direction;
use summit_search::search::search;

#[test]
fn stats_json_has_the_expected_fields() {
    let problem = GridProblem {
        width: 3,
        height: 3,
        start: (0, 0),
        goal: (2, 2),
        walls: Vec::new(),
    };
    let result = search(&problem, &grid_manhattan, Direction::Minimize);
    let v = result.stats.to_json();

    for field in [
        "expansions",
        "nodes_generated",
        "duplicates_suppressed",
        "frontier_high_water",
        "visited",
    ] {
        assert!(v.get(field).is_some(), "missing stats field {field}");
        assert!(v[field].is_u64(), "stats field {field} not a u64");
    }
    assert!(v["nodes_generated"].as_u64().unwrap() >= v["expansions"].as_u64().unwrap());
}

#[test]
fn exhausted_run_still_reports_stats() {
    let problem = GridProblem {
        width: 2,
        height: 1,
        start: (0, 0),
        goal: (5, 5),
        walls: Vec::new(),
    };
    let result = search(&problem, &grid_manhattan, Direction::Minimize);
    assert!(!result.is_goal_reached());
    assert_eq!(result.stats.to_json()["visited"], 2);
}
