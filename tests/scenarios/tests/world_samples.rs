//! End-to-end runs of the puzzle worlds against their published samples.

use summit_worlds::blizzards::{first_trip, round_trip, BlizzardField};
use summit_worlds::robots::{parse_blueprints, quality_level_sum};
use summit_worlds::valves::{pair, solo, ValveNetwork};

const VALVES_SAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

const ROBOTS_SAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

const BLIZZARDS_SAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";

#[test]
fn valves_sample_answers() {
    let network = ValveNetwork::parse(VALVES_SAMPLE).unwrap();
    assert_eq!(solo::best_pressure(&network), Some(1651));
    assert_eq!(pair::best_pressure(&network), Some(1707));
}

#[test]
fn robots_sample_quality_sum() {
    let blueprints = parse_blueprints(ROBOTS_SAMPLE).unwrap();
    assert_eq!(quality_level_sum(&blueprints), Some(33));
}

#[test]
fn blizzards_sample_answers() {
    let field = BlizzardField::parse(BLIZZARDS_SAMPLE).unwrap();
    assert_eq!(first_trip(&field), Some(18));
    assert_eq!(round_trip(&field), Some(54));
}
