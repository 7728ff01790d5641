//! Robot puzzle runner: prints the 24-minute quality-level sum and the
//! 32-minute geode product for the input file (default `input.txt`).

use std::process;

use summit_worlds::robots::{max_geodes_product, parse_blueprints, quality_level_sum};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let input = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| fatal(&format!("cannot read {path}: {e}")));
    let blueprints =
        parse_blueprints(&input).unwrap_or_else(|e| fatal(&format!("bad input: {e}")));

    let part1 = quality_level_sum(&blueprints)
        .unwrap_or_else(|| fatal("24-minute search exhausted without reaching the deadline"));
    println!("{part1}");

    let part2 = max_geodes_product(&blueprints)
        .unwrap_or_else(|| fatal("32-minute search exhausted without reaching the deadline"));
    println!("{part2}");
}

fn fatal(msg: &str) -> ! {
    eprintln!("robots: {msg}");
    process::exit(1);
}
