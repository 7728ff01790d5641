//! Valve puzzle runner: prints the 30-minute single-agent answer and the
//! 26-minute two-agent answer for the input file (default `input.txt`).

use std::process;

use summit_worlds::valves::{pair, solo, ValveNetwork};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let input = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| fatal(&format!("cannot read {path}: {e}")));
    let network =
        ValveNetwork::parse(&input).unwrap_or_else(|e| fatal(&format!("bad input: {e}")));

    let part1 = solo::best_pressure(&network)
        .unwrap_or_else(|| fatal("single-agent search exhausted without reaching the deadline"));
    println!("{part1}");

    let part2 = pair::best_pressure(&network)
        .unwrap_or_else(|| fatal("two-agent search exhausted without reaching the deadline"));
    println!("{part2}");
}

fn fatal(msg: &str) -> ! {
    eprintln!("valves: {msg}");
    process::exit(1);
}
