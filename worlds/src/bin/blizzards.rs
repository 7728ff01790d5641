//! Blizzard puzzle runner: prints the one-way crossing time and the
//! there-back-there crossing time for the input file (default `input.txt`).

use std::process;

use summit_worlds::blizzards::{first_trip, round_trip, BlizzardField};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let input = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| fatal(&format!("cannot read {path}: {e}")));
    let field =
        BlizzardField::parse(&input).unwrap_or_else(|e| fatal(&format!("bad input: {e}")));

    let part1 = first_trip(&field).unwrap_or_else(|| fatal("no path through the blizzards"));
    println!("{part1}");

    let part2 = round_trip(&field).unwrap_or_else(|| fatal("no round trip through the blizzards"));
    println!("{part2}");
}

fn fatal(msg: &str) -> ! {
    eprintln!("blizzards: {msg}");
    process::exit(1);
}
