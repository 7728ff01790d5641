//! Valve-network pressure release (single-agent and two-agent schedules).
//!
//! Input lines look like:
//!
//! ```text
//! Valve BB has flow rate=13; tunnels lead to valves CC, AA
//! ```
//!
//! Valve names are interned to dense ids at parse time; the network also
//! precomputes the flow-descending order the heuristics walk and the count
//! of valves worth opening.

pub mod pair;
pub mod solo;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::ParseError;

/// Dense index into a [`ValveNetwork`]'s valve table.
pub type ValveId = u16;

/// One valve: its flow rate and tunnel adjacency.
#[derive(Debug, Clone)]
pub struct Valve {
    /// Two-uppercase-letter name from the input.
    pub name: String,
    /// Pressure released per minute once open.
    pub flow_rate: i64,
    /// Valves one tunnel away.
    pub neighbours: Vec<ValveId>,
}

/// The parsed valve graph plus derived data the heuristics need.
///
/// Immutable once constructed; read-only during search.
#[derive(Debug, Clone)]
pub struct ValveNetwork {
    valves: Vec<Valve>,
    start: ValveId,
    /// Valve ids sorted by flow rate, highest first.
    by_flow_desc: Vec<ValveId>,
    /// Number of valves with non-zero flow.
    useful: usize,
}

impl ValveNetwork {
    /// Parse the puzzle input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is empty, a line lacks a flow
    /// rate or valve names, a tunnel references an unknown valve, or no
    /// `AA` start valve exists.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let name_re = Regex::new("[A-Z][A-Z]").expect("hard-coded pattern compiles");
        let number_re = Regex::new("[0-9]+").expect("hard-coded pattern compiles");

        // First pass: intern names in order of appearance.
        let mut ids: FxHashMap<String, ValveId> = FxHashMap::default();
        let mut raw: Vec<(Vec<String>, i64)> = Vec::new();
        for (idx, line) in input.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let names: Vec<String> = name_re.find_iter(line).map(|m| m.as_str().to_string()).collect();
            if names.len() < 2 {
                return Err(ParseError::MalformedLine {
                    line: idx + 1,
                    detail: "expected a valve name and at least one tunnel".into(),
                });
            }
            let flow_rate: i64 = match number_re.find(line) {
                Some(m) => m.as_str().parse().map_err(|_| ParseError::MalformedLine {
                    line: idx + 1,
                    detail: "flow rate out of range".into(),
                })?,
                None => {
                    return Err(ParseError::MalformedLine {
                        line: idx + 1,
                        detail: "missing flow rate".into(),
                    })
                }
            };
            #[allow(clippy::cast_possible_truncation)]
            let id = raw.len() as ValveId;
            ids.insert(names[0].clone(), id);
            raw.push((names, flow_rate));
        }

        if raw.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Second pass: resolve tunnel names to interned ids.
        let mut valves = Vec::with_capacity(raw.len());
        for (idx, (names, flow_rate)) in raw.iter().enumerate() {
            let mut neighbours = Vec::with_capacity(names.len() - 1);
            for name in &names[1..] {
                let id = ids.get(name).ok_or_else(|| ParseError::MalformedLine {
                    line: idx + 1,
                    detail: format!("tunnel to unknown valve {name}"),
                })?;
                neighbours.push(*id);
            }
            valves.push(Valve {
                name: names[0].clone(),
                flow_rate: *flow_rate,
                neighbours,
            });
        }

        let start = *ids.get("AA").ok_or(ParseError::MalformedLine {
            line: 1,
            detail: "no start valve AA".into(),
        })?;

        #[allow(clippy::cast_possible_truncation)]
        let mut by_flow_desc: Vec<ValveId> = (0..valves.len() as ValveId).collect();
        by_flow_desc.sort_by_key(|&id| std::cmp::Reverse(valves[id as usize].flow_rate));
        let useful = valves.iter().filter(|v| v.flow_rate > 0).count();

        Ok(Self {
            valves,
            start,
            by_flow_desc,
            useful,
        })
    }

    /// Look up a valve by id.
    #[must_use]
    pub fn valve(&self, id: ValveId) -> &Valve {
        &self.valves[id as usize]
    }

    /// The `AA` valve every schedule starts from.
    #[must_use]
    pub fn start(&self) -> ValveId {
        self.start
    }

    /// Valve ids ordered by flow rate, highest first.
    #[must_use]
    pub fn by_flow_desc(&self) -> &[ValveId] {
        &self.by_flow_desc
    }

    /// Number of valves with non-zero flow.
    #[must_use]
    pub fn useful(&self) -> usize {
        self.useful
    }

    /// Total valve count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.valves.len()
    }

    /// Whether the network holds no valves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valves.is_empty()
    }
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = "\
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
