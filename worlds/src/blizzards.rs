//! Blizzard basin crossing: minimize minutes through a time-varying grid.
//!
//! The map is a `#`-walled rectangle of moving blizzards (`> < ^ v`), with
//! one gap in the top wall (start) and one in the bottom wall (goal). Each
//! minute every blizzard advances one cell, wrapping at the walls, and the
//! expedition waits or steps to an adjacent cell that no blizzard occupies.
//!
//! The blizzard pattern repeats with period `lcm(interior rows, interior
//! cols)`, so all per-minute occupancy sets are precomputed at parse time;
//! the field is read-only during search, and the per-minute occupancy table
//! is the memoization a schedule would otherwise rebuild lazily.

use rustc_hash::FxHashSet;

use summit_search::contract::{HeuristicFn, Problem, SearchState};
use summit_search::frontier::Direction;
use summit_search::search::search;

use crate::ParseError;

/// `(row, col)` on the full map, walls included.
pub type Cell = (i64, i64);

/// The parsed basin: dimensions, gates and precomputed blizzard occupancy.
#[derive(Debug, Clone)]
pub struct BlizzardField {
    rows: i64,
    cols: i64,
    start: Cell,
    goal: Cell,
    /// `occupancy[minute % period]` holds every blizzard-covered cell.
    occupancy: Vec<FxHashSet<Cell>>,
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

impl BlizzardField {
    /// Parse the walled grid.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the grid is smaller than 3×3, ragged, or
    /// contains a character other than `# . > < ^ v`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() < 3 {
            return Err(ParseError::EmptyInput);
        }
        let cols = lines[0].len() as i64;
        if cols < 3 {
            return Err(ParseError::MalformedLine {
                line: 1,
                detail: "grid too narrow".into(),
            });
        }
        let rows = lines.len() as i64;

        let mut directions: Vec<Cell> = Vec::new();
        let mut positions: Vec<Cell> = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            if line.len() as i64 != cols {
                return Err(ParseError::MalformedLine {
                    line: r + 1,
                    detail: "ragged grid row".into(),
                });
            }
            for (c, cell) in line.bytes().enumerate() {
                let direction = match cell {
                    b'#' | b'.' => continue,
                    b'>' => (0, 1),
                    b'<' => (0, -1),
                    b'v' => (1, 0),
                    b'^' => (-1, 0),
                    other => {
                        return Err(ParseError::MalformedLine {
                            line: r + 1,
                            detail: format!("unexpected grid cell {:?}", char::from(other)),
                        })
                    }
                };
                directions.push(direction);
                positions.push((r as i64, c as i64));
            }
        }

        let period = lcm(rows - 2, cols - 2);
        let mut occupancy = Vec::with_capacity(period as usize);
        for _ in 0..period {
            occupancy.push(positions.iter().copied().collect::<FxHashSet<Cell>>());
            for (position, &(dr, dc)) in positions.iter_mut().zip(&directions) {
                let mut next = (position.0 + dr, position.1 + dc);
                // Wrap at the walls: a blizzard leaving one edge re-enters
                // from the opposite interior cell.
                if next.0 < 1 || next.0 >= rows - 1 {
                    next.0 = position.0 - dr * (rows - 3);
                }
                if next.1 < 1 || next.1 >= cols - 1 {
                    next.1 = position.1 - dc * (cols - 3);
                }
                *position = next;
            }
        }

        Ok(Self {
            rows,
            cols,
            start: (0, 1),
            goal: (rows - 1, cols - 2),
            occupancy,
        })
    }

    /// The gap in the top wall.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The gap in the bottom wall.
    #[must_use]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Length of the blizzard cycle.
    #[must_use]
    pub fn period(&self) -> usize {
        self.occupancy.len()
    }

    /// Whether any blizzard covers `cell` at the given absolute minute.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn occupied(&self, minute: i64, cell: Cell) -> bool {
        let index = (minute.rem_euclid(self.occupancy.len() as i64)) as usize;
        self.occupancy[index].contains(&cell)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 > 0 && cell.0 < self.rows - 1 && cell.1 > 0 && cell.1 < self.cols - 1
    }
}

/// One point in a crossing: the minute doubles as the accumulated cost.
#[derive(Debug, Clone)]
pub struct BlizzardState {
    minute: i64,
    position: Cell,
    heuristic_value: i64,
}

impl BlizzardState {
    /// Minutes elapsed since the very first departure.
    #[must_use]
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Expedition position.
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }
}

impl SearchState for BlizzardState {
    fn cost(&self) -> i64 {
        self.minute
    }

    fn heuristic_value(&self) -> i64 {
        self.heuristic_value
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn identity_bytes(&self) -> Vec<u8> {
        // The minute is semantic here: the grid changes every minute, so
        // the same cell at different minutes is a different search node.
        let mut bytes = Vec::with_capacity(12);
        bytes.extend_from_slice(&(self.minute as u32).to_le_bytes());
        bytes.extend_from_slice(&(self.position.0 as u16).to_le_bytes());
        bytes.extend_from_slice(&(self.position.1 as u16).to_le_bytes());
        bytes
    }
}

/// One trip across the basin, `from` gate to `to` gate, departing no
/// earlier than `initial_minute`.
pub struct BlizzardProblem<'a> {
    field: &'a BlizzardField,
    from: Cell,
    to: Cell,
    initial_minute: i64,
}

impl<'a> BlizzardProblem<'a> {
    /// Define one trip over a parsed field.
    #[must_use]
    pub fn new(field: &'a BlizzardField, from: Cell, to: Cell, initial_minute: i64) -> Self {
        Self {
            field,
            from,
            to,
            initial_minute,
        }
    }

    /// Destination gate.
    #[must_use]
    pub fn to(&self) -> Cell {
        self.to
    }

    fn state(&self, minute: i64, position: Cell, h: &HeuristicFn<Self>) -> BlizzardState {
        let mut state = BlizzardState {
            minute,
            position,
            heuristic_value: 0,
        };
        state.heuristic_value = h(&state, self);
        state
    }
}

impl Problem for BlizzardProblem<'_> {
    type State = BlizzardState;

    fn initial_state(&self, h: &HeuristicFn<Self>) -> BlizzardState {
        self.state(self.initial_minute, self.from, h)
    }

    fn is_goal(&self, state: &BlizzardState) -> bool {
        state.position == self.to
    }

    fn expand(&self, state: &BlizzardState, h: &HeuristicFn<Self>) -> Vec<BlizzardState> {
        const MOVES: [Cell; 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut children = Vec::new();
        let minute = state.minute + 1;

        for (dr, dc) in MOVES {
            let next = (state.position.0 + dr, state.position.1 + dc);
            let legal = self.field.in_bounds(next) || next == self.from || next == self.to;
            if legal && !self.field.occupied(minute, next) {
                children.push(self.state(minute, next, h));
            }
        }

        children
    }
}

/// Manhattan distance to the destination gate: each step covers at most one
/// unit of it, so the estimate never overestimates the remaining minutes.
#[must_use]
pub fn manhattan_heuristic(state: &BlizzardState, problem: &BlizzardProblem<'_>) -> i64 {
    let (r, c) = state.position();
    let (gr, gc) = problem.to();
    (r - gr).abs() + (c - gc).abs()
}

/// Minutes on the clock after one trip, or `None` when the crossing is
/// impossible (every path blocked forever).
#[must_use]
pub fn trip(field: &BlizzardField, from: Cell, to: Cell, initial_minute: i64) -> Option<i64> {
    let problem = BlizzardProblem::new(field, from, to, initial_minute);
    search(&problem, &manhattan_heuristic, Direction::Minimize)
        .into_goal()
        .map(|goal| goal.cost())
}

/// Minutes for the first start-to-goal crossing.
#[must_use]
pub fn first_trip(field: &BlizzardField) -> Option<i64> {
    trip(field, field.start(), field.goal(), 0)
}

/// Minutes for there, back for the snacks, and there again.
#[must_use]
pub fn round_trip(field: &BlizzardField) -> Option<i64> {
    let there = trip(field, field.start(), field.goal(), 0)?;
    let back = trip(field, field.goal(), field.start(), there)?;
    trip(field, field.start(), field.goal(), back)
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";
