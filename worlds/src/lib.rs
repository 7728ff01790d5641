//! Summit Worlds: puzzle domains that plug into the search engine.
//!
//! Each module owns one puzzle: parsing its fixed text input into domain
//! data, defining the state encoding and heuristic, and deriving the two
//! published answers through `summit_search::search::search`.
//!
//! | Module        | Direction | Objective                                  |
//! |---------------|-----------|--------------------------------------------|
//! | [`valves`]    | Maximize  | pressure released before a deadline        |
//! | [`robots`]    | Maximize  | geodes cracked before a deadline           |
//! | [`blizzards`] | Minimize  | minutes to cross a time-varying grid       |
//!
//! Solvers return `Option<i64>`: `None` means the search exhausted its
//! frontier without reaching a goal, which the runner binaries treat as a
//! fatal condition.

#![forbid(unsafe_code)]

pub mod blizzards;
pub mod robots;
pub mod valves;

/// Failure to turn a puzzle input text into domain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no usable lines.
    EmptyInput,
    /// A line did not match the expected shape (1-based line number).
    MalformedLine { line: usize, detail: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty puzzle input"),
            Self::MalformedLine { line, detail } => {
                write!(f, "malformed input at line {line}: {detail}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
