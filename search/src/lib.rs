//! Summit Search: a generic best-first search engine.
//!
//! A priority-queue-driven state-space search parameterized over an
//! arbitrary problem definition (initial state, expansion, goal test,
//! heuristic), with state-identity memoization to suppress redundant work.
//! One engine serves both objective directions: classical A* (minimize
//! path cost) and deadline maximization (branch-and-bound flavor), selected
//! by a comparator direction rather than duplicated code.
//!
//! This crate knows nothing about any concrete puzzle domain; domain
//! adapters live in `summit-worlds` and plug in through the
//! [`contract::Problem`] trait.
//!
//! # Key types
//!
//! - [`contract::SearchState`] — cost, heuristic estimate, canonical identity
//! - [`contract::Problem`] — initial state, goal test, expansion
//! - [`frontier::Frontier`] — direction-configurable binary-heap frontier
//! - [`frontier::VisitedSet`] — expanded-identity memo for one run
//! - [`search::search`] — the control loop; returns [`search::SearchResult`]

#![forbid(unsafe_code)]

pub mod contract;
pub mod frontier;
pub mod identity;
pub mod search;
pub mod stats;
