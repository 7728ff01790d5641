//! Search run counters.

/// Counters accumulated over one search invocation.
///
/// Purely observational: nothing in the engine branches on these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped, found unvisited, and expanded.
    pub expansions: u64,
    /// States produced by `initial_state` and `expand` (pushed or not).
    pub nodes_generated: u64,
    /// States popped whose identity had already been expanded.
    pub duplicates_suppressed: u64,
    /// Largest frontier size reached during the run.
    pub frontier_high_water: u64,
    /// Distinct identities expanded.
    pub visited: u64,
}

impl SearchStats {
    /// Render as a JSON object for reports and benchmark artifacts.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "nodes_generated": self.nodes_generated,
            "duplicates_suppressed": self.duplicates_suppressed,
            "frontier_high_water": self.frontier_high_water,
            "visited": self.visited,
        })
    }
}
