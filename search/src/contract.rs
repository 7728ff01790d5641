//! Search state and problem contract traits.

/// The facets a domain state must expose to the engine.
///
/// A state is an opaque, immutable value created by a [`Problem`]'s
/// `initial_state`/`expand` and never mutated after construction.
///
/// # Contract
///
/// - `cost` is the accumulated objective value along the expansion chain
///   (monotonically non-decreasing in both search directions).
/// - `heuristic_value` estimates the best achievable remaining contribution
///   to the objective. Admissibility (never overestimate remaining cost when
///   minimizing; never underestimate remaining gain when maximizing) is what
///   makes the first pop of a goal optimal. It is not checked at runtime.
/// - `identity_bytes` must be a pure, order-independent function of the
///   semantically relevant state content, never of transient bookkeeping.
///   Two states that are semantically equal but built in different internal
///   orders must produce identical bytes (canonicalize unordered
///   substructures, e.g. via sorted encodings).
pub trait SearchState {
    /// Accumulated objective value so far.
    fn cost(&self) -> i64;

    /// Estimate of the best achievable remaining objective contribution.
    fn heuristic_value(&self) -> i64;

    /// Canonical identity encoding used for duplicate suppression.
    fn identity_bytes(&self) -> Vec<u8>;

    /// The frontier ordering key: `cost + heuristic_value` (saturating).
    #[must_use]
    fn priority(&self) -> i64 {
        self.cost().saturating_add(self.heuristic_value())
    }
}

/// A heuristic estimator for a problem's states.
///
/// Threaded explicitly through `initial_state` and `expand` (rather than
/// baked into the problem) so the same problem can be searched with
/// different heuristics, e.g. a zero heuristic when testing admissibility.
pub type HeuristicFn<P> = dyn Fn(&<P as Problem>::State, &P) -> i64;

/// The pluggable definition of a search space.
///
/// A problem owns whatever static domain data (graphs, cost tables, grids)
/// its heuristic and expansion need; that data is read-only during search.
///
/// # Contract
///
/// - `is_goal` is a pure, stable predicate: the same state always yields
///   the same answer.
/// - `expand` produces every successor reachable by one atomic domain
///   action, must terminate with a finite successor count, and must not
///   mutate the input state. An empty expansion is legal only when further
///   progress toward any goal is structurally impossible; the driver treats
///   an exhausted frontier as overall search failure, not a per-state error.
pub trait Problem {
    /// The domain state type searched over.
    type State: SearchState;

    /// Build the start state, computing its heuristic value via `h`.
    fn initial_state(&self, h: &HeuristicFn<Self>) -> Self::State;

    /// Whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All direct successors of `state`, each constructed with `h`.
    fn expand(&self, state: &Self::State, h: &HeuristicFn<Self>) -> Vec<Self::State>;
}
