/// Event emitted by the DP solver after each table layer is filled.
///
/// Layer `size` holds the cheapest size-`size` subset ending at every rank.
/// The event reports the cheapest of those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Subset size of the layer just filled (1-based).
    pub size: usize,

    /// Number of layers the run will fill in total (the requested `k`).
    pub target: usize,

    /// Last rank of the cheapest subset in this layer.
    pub best_last: usize,

    /// Energy of the cheapest subset in this layer.
    pub best_energy: f64,
}

impl Event {
    /// Returns `true` if this is the final layer of the run.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.size == self.target
    }
}
