/// Event emitted by the brute-force solver for each evaluated candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// The candidate's ranks, strictly increasing.
    pub subset: &'a [usize],

    /// The candidate's energy.
    pub energy: f64,

    /// Energy of the best candidate before this one, `None` for the first.
    pub best_energy: Option<f64>,

    /// Number of candidates evaluated so far, including this one.
    pub evaluated: u64,
}

impl Event<'_> {
    /// Returns `true` if this candidate becomes the new best.
    #[must_use]
    pub fn is_improvement(&self) -> bool {
        self.energy.is_finite() && self.best_energy.is_none_or(|best| self.energy < best)
    }
}
