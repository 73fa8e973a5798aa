use std::fmt;

use riesz_core::Subset;

/// Indicates whether the search covered every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate was evaluated; the subset is the true optimum.
    Complete,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a brute-force search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the search terminated.
    pub status: Status,

    /// The best ranks found.
    pub subset: Subset,

    /// Riesz s-energy of the best ranks.
    pub energy: f64,

    /// Number of candidates evaluated.
    pub evaluated: u64,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indices {}, energy ", self.subset)?;
        fmt::Display::fmt(&self.energy, f)?;
        if self.status == Status::StoppedByObserver {
            write!(f, " (stopped after {} candidates)", self.evaluated)?;
        }
        Ok(())
    }
}
