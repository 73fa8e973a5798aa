use std::time::{Duration, Instant};

use riesz_core::Observer;

use crate::traits::CanStopEarly;

/// Stand-in for budgets too large to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Stops a solver once a wall-clock deadline passes.
///
/// The deadline is checked on every event, so a solver stops at the first
/// event after it passes. The brute-force solver then returns its best subset
/// so far, while the DP solver reports that it was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    ///
    /// Budgets too large to represent are capped at about a century.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        let now = Instant::now();
        let at = now
            .checked_add(budget)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        Self { at }
    }

    /// Creates a deadline at a fixed instant.
    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Returns the instant at which the deadline expires.
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.at
    }

    /// Returns `true` if the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_expired() {
            tracing::debug!("deadline expired, stopping early");
            return Some(A::stop_early());
        }
        None
    }
}
