//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across both solvers.
//!
//! # Event traits
//!
//! - [`HasEnergy`] — events that carry an energy value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use riesz_core::Observer;
//! use riesz_observers::traits::{CanStopEarly, HasEnergy};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasEnergy, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.energy() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use riesz_solvers::{brute_force, dp};

/// An event that carries an energy value.
pub trait HasEnergy {
    /// Returns the energy reported by this event.
    fn energy(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasEnergy impls ---

/// The cheapest subset of the layer just filled.
impl HasEnergy for dp::Event {
    fn energy(&self) -> f64 {
        self.best_energy
    }
}

/// The candidate just evaluated.
impl HasEnergy for brute_force::Event<'_> {
    fn energy(&self) -> f64 {
        self.energy
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for dp::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for brute_force::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
