//! Exhaustive search over every size-`k` subset.
//!
//! # Algorithm
//!
//! Enumerates the `C(n, k)` strictly increasing rank sequences in
//! lexicographic order, evaluates each with [`riesz_core::energy`], and keeps
//! the cheapest. A candidate replaces the current best only on a strictly
//! smaller energy, so the first subset seen wins exact ties.
//!
//! # When to Use
//!
//! The enumeration is combinatorial, so this solver is a correctness oracle
//! for small inputs, not a production path. [`Config`] caps the number of
//! candidates a run may enumerate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluated candidate. Returning
//! [`Action::StopEarly`] ends the search and returns the best subset seen so
//! far with [`Status::StoppedByObserver`]. This is how callers impose a
//! deadline on large runs.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, binomial};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use riesz_core::{Exponent, Geometry, Observer};

use search::search;

/// Finds the minimum-energy subset of `k` points by exhaustive enumeration.
///
/// The observer receives an [`Event`] for each evaluated candidate.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the sequence fails [`Geometry::validate`], if `k` is
/// outside `1..=n`, if there are more candidates than `config` allows, or if
/// two points coincide.
pub fn minimize<G, Obs>(
    geometry: &G,
    k: usize,
    s: Exponent,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(geometry, k, s, config, observer)
}

/// Finds the minimum-energy subset without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the sequence fails [`Geometry::validate`], if `k` is
/// outside `1..=n`, if there are more candidates than `config` allows, or if
/// two points coincide.
pub fn minimize_unobserved<G>(
    geometry: &G,
    k: usize,
    s: Exponent,
    config: &Config,
) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
{
    minimize(geometry, k, s, config, ())
}
