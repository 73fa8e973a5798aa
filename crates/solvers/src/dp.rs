//! Dynamic programming over subsets that end at a given rank.
//!
//! # Algorithm
//!
//! The state `(m, j)` is the cheapest size-`m` subset whose largest rank is
//! `j`. Size 1 costs nothing. A size-`m` subset ending at `j` extends a
//! size-`(m - 1)` subset ending at some `i < j`; because every point already
//! selected pairs with `j`, the added energy is
//!
//! ```text
//! Σ_{p in chain(m - 1, i)} 1 / d(p, j)^s
//! ```
//!
//! Each state stores only its predecessor rank. The chain behind `(m - 1, i)`
//! is recovered by following predecessors, which costs `O(m)` per
//! transition, `O(n² k²)` in total, and `O(n k)` memory for the table. There
//! are `O(n² k)` transitions, and each one sums a pair term for every point
//! already on the chain, up to `k - 1` of them, so the work per transition is
//! not constant.
//!
//! # Ties
//!
//! Predecessors are scanned in increasing rank and replaced only on a strictly
//! smaller energy, so the smaller predecessor wins exact ties. The final
//! answer likewise prefers the smaller last rank.
//!
//! # Limitations
//!
//! Each state keeps a single chain, the cheapest one ending at `j`. A chain
//! that is more expensive at size `m - 1` can occasionally be the better one
//! to extend, so on some inputs the result is worse than the true optimum.
//! Use [`brute_force`](mod@crate::brute_force) or [`cross_check`](crate::cross_check)
//! to measure the gap on small inputs.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each table layer is filled, starting
//! with size 1. Returning [`Action::StopEarly`] aborts the run with
//! [`Error::StoppedByObserver`]; there are no partial results.

mod action;
mod error;
mod event;
mod search;
mod solution;
mod table;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use riesz_core::{Exponent, Geometry, Observer};

use search::search;

/// Finds a minimum-energy subset of `k` points by dynamic programming.
///
/// The observer receives an [`Event`] after each layer of the table is
/// filled. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the sequence fails [`Geometry::validate`], if `k` is
/// outside `1..=n`, if two points coincide, or if the observer stops the run.
pub fn minimize<G, Obs>(
    geometry: &G,
    k: usize,
    s: Exponent,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(geometry, k, s, observer)
}

/// Finds a minimum-energy subset without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the sequence fails [`Geometry::validate`], if `k` is
/// outside `1..=n`, or if two points coincide.
pub fn minimize_unobserved<G>(geometry: &G, k: usize, s: Exponent) -> Result<Solution, Error>
where
    G: Geometry + ?Sized,
{
    minimize(geometry, k, s, ())
}
