//! Solvers for minimum Riesz s-energy subset selection.
//!
//! Given a sorted point sequence (any [`Geometry`]), a subset size `k`, and an
//! [`Exponent`] `s`, these solvers choose the `k` ranks whose pairwise Riesz
//! s-energy is smallest.
//!
//! # Solvers
//!
//! - [`dp`] — dynamic programming over "size-m subsets ending at rank j",
//!   polynomial in the number of points
//! - [`brute_force`](mod@brute_force) — exhaustive enumeration, used as a
//!   correctness oracle on small inputs
//!
//! [`cross_check`] runs both and compares their answers. For callers that pick
//! the geometry at runtime, [`optimize`] and [`brute_force()`] accept a
//! [`PointSequence`] directly.

mod compare;
mod selection;

pub mod brute_force;
pub mod dp;

pub use compare::{Comparison, CrossCheckError, cross_check};

use riesz_core::{Exponent, PointSequence};

#[cfg(doc)]
use riesz_core::Geometry;

/// Selects `k` points from `sequence` with the DP optimizer.
///
/// This is a convenience wrapper around [`dp::minimize_unobserved`].
///
/// # Errors
///
/// Returns an error if the sequence is not ordered for its variant, if `k` is
/// outside `1..=n`, or if two points coincide.
pub fn optimize(
    sequence: &PointSequence<'_>,
    k: usize,
    s: Exponent,
) -> Result<dp::Solution, dp::Error> {
    dp::minimize_unobserved(sequence, k, s)
}

/// Selects `k` points from `sequence` by exhaustive enumeration.
///
/// This is a convenience wrapper around [`brute_force::minimize_unobserved`]
/// with the default [`brute_force::Config`].
///
/// # Errors
///
/// Returns an error if the sequence is not ordered for its variant, if `k` is
/// outside `1..=n`, if two points coincide, or if there are more candidate
/// subsets than the default limit allows.
pub fn brute_force(
    sequence: &PointSequence<'_>,
    k: usize,
    s: Exponent,
) -> Result<brute_force::Solution, brute_force::Error> {
    brute_force::minimize_unobserved(sequence, k, s, &brute_force::Config::default())
}
