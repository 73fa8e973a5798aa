//! The Riesz s-energy of a selection of points.
//!
//! For a selection `S` and exponent `s`,
//!
//! ```text
//! E(S) = Σ_{p < q in S} 1 / d(p, q)^s
//! ```
//!
//! Selections with fewer than two points have no pairs and zero energy.

use thiserror::Error;

use crate::{
    Exponent, Geometry,
    subset::{SubsetError, check_bounds, check_increasing},
};

/// Two distinct ranks are not separated by a strictly positive distance.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("points at ranks {i} and {j} are {distance} apart")]
pub struct DegenerateError {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Errors that can occur when evaluating the energy of a selection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EnergyError {
    #[error("invalid subset: {0}")]
    InvalidSubset(#[from] SubsetError),

    #[error("degenerate sequence: {0}")]
    Degenerate(#[from] DegenerateError),
}

/// Returns the energy contributed by the single pair `(i, j)`.
///
/// # Errors
///
/// Returns a [`DegenerateError`] if the distance between `i` and `j` is zero,
/// negative, or NaN. An infinite distance contributes zero energy.
pub fn pair_energy<G>(
    geometry: &G,
    i: usize,
    j: usize,
    s: Exponent,
) -> Result<f64, DegenerateError>
where
    G: Geometry + ?Sized,
{
    let distance = geometry.distance(i, j);
    if distance > 0.0 {
        Ok(s.kernel(distance))
    } else {
        Err(DegenerateError { i, j, distance })
    }
}

/// Returns the Riesz s-energy of the points at `ranks`.
///
/// Pairs are summed in lexicographic order.
///
/// # Errors
///
/// Returns [`EnergyError::InvalidSubset`] if `ranks` is not strictly
/// increasing or indexes past the end of the sequence, and
/// [`EnergyError::Degenerate`] if any selected pair has zero distance.
pub fn energy<G>(geometry: &G, ranks: &[usize], s: Exponent) -> Result<f64, EnergyError>
where
    G: Geometry + ?Sized,
{
    check_increasing(ranks)?;
    check_bounds(ranks, geometry.len())?;

    let mut total = 0.0;
    for (a, &p) in ranks.iter().enumerate() {
        for &q in &ranks[a + 1..] {
            total += pair_energy(geometry, p, q, s)?;
        }
    }
    Ok(total)
}
