//! Distances and ordering checks over sorted point sequences.
//!
//! A [`Geometry`] is a borrowed view over points identified by their rank
//! (0-based position in the sorted sequence). Solvers are written once
//! against this trait; each variant supplies its own distance and its own
//! notion of a valid ordering.
//!
//! # Variants
//!
//! - [`Line`] — real numbers, strictly increasing
//! - [`ParetoFront`] — 2-D points, first objective strictly increasing and
//!   second strictly decreasing
//!
//! [`PointSequence`] wraps either variant when the choice is made at runtime.

mod line;
mod pareto;
mod sequence;

pub use line::Line;
pub use pareto::ParetoFront;
pub use sequence::{PointSequence, UnknownVariant, Variant};

use thiserror::Error;

/// Pairwise distances over a sequence of points identified by rank.
pub trait Geometry {
    /// Returns the number of points.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the distance between the points at ranks `i` and `j`.
    ///
    /// For a sequence that passes [`validate`](Self::validate), the distance
    /// between distinct ranks is strictly positive.
    ///
    /// # Panics
    ///
    /// Panics if either rank is out of range.
    fn distance(&self, i: usize, j: usize) -> f64;

    /// Checks the ordering invariant required by this variant.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderingError`] naming the first offending rank.
    fn validate(&self) -> Result<(), OrderingError>;
}

/// The point sequence violates the ordering required by its variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderingError {
    #[error("point at rank {rank} has a non-finite coordinate")]
    NonFinite { rank: usize },

    #[error("point at rank {rank} does not strictly increase from its predecessor")]
    NotIncreasing { rank: usize },

    #[error("point at rank {rank} does not strictly decrease from its predecessor in f2")]
    NotDecreasing { rank: usize },
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        (**self).distance(i, j)
    }

    fn validate(&self) -> Result<(), OrderingError> {
        (**self).validate()
    }
}
