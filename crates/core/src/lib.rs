//! Core traits and types for Riesz s-energy subset selection.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Geometry`] — pairwise distances over a sorted point sequence, with a
//!   monotonicity check ([`Line`] for 1-D points, [`ParetoFront`] for 2-D
//!   non-dominated points, [`PointSequence`] to pick one at runtime)
//! - [`Exponent`] — the validated Riesz exponent `s`
//! - [`Subset`] — a strictly increasing selection of ranks
//! - [`energy`] — the Riesz s-energy of a selection
//! - [`Observer`] — receives solver events and optionally returns control actions

mod energy;
mod exponent;
mod geometry;
mod observer;
mod subset;

pub use energy::{DegenerateError, EnergyError, energy, pair_energy};
pub use exponent::{Exponent, ExponentError};
pub use geometry::{
    Geometry, Line, OrderingError, ParetoFront, PointSequence, UnknownVariant, Variant,
};
pub use observer::Observer;
pub use subset::{Subset, SubsetError};
