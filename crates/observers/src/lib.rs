//! Reusable observers for the Riesz energy solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in `riesz-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEnergy`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Deadline`] — stops a solver once a wall-clock budget is spent
//! - [`TraceObserver`] — forwards every event to `tracing`
//!
//! [`Observer`]: riesz_core::Observer
//! [`HasEnergy`]: traits::HasEnergy
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod trace;

pub use deadline::Deadline;
pub use trace::TraceObserver;
