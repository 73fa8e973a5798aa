use thiserror::Error;
use tracing::{debug, warn};

use riesz_core::{Exponent, Geometry};

use crate::{brute_force, dp};

/// The DP result next to the exhaustive optimum for the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub dp: dp::Solution,
    pub oracle: brute_force::Solution,

    /// `dp.energy - oracle.energy`, never meaningfully negative.
    pub gap: f64,
}

/// Errors that can occur while cross-checking the solvers.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CrossCheckError {
    #[error("dp solver failed: {0}")]
    Dp(#[from] dp::Error),

    #[error("brute-force solver failed: {0}")]
    Oracle(#[from] brute_force::Error),
}

impl Comparison {
    /// Returns `true` if the energies match within `rel_tol`.
    ///
    /// The tolerance is relative to the oracle's energy, with an absolute
    /// floor of `rel_tol` so zero-energy selections compare cleanly.
    #[must_use]
    pub fn agrees(&self, rel_tol: f64) -> bool {
        self.gap.abs() <= rel_tol * self.oracle.energy.abs().max(1.0)
    }

    /// Returns `true` if both solvers selected the same ranks.
    #[must_use]
    pub fn same_subset(&self) -> bool {
        self.dp.subset == self.oracle.subset
    }
}

/// Runs the DP solver and the brute-force oracle on the same input.
///
/// # Errors
///
/// Returns the first solver error. The DP runs first, so invalid input is
/// reported as [`CrossCheckError::Dp`].
pub fn cross_check<G>(
    geometry: &G,
    k: usize,
    s: Exponent,
    config: &brute_force::Config,
) -> Result<Comparison, CrossCheckError>
where
    G: Geometry + ?Sized,
{
    let dp = dp::minimize_unobserved(geometry, k, s)?;
    let oracle = brute_force::minimize_unobserved(geometry, k, s, config)?;
    let gap = dp.energy - oracle.energy;

    if dp.subset == oracle.subset {
        debug!(k, energy = dp.energy, "solvers agree");
    } else {
        warn!(
            k,
            dp = %dp.subset,
            oracle = %oracle.subset,
            gap,
            "solvers selected different subsets"
        );
    }

    Ok(Comparison { dp, oracle, gap })
}
