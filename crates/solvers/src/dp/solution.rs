use std::fmt;

use riesz_core::Subset;

/// The result of a DP run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The selected ranks.
    pub subset: Subset,

    /// Riesz s-energy of the selected ranks.
    pub energy: f64,

    /// Number of `(m - 1, i) -> (m, j)` extensions evaluated.
    pub transitions: usize,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indices {}, energy ", self.subset)?;
        fmt::Display::fmt(&self.energy, f)
    }
}
