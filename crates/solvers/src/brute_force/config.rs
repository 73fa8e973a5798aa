use thiserror::Error;

/// Configuration for the brute-force solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_subsets: Option<u64>,
}

/// Errors that can occur when validating a brute-force solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_subsets must be positive")]
    ZeroLimit,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(10_000_000).unwrap()
    }
}

impl Config {
    /// Creates a config that refuses runs with more than `max_subsets` candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_subsets` is zero.
    pub fn new(max_subsets: u64) -> Result<Self, ConfigError> {
        if max_subsets == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(Self {
            max_subsets: Some(max_subsets),
        })
    }

    /// Creates a config with no limit on the number of candidates.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_subsets: None }
    }

    /// Returns the candidate limit, or `None` if the search is unlimited.
    #[must_use]
    pub fn max_subsets(&self) -> Option<u64> {
        self.max_subsets
    }

    /// Returns `true` if a run over `count` candidates is allowed.
    #[must_use]
    pub fn allows(&self, count: u64) -> bool {
        self.max_subsets.is_none_or(|limit| count <= limit)
    }
}

/// Returns the binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
///
/// Returns zero when `k > n`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        // Each partial product is C(n, i + 1), so the division is exact.
        count = count * (n - i) as u128 / (i + 1) as u128;
        if count > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }

    u64::try_from(count).unwrap_or(u64::MAX)
}
