use thiserror::Error;

/// The Riesz exponent `s`.
///
/// Larger values weight close pairs more heavily. An `Exponent` is always
/// finite and strictly positive, so every solver can trust it without
/// re-checking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Exponent(f64);

/// Errors that can occur when constructing an [`Exponent`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ExponentError {
    #[error("exponent must be finite, got {0}")]
    NotFinite(f64),

    #[error("exponent must be strictly positive, got {0}")]
    NotPositive(f64),
}

impl Exponent {
    /// Creates a validated exponent.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is NaN, infinite, zero, or negative.
    pub fn new(s: f64) -> Result<Self, ExponentError> {
        if !s.is_finite() {
            return Err(ExponentError::NotFinite(s));
        }
        if s <= 0.0 {
            return Err(ExponentError::NotPositive(s));
        }
        Ok(Self(s))
    }

    /// Returns the raw exponent value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the Riesz kernel `1 / d^s` for a distance `d`.
    ///
    /// An infinite distance yields zero.
    #[must_use]
    pub fn kernel(self, distance: f64) -> f64 {
        1.0 / distance.powf(self.0)
    }
}

impl TryFrom<f64> for Exponent {
    type Error = ExponentError;

    fn try_from(s: f64) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
