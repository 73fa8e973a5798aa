use super::{Geometry, OrderingError};

/// Points on the real line, sorted in strictly increasing order.
///
/// The distance between two points is the absolute difference of their
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<'a> {
    xs: &'a [f64],
}

impl<'a> Line<'a> {
    /// Creates a line view over the given coordinates.
    ///
    /// The coordinates are not checked here; solvers call
    /// [`Geometry::validate`] before using them.
    #[must_use]
    pub fn new(xs: &'a [f64]) -> Self {
        Self { xs }
    }

    /// Returns the underlying coordinates.
    #[must_use]
    pub fn points(&self) -> &'a [f64] {
        self.xs
    }
}

impl Geometry for Line<'_> {
    fn len(&self) -> usize {
        self.xs.len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        (self.xs[j] - self.xs[i]).abs()
    }

    fn validate(&self) -> Result<(), OrderingError> {
        if let Some(rank) = self.xs.iter().position(|x| !x.is_finite()) {
            return Err(OrderingError::NonFinite { rank });
        }
        match self.xs.windows(2).position(|pair| pair[1] <= pair[0]) {
            Some(position) => Err(OrderingError::NotIncreasing { rank: position + 1 }),
            None => Ok(()),
        }
    }
}
