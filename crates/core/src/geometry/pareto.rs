use super::{Geometry, OrderingError};

/// Non-dominated points of a bi-objective problem.
///
/// Points are `[f1, f2]` pairs sorted so that `f1` strictly increases and
/// `f2` strictly decreases. Under that ordering no point dominates another
/// and no two points coincide, so every pairwise Euclidean distance is
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoFront<'a> {
    points: &'a [[f64; 2]],
}

impl<'a> ParetoFront<'a> {
    /// Creates a front view over the given points.
    ///
    /// The ordering is not checked here; solvers call
    /// [`Geometry::validate`] before using the points.
    #[must_use]
    pub fn new(points: &'a [[f64; 2]]) -> Self {
        Self { points }
    }

    /// Returns the underlying points.
    #[must_use]
    pub fn points(&self) -> &'a [[f64; 2]] {
        self.points
    }
}

impl Geometry for ParetoFront<'_> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        let [x1, y1] = self.points[i];
        let [x2, y2] = self.points[j];
        (x2 - x1).hypot(y2 - y1)
    }

    fn validate(&self) -> Result<(), OrderingError> {
        if let Some(rank) = self
            .points
            .iter()
            .position(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(OrderingError::NonFinite { rank });
        }

        for (position, pair) in self.points.windows(2).enumerate() {
            let [prev, next] = [pair[0], pair[1]];
            let rank = position + 1;
            if next[0] <= prev[0] {
                return Err(OrderingError::NotIncreasing { rank });
            }
            if next[1] >= prev[1] {
                return Err(OrderingError::NotDecreasing { rank });
            }
        }

        Ok(())
    }
}
