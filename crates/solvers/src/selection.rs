use riesz_core::{Geometry, OrderingError};

/// A precondition shared by every solver failed.
///
/// Each solver converts this into its own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Precondition {
    Ordering(OrderingError),
    Infeasible { k: usize, n: usize },
}

/// Validates the sequence ordering, then the requested subset size.
///
/// Returns the number of points on success.
pub(crate) fn check<G: Geometry + ?Sized>(geometry: &G, k: usize) -> Result<usize, Precondition> {
    geometry.validate().map_err(Precondition::Ordering)?;

    let n = geometry.len();
    if k == 0 || k > n {
        return Err(Precondition::Infeasible { k, n });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use riesz_core::Line;

    #[test]
    fn accepts_sizes_within_range() {
        let xs = [0.0, 1.0, 2.0];
        let line = Line::new(&xs);

        for k in 1..=3 {
            assert_eq!(check(&line, k), Ok(3));
        }
    }

    #[test]
    fn rejects_zero_and_oversized_selections() {
        let xs = [0.0, 1.0, 2.0];
        let line = Line::new(&xs);

        assert_eq!(check(&line, 0), Err(Precondition::Infeasible { k: 0, n: 3 }));
        assert_eq!(check(&line, 4), Err(Precondition::Infeasible { k: 4, n: 3 }));
    }

    #[test]
    fn ordering_is_checked_first() {
        let xs = [1.0, 0.0];
        let line = Line::new(&xs);

        assert_eq!(
            check(&line, 5),
            Err(Precondition::Ordering(OrderingError::NotIncreasing { rank: 1 }))
        );
    }

    #[test]
    fn empty_sequence_is_always_infeasible() {
        let line = Line::new(&[]);
        assert_eq!(check(&line, 1), Err(Precondition::Infeasible { k: 1, n: 0 }));
    }
}
