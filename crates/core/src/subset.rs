use std::{fmt, ops::Deref};

use thiserror::Error;

/// A selection of ranks into a point sequence.
///
/// Ranks are strictly increasing, so a `Subset` never contains duplicates.
/// Subsets are immutable once constructed; solvers build new ones rather
/// than editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Subset(Vec<usize>);

/// Errors that can occur when validating a selection of ranks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubsetError {
    #[error("rank {rank} appears more than once")]
    Duplicate { rank: usize },

    #[error("ranks are not increasing at position {position}")]
    Unsorted { position: usize },

    #[error("rank {rank} is out of range for a sequence of {len} points")]
    OutOfRange { rank: usize, len: usize },
}

impl Subset {
    /// Creates a subset from ranks that must already be strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetError::Duplicate`] if two adjacent ranks are equal and
    /// [`SubsetError::Unsorted`] if a rank is smaller than its predecessor.
    pub fn new(ranks: Vec<usize>) -> Result<Self, SubsetError> {
        check_increasing(&ranks)?;
        Ok(Self(ranks))
    }

    /// Creates the subset `[start, end)`.
    #[must_use]
    pub fn range(start: usize, end: usize) -> Self {
        Self((start..end).collect())
    }

    /// Checks that every rank indexes into a sequence of `len` points.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetError::OutOfRange`] for the first rank `>= len`.
    pub fn check_bounds(&self, len: usize) -> Result<(), SubsetError> {
        check_bounds(&self.0, len)
    }

    /// Returns the ranks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the subset and returns its ranks.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Returns the largest rank, if any.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

/// Checks that ranks are strictly increasing.
pub(crate) fn check_increasing(ranks: &[usize]) -> Result<(), SubsetError> {
    for (position, pair) in ranks.windows(2).enumerate() {
        let [prev, next] = [pair[0], pair[1]];
        if next == prev {
            return Err(SubsetError::Duplicate { rank: next });
        }
        if next < prev {
            return Err(SubsetError::Unsorted {
                position: position + 1,
            });
        }
    }
    Ok(())
}

/// Checks that ranks index into a sequence of `len` points.
///
/// Assumes `ranks` is increasing, so only the last rank is inspected.
pub(crate) fn check_bounds(ranks: &[usize], len: usize) -> Result<(), SubsetError> {
    match ranks.last() {
        Some(&rank) if rank >= len => Err(SubsetError::OutOfRange { rank, len }),
        _ => Ok(()),
    }
}

impl Deref for Subset {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Subset {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Subset {
    type Error = SubsetError;

    fn try_from(ranks: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(ranks)
    }
}

impl From<Subset> for Vec<usize> {
    fn from(subset: Subset) -> Self {
        subset.0
    }
}

impl<'a> IntoIterator for &'a Subset {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, rank) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_ranks() {
        let subset = Subset::new(vec![0, 2, 5]).expect("increasing ranks are valid");
        assert_eq!(subset.as_slice(), &[0, 2, 5]);
        assert_eq!(subset.len(), 3);
        assert_eq!(subset.last(), Some(5));
    }

    #[test]
    fn empty_and_singleton_are_valid() {
        assert!(Subset::new(vec![]).is_ok());
        assert!(Subset::new(vec![7]).is_ok());
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Subset::new(vec![1, 3, 3]),
            Err(SubsetError::Duplicate { rank: 3 })
        );
    }

    #[test]
    fn rejects_unsorted() {
        assert_eq!(
            Subset::new(vec![0, 4, 2]),
            Err(SubsetError::Unsorted { position: 2 })
        );
    }

    #[test]
    fn bounds_are_checked_against_length() {
        let subset = Subset::new(vec![0, 3]).unwrap();
        assert!(subset.check_bounds(4).is_ok());
        assert_eq!(
            subset.check_bounds(3),
            Err(SubsetError::OutOfRange { rank: 3, len: 3 })
        );
    }

    #[test]
    fn range_covers_half_open_interval() {
        assert_eq!(Subset::range(0, 4).into_vec(), vec![0, 1, 2, 3]);
        assert!(Subset::range(2, 2).is_empty());
    }

    #[test]
    fn displays_as_list() {
        assert_eq!(Subset::new(vec![0, 3, 4]).unwrap().to_string(), "[0, 3, 4]");
        assert_eq!(Subset::default().to_string(), "[]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_rejects_invalid_ranks() {
        let subset: Subset = serde_json::from_str("[1, 4, 6]").unwrap();
        assert_eq!(subset.as_slice(), &[1, 4, 6]);
        assert_eq!(serde_json::to_string(&subset).unwrap(), "[1,4,6]");

        assert!(serde_json::from_str::<Subset>("[4, 1]").is_err());
    }
}
