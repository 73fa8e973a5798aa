use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{Geometry, Line, OrderingError, ParetoFront};

/// The kind of geometry a point sequence lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Points on the real line.
    #[cfg_attr(feature = "serde", serde(rename = "1d"))]
    Line,

    /// Non-dominated points of a bi-objective problem.
    #[cfg_attr(feature = "serde", serde(rename = "pareto2d"))]
    Pareto2d,
}

/// A variant name other than `"1d"` or `"pareto2d"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown variant {0:?}, expected \"1d\" or \"pareto2d\"")]
pub struct UnknownVariant(pub String);

impl Variant {
    /// Returns the short tag used to name this variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "1d",
            Self::Pareto2d => "pareto2d",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Self::Line),
            "pareto2d" => Ok(Self::Pareto2d),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point sequence whose variant is chosen at runtime.
///
/// Delegates every [`Geometry`] method to the wrapped variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointSequence<'a> {
    Line(Line<'a>),
    Pareto(ParetoFront<'a>),
}

impl<'a> PointSequence<'a> {
    /// Creates a 1-D sequence.
    #[must_use]
    pub fn line(xs: &'a [f64]) -> Self {
        Self::Line(Line::new(xs))
    }

    /// Creates a 2-D Pareto front sequence.
    #[must_use]
    pub fn pareto(points: &'a [[f64; 2]]) -> Self {
        Self::Pareto(ParetoFront::new(points))
    }

    /// Returns the variant of this sequence.
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Line(_) => Variant::Line,
            Self::Pareto(_) => Variant::Pareto2d,
        }
    }
}

impl<'a> From<Line<'a>> for PointSequence<'a> {
    fn from(line: Line<'a>) -> Self {
        Self::Line(line)
    }
}

impl<'a> From<ParetoFront<'a>> for PointSequence<'a> {
    fn from(front: ParetoFront<'a>) -> Self {
        Self::Pareto(front)
    }
}

impl Geometry for PointSequence<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Line(line) => line.len(),
            Self::Pareto(front) => front.len(),
        }
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        match self {
            Self::Line(line) => line.distance(i, j),
            Self::Pareto(front) => front.distance(i, j),
        }
    }

    fn validate(&self) -> Result<(), OrderingError> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Pareto(front) => front.validate(),
        }
    }
}
