#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bevy_math::IVec2;

/// The metric used for both step cost and heuristic, measured between cell
/// centers. Using the same metric for both keeps the heuristic admissible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Manhattan,
    Euclidean,
}

impl Distance {
    /// The distance between two points under this metric.
    #[inline]
    #[must_use]
    pub fn calculate(&self, p0: IVec2, p1: IVec2) -> f64 {
        let dx = (p0.x - p1.x) as f64;
        let dy = (p0.y - p1.y) as f64;

        match self {
            Distance::Manhattan => dx.abs() + dy.abs(),
            Distance::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Manhattan => write!(f, "manhattan"),
            Distance::Euclidean => write!(f, "euclidean"),
        }
    }
}
