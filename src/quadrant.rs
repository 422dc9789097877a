#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A child slot of a quadtree node, in the fixed subdivision order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in subdivision order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline]
    #[must_use]
    pub fn from_value(value: u8) -> Option<Quadrant> {
        match value {
            0 => Some(Quadrant::NorthWest),
            1 => Some(Quadrant::NorthEast),
            2 => Some(Quadrant::SouthWest),
            3 => Some(Quadrant::SouthEast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Quadrant;

    #[test]
    fn test_from_value_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_value(q as u8), Some(q));
        }
        assert_eq!(Quadrant::from_value(4), None);
    }
}
