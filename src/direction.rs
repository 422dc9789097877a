#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bevy_math::IVec2;

pub const NORTH: IVec2 = IVec2 { x: 0, y: -1 };
pub const NORTH_EAST: IVec2 = IVec2 { x: 1, y: -1 };
pub const NORTH_WEST: IVec2 = IVec2 { x: -1, y: -1 };
pub const EAST: IVec2 = IVec2 { x: 1, y: 0 };
pub const SOUTH: IVec2 = IVec2 { x: 0, y: 1 };
pub const SOUTH_EAST: IVec2 = IVec2 { x: 1, y: 1 };
pub const SOUTH_WEST: IVec2 = IVec2 { x: -1, y: 1 };
pub const WEST: IVec2 = IVec2 { x: -1, y: 0 };

/// The coarse orientation of a [Direction].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionType {
    Vertical,
    Horizontal,
    Diagonal,
}

/// A compass direction in the 2D raster plane. North points toward
/// decreasing `y` (the raster origin is at the top left).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions in canonical enumeration order. Neighbor tables and
    /// graph edges are indexed in this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    #[inline]
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    #[inline]
    pub fn iter_cardinal() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter().filter(Direction::is_cardinal)
    }

    #[inline]
    pub fn iter_diagonal() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter().filter(Direction::is_diagonal)
    }

    /// The canonical position of this direction in [Direction::ALL].
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
            Direction::NorthWest => 4,
            Direction::NorthEast => 5,
            Direction::SouthWest => 6,
            Direction::SouthEast => 7,
        }
    }

    /// Returns the unit vector for this direction.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> IVec2 {
        match self {
            Direction::North => NORTH,
            Direction::NorthEast => NORTH_EAST,
            Direction::NorthWest => NORTH_WEST,
            Direction::East => EAST,
            Direction::South => SOUTH,
            Direction::SouthEast => SOUTH_EAST,
            Direction::SouthWest => SOUTH_WEST,
            Direction::West => WEST,
        }
    }

    /// Returns the direction pointing the opposite way.
    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    #[inline]
    #[must_use]
    pub fn direction_type(&self) -> DirectionType {
        match self {
            Direction::North | Direction::South => DirectionType::Vertical,
            Direction::East | Direction::West => DirectionType::Horizontal,
            _ => DirectionType::Diagonal,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.direction_type() == DirectionType::Vertical
    }

    #[inline]
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.direction_type() == DirectionType::Horizontal
    }

    #[inline]
    #[must_use]
    pub fn is_cardinal(&self) -> bool {
        !self.is_diagonal()
    }

    #[inline]
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.direction_type() == DirectionType::Diagonal
    }

    /// Decompose a diagonal into its `(vertical, horizontal)` cardinal
    /// components. `None` for cardinal directions.
    #[inline]
    #[must_use]
    pub fn components(&self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NorthWest => Some((Direction::North, Direction::West)),
            Direction::NorthEast => Some((Direction::North, Direction::East)),
            Direction::SouthWest => Some((Direction::South, Direction::West)),
            Direction::SouthEast => Some((Direction::South, Direction::East)),
            _ => None,
        }
    }

    /// The compass direction from `from` toward `to`, judged by coordinate
    /// signs. `None` when the points coincide.
    #[must_use]
    pub fn between(from: IVec2, to: IVec2) -> Option<Direction> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        if dx != 0 && dy != 0 {
            if dx > 0 {
                Some(if dy > 0 {
                    Direction::SouthEast
                } else {
                    Direction::NorthEast
                })
            } else {
                Some(if dy > 0 {
                    Direction::SouthWest
                } else {
                    Direction::NorthWest
                })
            }
        } else if dx != 0 {
            Some(if dx > 0 {
                Direction::East
            } else {
                Direction::West
            })
        } else if dy != 0 {
            Some(if dy > 0 {
                Direction::South
            } else {
                Direction::North
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bevy_math::ivec2;

    #[test]
    fn test_opposite_is_involution() {
        for d in Direction::iter() {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    }

    #[test]
    fn test_type_partition() {
        let vertical: Vec<_> = Direction::iter().filter(Direction::is_vertical).collect();
        let horizontal: Vec<_> = Direction::iter().filter(Direction::is_horizontal).collect();
        let diagonal: Vec<_> = Direction::iter().filter(Direction::is_diagonal).collect();

        assert_eq!(vertical, vec![Direction::North, Direction::South]);
        assert_eq!(horizontal, vec![Direction::East, Direction::West]);
        assert_eq!(diagonal.len(), 4);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_components() {
        assert_eq!(
            Direction::NorthEast.components(),
            Some((Direction::North, Direction::East))
        );
        assert_eq!(
            Direction::SouthWest.components(),
            Some((Direction::South, Direction::West))
        );
        assert_eq!(Direction::North.components(), None);
    }

    #[test]
    fn test_between() {
        let origin = IVec2::ZERO;
        assert_eq!(
            Direction::between(origin, ivec2(0, -5)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(origin, ivec2(5, 0)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::between(origin, ivec2(0, 5)),
            Some(Direction::South)
        );
        assert_eq!(
            Direction::between(origin, ivec2(-5, 0)),
            Some(Direction::West)
        );
        assert_eq!(
            Direction::between(origin, ivec2(3, 3)),
            Some(Direction::SouthEast)
        );
        assert_eq!(
            Direction::between(origin, ivec2(-3, -3)),
            Some(Direction::NorthWest)
        );
        assert_eq!(Direction::between(origin, origin), None);
    }

    #[test]
    fn test_unit_matches_between() {
        for d in Direction::iter() {
            assert_eq!(Direction::between(IVec2::ZERO, d.unit()), Some(d));
        }
    }
}
