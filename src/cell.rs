#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::palette::{self, Rgb};
use crate::Raster;
use bevy_math::IVec2;

/// Classification of a rectangle of raster pixels.
///
/// A rectangle is [CellState::Unsafe] only when *every* pixel matches the
/// unsafe reference color, and [CellState::Safe] only when *none* does.
/// Anything in between is [CellState::Mixed], which keeps a single stray
/// unsafe pixel from disqualifying a mostly-safe cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Safe,
    Mixed,
    Unsafe,
}

impl CellState {
    /// Classify the rectangle with origin `position` and size `size` over
    /// the raster. The rectangle must lie within the raster bounds.
    #[must_use]
    pub fn of(raster: &Raster, position: IVec2, size: IVec2) -> CellState {
        let area = size.x as u32 * size.y as u32;
        let mut unsafe_pixels = 0u32;

        for y in position.y..position.y + size.y {
            for x in position.x..position.x + size.x {
                if raster.get(x as u32, y as u32) == palette::UNSAFE {
                    unsafe_pixels += 1;
                }
            }
        }

        if unsafe_pixels == area {
            CellState::Unsafe
        } else if unsafe_pixels == 0 {
            CellState::Safe
        } else {
            CellState::Mixed
        }
    }

    /// The background palette color for this state.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Rgb {
        match self {
            CellState::Safe => palette::SAFE,
            CellState::Mixed => palette::MIXED,
            CellState::Unsafe => palette::UNSAFE,
        }
    }
}

/// An axis-aligned rectangle of pixels carrying a single classification.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: IVec2,
    pub width: u32,
    pub height: u32,
    pub state: CellState,
}

impl Cell {
    /// Create a cell. Dimensions must be at least one pixel each.
    #[inline]
    #[must_use]
    pub fn new(position: IVec2, width: u32, height: u32, state: CellState) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            position,
            width,
            height,
            state,
        }
    }

    /// Determine if the given point is contained within this cell.
    /// Both bounds are closed, so points on the far edge are contained.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: IVec2) -> bool {
        let x_contains =
            self.position.x <= point.x && point.x <= self.position.x + self.width as i32;
        let y_contains =
            self.position.y <= point.y && point.y <= self.position.y + self.height as i32;
        x_contains && y_contains
    }

    /// The floor-divided midpoint of the cell.
    #[inline]
    #[must_use]
    pub fn center(&self) -> IVec2 {
        IVec2::new(
            self.position.x + self.width as i32 / 2,
            self.position.y + self.height as i32 / 2,
        )
    }

    #[inline]
    #[must_use]
    pub fn safe(&self) -> bool {
        self.state == CellState::Safe
    }

    #[inline]
    #[must_use]
    pub fn unsafe_(&self) -> bool {
        self.state == CellState::Unsafe
    }

    #[inline]
    #[must_use]
    pub fn mixed(&self) -> bool {
        self.state == CellState::Mixed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bevy_math::ivec2;

    fn cell(state: CellState) -> Cell {
        Cell::new(IVec2::ZERO, 10, 10, state)
    }

    #[test]
    fn test_contains_closed_bounds() {
        let c = cell(CellState::Safe);
        assert!(c.contains(ivec2(5, 5)));
        assert!(c.contains(ivec2(0, 5)));
        assert!(c.contains(ivec2(10, 5)));
        assert!(c.contains(ivec2(5, 0)));
        assert!(c.contains(ivec2(5, 10)));
        assert!(!c.contains(ivec2(11, 11)));
        assert!(!c.contains(ivec2(-1, -1)));
    }

    #[test]
    fn test_center() {
        assert_eq!(cell(CellState::Safe).center(), ivec2(5, 5));
        assert_eq!(
            Cell::new(ivec2(10, 10), 5, 3, CellState::Safe).center(),
            ivec2(12, 11)
        );
    }

    #[test]
    fn test_state_predicates() {
        assert!(cell(CellState::Safe).safe());
        assert!(!cell(CellState::Safe).unsafe_());
        assert!(!cell(CellState::Safe).mixed());
        assert!(cell(CellState::Unsafe).unsafe_());
        assert!(cell(CellState::Mixed).mixed());
    }

    #[test]
    fn test_of_all_safe() {
        let r = Raster::new(10, 10, palette::SAFE);
        assert_eq!(
            CellState::of(&r, IVec2::ZERO, ivec2(10, 10)),
            CellState::Safe
        );
    }

    #[test]
    fn test_of_all_unsafe() {
        let r = Raster::new(10, 10, palette::UNSAFE);
        assert_eq!(
            CellState::of(&r, IVec2::ZERO, ivec2(10, 10)),
            CellState::Unsafe
        );
    }

    #[test]
    fn test_of_mixed() {
        let mut r = Raster::new(10, 10, palette::SAFE);
        r.fill_rect(0, 0, 5, 5, palette::UNSAFE);
        assert_eq!(
            CellState::of(&r, IVec2::ZERO, ivec2(10, 10)),
            CellState::Mixed
        );
    }

    #[test]
    fn test_of_single_stray_pixel_is_mixed() {
        let mut r = Raster::new(10, 10, palette::SAFE);
        r.set(3, 7, palette::UNSAFE);
        assert_eq!(
            CellState::of(&r, IVec2::ZERO, ivec2(10, 10)),
            CellState::Mixed
        );
    }

    #[test]
    fn test_of_sub_rectangle() {
        let mut r = Raster::new(10, 10, palette::SAFE);
        r.fill_rect(0, 0, 5, 10, palette::UNSAFE);
        assert_eq!(
            CellState::of(&r, IVec2::ZERO, ivec2(5, 10)),
            CellState::Unsafe
        );
        assert_eq!(
            CellState::of(&r, ivec2(5, 0), ivec2(5, 10)),
            CellState::Safe
        );
    }
}
