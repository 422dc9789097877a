use crate::{Cell, Direction, Grid, QTree};
use bevy_math::IVec2;

/// A handle onto a single world element: a flat index for grid cells, an
/// arena index for quadtree leaves. Ids are only meaningful within the
/// world that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// A decomposition of the raster into classified cells.
///
/// Both variants answer the same three questions: which elements exist,
/// which element encloses a pixel, and which elements border an element in
/// a given direction. The graph builder and the tracer only ever talk to
/// this interface; pathfinders consume the graph built from it.
#[derive(Debug)]
pub enum World {
    Grid(Grid),
    QTree(QTree),
}

impl World {
    /// All elements in deterministic construction order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementId> {
        match self {
            World::Grid(grid) => grid.elements(),
            World::QTree(qtree) => qtree.elements(),
        }
    }

    /// The element enclosing the given pixel, or `None` outside the world.
    #[inline]
    #[must_use]
    pub fn get(&self, point: IVec2) -> Option<ElementId> {
        match self {
            World::Grid(grid) => grid.get(point),
            World::QTree(qtree) => qtree.get(point),
        }
    }

    /// The elements bordering `element` on the given side. Grids yield zero
    /// or one; quadtrees may yield several per cardinal direction.
    #[must_use]
    pub fn neighbours(&self, element: ElementId, direction: Direction) -> Vec<ElementId> {
        match self {
            World::Grid(grid) => grid.neighbours(element, direction),
            World::QTree(qtree) => qtree.neighbours(element, direction),
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, element: ElementId) -> &Cell {
        match self {
            World::Grid(grid) => grid.cell(element),
            World::QTree(qtree) => qtree.cell(element),
        }
    }

    /// Every cell of the decomposition, for background rendering.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.elements()
            .into_iter()
            .map(|element| *self.cell(element))
            .collect()
    }
}
