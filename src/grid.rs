use crate::{Cell, CellState, Direction, ElementId, Raster};
use bevy_math::{ivec2, IVec2};
use std::time::Instant;
use tracing::debug;

/// A uniform decomposition of the raster into square cells of `cell_size`
/// pixels. Trailing pixels that do not fill a whole cell are discarded.
///
/// Columns index the x axis and rows the y axis: `columns = width /
/// cell_size`, `rows = height / cell_size`. Elements are stored
/// column-major, matching the order they are classified in.
#[derive(Debug)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cell_size: u32,
    elements: Vec<Cell>,
}

impl Grid {
    /// Decompose and classify the raster. `cell_size` must be ≥ 1.
    #[must_use]
    pub fn new(raster: &Raster, cell_size: u32) -> Self {
        debug_assert!(cell_size >= 1);
        let build_start = Instant::now();

        let columns = raster.width() / cell_size;
        let rows = raster.height() / cell_size;
        let size = ivec2(cell_size as i32, cell_size as i32);

        let mut elements = Vec::with_capacity((columns * rows) as usize);
        for i in 0..columns {
            for j in 0..rows {
                let position = ivec2((i * cell_size) as i32, (j * cell_size) as i32);
                let state = CellState::of(raster, position, size);
                elements.push(Cell::new(position, cell_size, cell_size, state));
            }
        }

        debug!(
            columns,
            rows,
            elapsed_ms = build_start.elapsed().as_millis() as u64,
            "grid built"
        );

        Self {
            columns,
            rows,
            cell_size,
            elements,
        }
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// All elements in column-major construction order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementId> {
        (0..self.elements.len()).map(ElementId).collect()
    }

    /// The logical `(column, row)` index of an element.
    #[inline]
    #[must_use]
    pub fn index(&self, element: ElementId) -> (u32, u32) {
        let id = element.0 as u32;
        (id / self.rows, id % self.rows)
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, element: ElementId) -> &Cell {
        &self.elements[element.0]
    }

    /// The element whose cell contains the given pixel, or `None` when the
    /// pixel falls outside the decomposed area.
    #[must_use]
    pub fn get(&self, point: IVec2) -> Option<ElementId> {
        if point.x < 0 || point.y < 0 {
            return None;
        }

        let i = point.x as u32 / self.cell_size;
        let j = point.y as u32 / self.cell_size;

        if i < self.columns && j < self.rows {
            Some(self.id(i, j))
        } else {
            None
        }
    }

    /// The bordering elements in the given direction: zero or one.
    #[must_use]
    pub fn neighbours(&self, element: ElementId, direction: Direction) -> Vec<ElementId> {
        self.neighbour(element, direction).into_iter().collect()
    }

    /// The single bordering element in the given direction, if the index
    /// offset stays inside the grid.
    #[must_use]
    pub fn neighbour(&self, element: ElementId, direction: Direction) -> Option<ElementId> {
        let (i, j) = self.index(element);

        match direction {
            Direction::North => (j > 0).then(|| self.id(i, j - 1)),
            Direction::East => (i < self.columns - 1).then(|| self.id(i + 1, j)),
            Direction::South => (j < self.rows - 1).then(|| self.id(i, j + 1)),
            Direction::West => (i > 0).then(|| self.id(i - 1, j)),
            Direction::NorthWest => (i > 0 && j > 0).then(|| self.id(i - 1, j - 1)),
            Direction::NorthEast => {
                (i < self.columns - 1 && j > 0).then(|| self.id(i + 1, j - 1))
            }
            Direction::SouthWest => {
                (i > 0 && j < self.rows - 1).then(|| self.id(i - 1, j + 1))
            }
            Direction::SouthEast => {
                (i < self.columns - 1 && j < self.rows - 1).then(|| self.id(i + 1, j + 1))
            }
        }
    }

    #[inline]
    fn id(&self, i: u32, j: u32) -> ElementId {
        ElementId((i * self.rows + j) as usize)
    }
}
