use crate::{Cell, CellState, Direction, ElementId, Locator, Quadrant, Raster};
use bevy_math::{ivec2, IVec2};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::time::Instant;
use tracing::debug;

/// A node of a [QTree]. Parent and child links are arena indices, so the
/// tree is navigable in both directions without reference cycles.
#[derive(Debug, Clone)]
pub struct QNode {
    cell: Cell,
    locator: Locator,
    parent: Option<ElementId>,
    children: Option<[ElementId; 4]>,
}

impl QNode {
    #[inline]
    #[must_use]
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// The locator code identifying this node: the sequence of child slots
    /// from the root.
    #[inline]
    #[must_use]
    pub fn locator(&self) -> Locator {
        self.locator
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<&[ElementId; 4]> {
        self.children.as_ref()
    }

    /// Leaves don't have children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

impl PartialEq for QNode {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
    }
}

impl Eq for QNode {}

impl Hash for QNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
    }
}

/// A region quadtree over the raster. The root covers the whole image and
/// only `Mixed` regions are subdivided, down to a minimum leaf edge of
/// `min_size` pixels.
///
/// Nodes live in an arena with the root at index zero; children are pushed
/// in `[NW, NE, SW, SE]` order, so depth-first leaf enumeration is
/// deterministic. Remainder pixels of odd subdivisions accumulate in the
/// east and south children.
#[derive(Debug)]
pub struct QTree {
    nodes: Vec<QNode>,
    min_size: u32,
}

const ROOT: ElementId = ElementId(0);

impl QTree {
    /// Decompose and classify the raster. `min_size` must be ≥ 1.
    #[must_use]
    pub fn new(raster: &Raster, min_size: u32) -> Self {
        debug_assert!(min_size >= 1);
        let build_start = Instant::now();

        let position = IVec2::ZERO;
        let size = ivec2(raster.width() as i32, raster.height() as i32);
        let root = QNode {
            cell: Cell::new(
                position,
                raster.width(),
                raster.height(),
                CellState::of(raster, position, size),
            ),
            locator: Locator::ROOT,
            parent: None,
            children: None,
        };

        let mut qtree = Self {
            nodes: vec![root],
            min_size,
        };
        qtree.divide(raster, ROOT);

        debug!(
            nodes = qtree.nodes.len(),
            leaves = qtree.elements().len(),
            elapsed_ms = build_start.elapsed().as_millis() as u64,
            "quadtree built"
        );

        qtree
    }

    #[inline]
    #[must_use]
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    #[inline]
    #[must_use]
    pub fn node(&self, element: ElementId) -> &QNode {
        &self.nodes[element.0]
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, element: ElementId) -> &Cell {
        &self.nodes[element.0].cell
    }

    /// All leaves in depth-first order (NW→SE child order).
    #[must_use]
    pub fn elements(&self) -> Vec<ElementId> {
        let mut leaves = Vec::new();
        self.collect_leaves(ROOT, &mut leaves);
        leaves
    }

    /// The leaf whose cell contains the given point, or `None` outside the
    /// root. On shared cell boundaries the first containing child in
    /// NW→SE order wins, which keeps lookups deterministic.
    #[must_use]
    pub fn get(&self, point: IVec2) -> Option<ElementId> {
        if !self.nodes[ROOT.0].cell.contains(point) {
            return None;
        }

        let mut id = ROOT;
        loop {
            match self.nodes[id.0].children {
                None => return Some(id),
                Some(children) => {
                    id = children
                        .into_iter()
                        .find(|child| self.nodes[child.0].cell.contains(point))?;
                }
            }
        }
    }

    /// The leaves bordering `element` on the given side: all
    /// border-adjacent leaves for cardinal directions (BFS order), at most
    /// one corner leaf for diagonals.
    #[must_use]
    pub fn neighbours(&self, element: ElementId, direction: Direction) -> Vec<ElementId> {
        if direction.is_diagonal() {
            return self.diagonal_neighbour(element, direction).into_iter().collect();
        }

        let equal_or_greater = self.equal_or_greater_neighbour(element, direction);
        self.smaller_neighbours(equal_or_greater, direction)
    }

    fn divide(&mut self, raster: &Raster, id: ElementId) {
        let cell = self.nodes[id.0].cell;
        if !cell.mixed() {
            return;
        }

        let w = cell.width / 2;
        let h = cell.height / 2;
        if w < self.min_size || h < self.min_size {
            return;
        }

        let mut children = [ROOT; 4];
        for quadrant in Quadrant::ALL {
            let child_cell = Self::child_cell(raster, &cell, w, h, quadrant);
            let child = ElementId(self.nodes.len());
            self.nodes.push(QNode {
                cell: child_cell,
                locator: self.nodes[id.0].locator.append(quadrant),
                parent: Some(id),
                children: None,
            });
            children[quadrant as usize] = child;
        }
        self.nodes[id.0].children = Some(children);

        for child in children {
            self.divide(raster, child);
        }
    }

    fn child_cell(raster: &Raster, parent: &Cell, w: u32, h: u32, quadrant: Quadrant) -> Cell {
        let IVec2 { x, y } = parent.position;
        // Remainder pixels are absorbed into the east and south children.
        let (position, width, height) = match quadrant {
            Quadrant::NorthWest => (ivec2(x, y), w, h),
            Quadrant::NorthEast => (ivec2(x + w as i32, y), w + parent.width % 2, h),
            Quadrant::SouthWest => (ivec2(x, y + h as i32), w, h + parent.height % 2),
            Quadrant::SouthEast => (
                ivec2(x + w as i32, y + h as i32),
                w + parent.width % 2,
                h + parent.height % 2,
            ),
        };

        let state = CellState::of(raster, position, ivec2(width as i32, height as i32));
        Cell::new(position, width, height, state)
    }

    fn collect_leaves(&self, id: ElementId, leaves: &mut Vec<ElementId>) {
        match self.nodes[id.0].children {
            None => leaves.push(id),
            Some(children) => {
                for child in children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// The neighbour on the given side whose size is equal to or greater
    /// than `element`: a mirrored sibling when one exists at the same
    /// parent, otherwise found by ascending to a common ancestor and
    /// descending into mirror children.
    fn equal_or_greater_neighbour(
        &self,
        element: ElementId,
        direction: Direction,
    ) -> Option<ElementId> {
        debug_assert!(direction.is_cardinal());

        let parent = self.nodes[element.0].parent?;
        let slot = self
            .nodes[element.0]
            .locator
            .tail()
            .expect("non-root node carries a child slot");

        if !Self::touches_side(slot, direction) {
            return Some(self.child(parent, Self::mirror(slot, direction)));
        }

        let next = self.equal_or_greater_neighbour(parent, direction)?;
        if self.nodes[next.0].is_leaf() {
            return Some(next);
        }
        Some(self.child(next, Self::mirror(slot, direction)))
    }

    /// Breadth-first descent of the equal-or-greater candidate, collecting
    /// the leaves that border the query element on the facing side.
    fn smaller_neighbours(
        &self,
        candidate: Option<ElementId>,
        direction: Direction,
    ) -> Vec<ElementId> {
        let mut neighbours = Vec::new();
        let mut candidates = VecDeque::new();
        candidates.extend(candidate);

        while let Some(candidate) = candidates.pop_front() {
            match self.nodes[candidate.0].children {
                None => neighbours.push(candidate),
                Some(children) => {
                    let (first, second) = Self::facing_children(direction);
                    candidates.push_back(children[first as usize]);
                    candidates.push_back(children[second as usize]);
                }
            }
        }

        neighbours
    }

    /// The single leaf containing the point just outside the corner of
    /// `element` in the requested diagonal direction.
    fn diagonal_neighbour(&self, element: ElementId, direction: Direction) -> Option<ElementId> {
        let cell = &self.nodes[element.0].cell;
        let (x, y) = (cell.position.x, cell.position.y);
        let (w, h) = (cell.width as i32, cell.height as i32);

        let point = match direction {
            Direction::NorthWest => ivec2(x - 1, y - 1),
            Direction::NorthEast => ivec2(x + w, y - 1),
            Direction::SouthWest => ivec2(x - 1, y + h),
            Direction::SouthEast => ivec2(x + w, y + h),
            _ => return None,
        };

        self.get(point)
    }

    #[inline]
    fn child(&self, parent: ElementId, quadrant: Quadrant) -> ElementId {
        self.nodes[parent.0]
            .children
            .expect("descended node has children")[quadrant as usize]
    }

    /// Does the slot lie on the side of its parent facing `direction`?
    #[inline]
    fn touches_side(slot: Quadrant, direction: Direction) -> bool {
        match direction {
            Direction::North => matches!(slot, Quadrant::NorthWest | Quadrant::NorthEast),
            Direction::East => matches!(slot, Quadrant::NorthEast | Quadrant::SouthEast),
            Direction::South => matches!(slot, Quadrant::SouthWest | Quadrant::SouthEast),
            Direction::West => matches!(slot, Quadrant::NorthWest | Quadrant::SouthWest),
            _ => false,
        }
    }

    /// Reflect a slot across the axis perpendicular to `direction`.
    #[inline]
    fn mirror(slot: Quadrant, direction: Direction) -> Quadrant {
        match direction {
            Direction::North | Direction::South => match slot {
                Quadrant::NorthWest => Quadrant::SouthWest,
                Quadrant::NorthEast => Quadrant::SouthEast,
                Quadrant::SouthWest => Quadrant::NorthWest,
                Quadrant::SouthEast => Quadrant::NorthEast,
            },
            _ => match slot {
                Quadrant::NorthWest => Quadrant::NorthEast,
                Quadrant::NorthEast => Quadrant::NorthWest,
                Quadrant::SouthWest => Quadrant::SouthEast,
                Quadrant::SouthEast => Quadrant::SouthWest,
            },
        }
    }

    /// The two children of an internal node that border the side facing
    /// *toward* the query element (opposite the travel direction).
    #[inline]
    fn facing_children(direction: Direction) -> (Quadrant, Quadrant) {
        match direction {
            Direction::North => (Quadrant::SouthWest, Quadrant::SouthEast),
            Direction::East => (Quadrant::NorthWest, Quadrant::SouthWest),
            Direction::South => (Quadrant::NorthWest, Quadrant::NorthEast),
            _ => (Quadrant::NorthEast, Quadrant::SouthEast),
        }
    }
}
