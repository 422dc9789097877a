use crate::{Direction, ElementId, World};
use bevy_math::IVec2;
use fxhash::FxHasher;
use indexmap::IndexMap;
use std::hash::BuildHasherDefault;
use std::time::Instant;
use tracing::debug;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// A world element materialized into the navigation graph: its obstacle
/// bit, its cell center, and its successors per direction.
#[derive(Debug, Clone)]
pub struct Vertex {
    obstacle: bool,
    center: IVec2,
    edges: [Vec<ElementId>; 8],
}

/// A direction-indexed adjacency structure over world elements.
///
/// Edges preserve the world's enumeration order: destinations are listed
/// per direction in the order the world reported them, and directions in
/// the canonical [Direction::ALL] order. Identical worlds therefore always
/// produce identical graphs, which the determinism guarantee rests on.
#[derive(Debug)]
pub struct Graph {
    vertices: FxIndexMap<ElementId, Vertex>,
}

impl Graph {
    /// Materialize the adjacency of `world`. With `only_safe`, non-safe
    /// destinations are dropped from the edge lists; A* consumes such a
    /// pre-pruned graph, while JPS needs to see obstacle neighbors to
    /// detect forced moves.
    #[must_use]
    pub fn build(world: &World, only_safe: bool) -> Graph {
        let build_start = Instant::now();
        let mut vertices = FxIndexMap::default();

        for element in world.elements() {
            let mut edges: [Vec<ElementId>; 8] = Default::default();

            for direction in Direction::iter() {
                let mut destinations = world.neighbours(element, direction);
                if only_safe {
                    destinations.retain(|destination| world.cell(*destination).safe());
                }
                edges[direction.index()] = destinations;
            }

            let cell = world.cell(element);
            vertices.insert(
                element,
                Vertex {
                    obstacle: !cell.safe(),
                    center: cell.center(),
                    edges,
                },
            );
        }

        debug!(
            vertices = vertices.len(),
            only_safe,
            elapsed_ms = build_start.elapsed().as_millis() as u64,
            "graph built"
        );

        Graph { vertices }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.vertices.contains_key(&element)
    }

    /// Whether the element's cell is fully traversable. Mixed cells count
    /// as obstacles.
    #[inline]
    #[must_use]
    pub fn is_safe(&self, element: ElementId) -> bool {
        self.vertices
            .get(&element)
            .is_some_and(|vertex| !vertex.obstacle)
    }

    /// The cell center of the element, for cost and heuristic evaluation.
    #[inline]
    #[must_use]
    pub fn center(&self, element: ElementId) -> IVec2 {
        self.vertices[&element].center
    }

    /// The first successor in the given direction, if any.
    #[inline]
    #[must_use]
    pub fn neighbour(&self, element: ElementId, direction: Direction) -> Option<ElementId> {
        self.vertices
            .get(&element)
            .and_then(|vertex| vertex.edges[direction.index()].first().copied())
    }

    /// All successors in the given direction, in insertion order.
    #[inline]
    #[must_use]
    pub fn neighbours_in(&self, element: ElementId, direction: Direction) -> &[ElementId] {
        &self.vertices[&element].edges[direction.index()]
    }

    /// All successors over every direction, in canonical direction order.
    #[inline]
    pub fn neighbours(&self, element: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.vertices[&element].edges.iter().flatten().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{palette, Grid, QTree, Raster};
    use bevy_math::ivec2;

    fn grid_world() -> World {
        let mut raster = Raster::new(30, 30, palette::SAFE);
        raster.fill_rect(10, 10, 10, 10, palette::UNSAFE);
        World::Grid(Grid::new(&raster, 10))
    }

    #[test]
    fn test_vertex_per_element() {
        let world = grid_world();
        let graph = Graph::build(&world, false);
        assert_eq!(graph.len(), 9);
        for element in world.elements() {
            assert!(graph.contains(element));
        }
    }

    #[test]
    fn test_obstacle_bit() {
        let world = grid_world();
        let graph = Graph::build(&world, false);

        let blocked = world.get(ivec2(15, 15)).unwrap();
        let open = world.get(ivec2(5, 5)).unwrap();
        assert!(!graph.is_safe(blocked));
        assert!(graph.is_safe(open));
    }

    #[test]
    fn test_only_safe_drops_obstacle_destinations() {
        let world = grid_world();
        let blocked = world.get(ivec2(15, 15)).unwrap();

        let full = Graph::build(&world, false);
        let corner = world.get(ivec2(5, 5)).unwrap();
        assert_eq!(full.neighbour(corner, Direction::SouthEast), Some(blocked));

        let pruned = Graph::build(&world, true);
        assert_eq!(pruned.neighbour(corner, Direction::SouthEast), None);
        assert!(pruned.neighbours(corner).all(|n| pruned.is_safe(n)));
    }

    #[test]
    fn test_neighbour_enumeration_order() {
        let world = grid_world();
        let graph = Graph::build(&world, false);
        let middle = world.get(ivec2(15, 15)).unwrap();

        let neighbours: Vec<_> = graph.neighbours(middle).collect();
        let expected: Vec<_> = Direction::iter()
            .filter_map(|d| graph.neighbour(middle, d))
            .collect();
        assert_eq!(neighbours, expected);
        assert_eq!(neighbours.len(), 8);
    }

    #[test]
    fn test_qtree_multiple_neighbours_per_direction() {
        let mut raster = Raster::new(64, 64, palette::SAFE);
        raster.fill_rect(0, 32, 16, 16, palette::UNSAFE);
        let world = World::QTree(QTree::new(&raster, 16));
        let graph = Graph::build(&world, false);

        let big_nw = world.get(ivec2(0, 0)).unwrap();
        assert_eq!(graph.neighbours_in(big_nw, Direction::South).len(), 2);
    }

    #[test]
    fn test_center_matches_cell() {
        let world = grid_world();
        let graph = Graph::build(&world, false);
        for element in world.elements() {
            assert_eq!(graph.center(element), world.cell(element).center());
        }
    }
}
