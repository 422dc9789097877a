use crate::pathfinder::{center_distance, OpenList, Parents};
use crate::{Distance, ElementId, Graph};
use fxhash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// Best-first search over a pre-pruned graph (`only_safe = true`), keyed
/// on `f = g + h` with the metric used for both cost and heuristic.
///
/// Returns the predecessor map of every expanded vertex; the path is
/// reconstructed from it by the tracer. When the open set empties without
/// reaching `end`, the map simply lacks the `end` key.
#[must_use]
pub fn astar(graph: &Graph, distance: Distance, start: ElementId, end: ElementId) -> Parents {
    let search_start = Instant::now();

    let mut open = OpenList::new();
    let mut best: FxHashMap<ElementId, f64> = FxHashMap::default();
    let mut parents = Parents::default();

    open.push(0.0, 0.0, start);
    best.insert(start, 0.0);
    parents.insert(start, None);

    while let Some((current, cost)) = open.pop() {
        if current == end {
            break;
        }
        if best.get(&current).is_some_and(|b| cost > *b) {
            // Superseded by a cheaper re-insertion.
            continue;
        }

        for neighbour in graph.neighbours(current) {
            let tentative = cost + center_distance(graph, distance, current, neighbour);

            let improves = match best.get(&neighbour) {
                Some(known) => tentative < *known,
                None => true,
            };
            if improves {
                best.insert(neighbour, tentative);
                parents.insert(neighbour, Some(current));
                open.push(
                    tentative + center_distance(graph, distance, neighbour, end),
                    tentative,
                    neighbour,
                );
            }
        }
    }

    debug!(
        expanded = parents.len(),
        reached = parents.contains_key(&end),
        elapsed_ms = search_start.elapsed().as_millis() as u64,
        "astar finished"
    );

    parents
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{palette, Grid, Raster, World};
    use bevy_math::ivec2;

    fn graph_of(raster: &Raster) -> (World, Graph) {
        let world = World::Grid(Grid::new(raster, 10));
        let graph = Graph::build(&world, true);
        (world, graph)
    }

    #[test]
    fn test_direct_neighbour() {
        let raster = Raster::new(20, 10, palette::SAFE);
        let (world, graph) = graph_of(&raster);
        let start = world.get(ivec2(5, 5)).unwrap();
        let end = world.get(ivec2(15, 5)).unwrap();

        let parents = astar(&graph, Distance::Euclidean, start, end);
        assert_eq!(parents.get(&end), Some(&Some(start)));
        assert_eq!(parents.get(&start), Some(&None));
    }

    #[test]
    fn test_no_path_leaves_end_unreached() {
        let mut raster = Raster::new(30, 10, palette::SAFE);
        raster.fill_rect(10, 0, 10, 10, palette::UNSAFE);
        let (world, graph) = graph_of(&raster);
        let start = world.get(ivec2(5, 5)).unwrap();
        let end = world.get(ivec2(25, 5)).unwrap();

        let parents = astar(&graph, Distance::Euclidean, start, end);
        assert!(!parents.contains_key(&end));
    }

    #[test]
    fn test_prefers_diagonal_under_euclidean() {
        let raster = Raster::new(30, 30, palette::SAFE);
        let (world, graph) = graph_of(&raster);
        let start = world.get(ivec2(5, 5)).unwrap();
        let end = world.get(ivec2(25, 25)).unwrap();

        let parents = astar(&graph, Distance::Euclidean, start, end);
        let middle = world.get(ivec2(15, 15)).unwrap();
        assert_eq!(parents.get(&end), Some(&Some(middle)));
        assert_eq!(parents.get(&middle), Some(&Some(start)));
    }

    #[test]
    fn test_detours_around_obstacle() {
        let mut raster = Raster::new(30, 30, palette::SAFE);
        raster.fill_rect(10, 0, 10, 20, palette::UNSAFE);
        let (world, graph) = graph_of(&raster);
        let start = world.get(ivec2(5, 5)).unwrap();
        let end = world.get(ivec2(25, 5)).unwrap();

        let parents = astar(&graph, Distance::Euclidean, start, end);
        assert!(parents.contains_key(&end));

        // The only corridor is the bottom row.
        let bottom_middle = world.get(ivec2(15, 25)).unwrap();
        assert!(parents.contains_key(&bottom_middle));
    }
}
