use crate::{
    astar, jps, Cell, CoreError, Graph, Grid, Params, PathfinderKind, QTree, Raster, Tracer,
    World, WorldKind,
};
use bevy_math::IVec2;
use std::time::Instant;
use tracing::debug;

/// Everything the rendering collaborator needs to draw one request.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Every cell of the world decomposition, for background drawing.
    pub cells: Vec<Cell>,
    /// Cells expanded by the search, in visit order.
    pub visited: Vec<Cell>,
    /// Cells on the chosen path, goal first. Empty when no path exists.
    pub path: Vec<Cell>,
    /// Ordered waypoints in pixel coordinates, goal first.
    pub points: Vec<IVec2>,
}

impl PathResult {
    /// Whether the search reached the end point. An exhausted search is
    /// reported as a normal result with an empty path; collaborators that
    /// must surface it as an error can map this to [CoreError::NoPath].
    #[inline]
    #[must_use]
    pub fn path_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Compute a safe traversal path across `raster` between the endpoints in
/// `params`.
///
/// The single entry point of the engine: validates the request, builds the
/// world decomposition and its navigation graph, runs the selected
/// pathfinder and traces the result. Identical inputs always produce
/// identical outputs.
pub fn solve(raster: &Raster, params: &Params) -> Result<PathResult, CoreError> {
    if params.start == params.end {
        return Err(CoreError::EndpointsCoincide);
    }
    if params.cell_size == 0
        || raster.width() < params.cell_size
        || raster.height() < params.cell_size
    {
        return Err(CoreError::MalformedRaster {
            width: raster.width(),
            height: raster.height(),
            cell_size: params.cell_size,
        });
    }

    let world = match params.world {
        WorldKind::Grid => World::Grid(Grid::new(raster, params.cell_size)),
        WorldKind::QTree => World::QTree(QTree::new(raster, params.cell_size)),
    };

    let start = world
        .get(params.start)
        .ok_or(CoreError::OutOfBounds(params.start))?;
    let end = world
        .get(params.end)
        .ok_or(CoreError::OutOfBounds(params.end))?;

    if !world.cell(start).safe() {
        return Err(CoreError::EndpointUnsafe(params.start));
    }
    if !world.cell(end).safe() {
        return Err(CoreError::EndpointUnsafe(params.end));
    }

    if params.world == WorldKind::QTree && params.pathfinder == PathfinderKind::Jps {
        return Err(CoreError::UnsupportedPair {
            world: params.world,
            pathfinder: params.pathfinder,
        });
    }

    // JPS inspects obstacle neighbors for forced moves; A* gets the
    // pre-pruned graph.
    let graph = Graph::build(&world, params.pathfinder == PathfinderKind::AStar);

    let search_start = Instant::now();
    let parents = match params.pathfinder {
        PathfinderKind::AStar => astar(&graph, params.distance, start, end),
        PathfinderKind::Jps => jps(&graph, params.distance, start, end),
    };
    debug!(
        pathfinder = %params.pathfinder,
        world = %params.world,
        elapsed_ms = search_start.elapsed().as_millis() as u64,
        "search finished"
    );

    let tracer = Tracer::new(params.start, end, params.end, params.trajectory);
    let trace = tracer.backtrace(&world, &parents);
    debug!(
        visited = trace.visited.len(),
        path = trace.path.len(),
        length = trace.path_length(),
        "trace summary"
    );

    Ok(PathResult {
        cells: world.cells(),
        visited: trace.visited,
        path: trace.path,
        points: trace.points,
    })
}
