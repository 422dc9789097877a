use crate::{PathfinderKind, WorldKind};
use bevy_math::IVec2;
use thiserror::Error;

/// Everything that can go wrong while solving a request. Validation errors
/// surface before the search runs; an exhausted search is not an error at
/// this level (it comes back as an empty path), but collaborators that
/// need to report it can use [CoreError::NoPath].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("start and end points are equal")]
    EndpointsCoincide,

    #[error("point {0} has no enclosing cell")]
    OutOfBounds(IVec2),

    #[error("point {0} is unsafe")]
    EndpointUnsafe(IVec2),

    #[error("pathfinder '{pathfinder}' does not support world '{world}'")]
    UnsupportedPair {
        world: WorldKind,
        pathfinder: PathfinderKind,
    },

    #[error("no path between the start and end points")]
    NoPath,

    #[error("{width}x{height} raster does not fit a single cell of {cell_size}px")]
    MalformedRaster {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}
