#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Distance, Trajectory};
use bevy_math::IVec2;

/// The decomposition strategy for a request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldKind {
    #[default]
    Grid,
    QTree,
}

/// The pathfinding algorithm for a request. JPS is specialized to the
/// uniform grid; the orchestrator rejects it for quadtrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathfinderKind {
    AStar,
    Jps,
}

impl std::fmt::Display for WorldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldKind::Grid => write!(f, "grid"),
            WorldKind::QTree => write!(f, "qtree"),
        }
    }
}

impl std::fmt::Display for PathfinderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathfinderKind::AStar => write!(f, "astar"),
            PathfinderKind::Jps => write!(f, "jps"),
        }
    }
}

/// The parameter bundle of one request.
///
/// `pathfinder`, `distance` and the endpoints have no defaults and must be
/// supplied; everything else defaults as documented. The `*_size` fields
/// are visual-only and passed through to the rendering collaborator
/// untouched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    #[cfg_attr(feature = "serde", serde(default))]
    pub world: WorldKind,
    pub pathfinder: PathfinderKind,
    pub distance: Distance,
    #[cfg_attr(feature = "serde", serde(default = "defaults::trajectory"))]
    pub trajectory: Trajectory,
    /// Grid cell edge, or quadtree minimum leaf edge, in pixels.
    #[cfg_attr(feature = "serde", serde(default = "defaults::cell_size"))]
    pub cell_size: u32,
    pub start: IVec2,
    pub end: IVec2,
    #[cfg_attr(feature = "serde", serde(default = "defaults::border_size"))]
    pub border_size: u32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::trajectory_size"))]
    pub trajectory_size: u32,
    #[cfg_attr(feature = "serde", serde(default = "defaults::point_size"))]
    pub point_size: u32,
}

impl Params {
    /// Parameters with the defaults filled in: a grid world of 50px cells
    /// and a smooth trajectory.
    #[must_use]
    pub fn new(
        pathfinder: PathfinderKind,
        distance: Distance,
        start: IVec2,
        end: IVec2,
    ) -> Self {
        Self {
            world: WorldKind::Grid,
            pathfinder,
            distance,
            trajectory: defaults::trajectory(),
            cell_size: defaults::cell_size(),
            start,
            end,
            border_size: defaults::border_size(),
            trajectory_size: defaults::trajectory_size(),
            point_size: defaults::point_size(),
        }
    }
}

mod defaults {
    use crate::Trajectory;

    pub fn trajectory() -> Trajectory {
        Trajectory::Smooth
    }

    pub fn cell_size() -> u32 {
        50
    }

    pub fn border_size() -> u32 {
        1
    }

    pub fn trajectory_size() -> u32 {
        5
    }

    pub fn point_size() -> u32 {
        10
    }
}
