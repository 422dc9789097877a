#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pathfinder::Parents;
use crate::{Cell, Distance, ElementId, Segment, World};
use bevy_math::{ivec2, IVec2};
use std::time::Instant;
use tracing::debug;

/// How the traced waypoints are shaped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trajectory {
    /// Waypoints at the centers of the traversed cells.
    Sharp,
    /// Centers replaced by cell-boundary intersections, producing a
    /// continuous piecewise-linear path through each traversed cell.
    Smooth,
}

/// The outcome of a traced search, ready for the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceInfo {
    /// Cells expanded by the search, in visit order.
    pub visited: Vec<Cell>,
    /// Cells on the chosen path, goal first. Empty when the search failed.
    pub path: Vec<Cell>,
    /// Ordered waypoints in pixel coordinates, goal first.
    pub points: Vec<IVec2>,
}

impl TraceInfo {
    /// The length of the traced trajectory: the summed straight-line
    /// distance over consecutive waypoints. Zero when the search failed.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| Distance::Euclidean.calculate(pair[0], pair[1]))
            .sum()
    }
}

/// Reconstructs the path from a predecessor map and shapes its waypoints.
#[derive(Debug)]
pub struct Tracer {
    start_point: IVec2,
    end: ElementId,
    end_point: IVec2,
    trajectory: Trajectory,
}

impl Tracer {
    #[must_use]
    pub fn new(
        start_point: IVec2,
        end: ElementId,
        end_point: IVec2,
        trajectory: Trajectory,
    ) -> Self {
        Self {
            start_point,
            end,
            end_point,
            trajectory,
        }
    }

    /// Walk the predecessor map from the end element back to the start and
    /// build the waypoint list. A map that never reached the end yields an
    /// empty path and no waypoints; the visited cells are reported either
    /// way.
    #[must_use]
    pub fn backtrace(&self, world: &World, parents: &Parents) -> TraceInfo {
        let trace_start = Instant::now();

        let visited: Vec<Cell> = parents.keys().map(|element| *world.cell(*element)).collect();

        let mut path: Vec<Cell> = Vec::new();
        let mut current = self.end;
        while let Some(parent) = parents.get(&current) {
            path.push(*world.cell(current));
            match parent {
                Some(parent) => current = *parent,
                None => break,
            }
        }

        let points = if path.is_empty() {
            Vec::new()
        } else {
            let mut points = vec![self.end_point];
            if path.len() > 2 {
                for cell in &path[1..path.len() - 1] {
                    points.push(cell.center());
                }
            }
            points.push(self.start_point);

            match self.trajectory {
                Trajectory::Sharp => points,
                Trajectory::Smooth => self.smooth(&path, &points),
            }
        };

        debug!(
            visited = visited.len(),
            path = path.len(),
            elapsed_ms = trace_start.elapsed().as_millis() as u64,
            "trace finished"
        );

        TraceInfo {
            visited,
            path,
            points,
        }
    }

    /// Replace intermediate centers with boundary intersections: for each
    /// consecutive waypoint pair, the first of the corresponding cell's
    /// four boundary segments (N, E, S, W order) that the pair's segment
    /// crosses contributes the new waypoint.
    fn smooth(&self, path: &[Cell], points: &[IVec2]) -> Vec<IVec2> {
        let mut smooth_points = vec![self.end_point];

        for (index, pair) in points.windows(2).enumerate() {
            let trajectory = Segment::new(pair[0], pair[1]);

            for boundary in Self::boundary_segments(&path[index]) {
                if let Some(intersection) = trajectory.intersection(&boundary) {
                    smooth_points.push(intersection);
                    break;
                }
            }
        }

        smooth_points.push(self.start_point);
        smooth_points
    }

    /// The four inset edges of a cell, in N, E, S, W order.
    fn boundary_segments(cell: &Cell) -> [Segment; 4] {
        let IVec2 { x, y } = cell.position;
        let w = cell.width as i32;
        let h = cell.height as i32;

        [
            Segment::new(ivec2(x, y), ivec2(x + w - 1, y)),
            Segment::new(ivec2(x + w - 1, y), ivec2(x + w - 1, y + h - 1)),
            Segment::new(ivec2(x, y + h - 1), ivec2(x + w - 1, y + h - 1)),
            Segment::new(ivec2(x, y), ivec2(x, y + h - 1)),
        ]
    }
}
