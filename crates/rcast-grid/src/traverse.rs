//! Incremental 3D grid traversal (Amanatides & Woo style).
//!
//! The cursor keeps, per axis, the signed cell step, the distance along
//! the ray needed to cross one full cell (`t_delta`), and the distance
//! at which the ray crosses the next cell boundary (`t_max`). Each
//! advance moves along whichever axis has the smallest `t_max`.

use rcast_math::{point_is_finite, vec_is_finite, Point3, Vec3};

use crate::cell::GridCell;
use crate::error::{GridError, Result};

/// Shared cursor state for both traversal variants.
#[derive(Debug)]
struct TraversalCore {
    origin: Point3,
    /// Normalized direction, or the zero vector for a zero-length input.
    direction: Vec3,
    cell: [i64; 3],
    step: [i64; 3],
    t_max: [f64; 3],
    t_delta: [f64; 3],
    max_distance: f64,
    /// Cells this cursor may still yield; hard bound on the walk.
    remaining: usize,
    started: bool,
}

impl TraversalCore {
    fn new(origin: Point3, direction: Vec3, cell_size: f64, max_steps: usize) -> Result<Self> {
        if !point_is_finite(&origin) || !vec_is_finite(&direction) {
            return Err(GridError::NonFinite);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }

        // A zero direction never advances: the cursor yields the origin
        // cell once and terminates.
        let dir = direction.try_normalize(0.0).unwrap_or_else(Vec3::zeros);

        let mut cell = [0_i64; 3];
        let mut step = [0_i64; 3];
        let mut t_max = [f64::INFINITY; 3];
        let mut t_delta = [f64::INFINITY; 3];

        for axis in 0..3 {
            let index = (origin[axis] / cell_size).floor();
            cell[axis] = index as i64;
            let d = dir[axis];
            if d > 0.0 {
                let boundary = (index + 1.0) * cell_size;
                step[axis] = 1;
                t_max[axis] = (boundary - origin[axis]) / d;
                t_delta[axis] = cell_size / d;
            } else if d < 0.0 {
                let boundary = index * cell_size;
                step[axis] = -1;
                t_max[axis] = (boundary - origin[axis]) / d;
                t_delta[axis] = cell_size / -d;
            }
        }

        Ok(Self {
            origin,
            direction: dir,
            cell,
            step,
            t_max,
            t_delta,
            max_distance: f64::INFINITY,
            remaining: max_steps,
            started: false,
        })
    }

    fn with_max_distance(mut self, max_distance: f64) -> Result<Self> {
        if max_distance.is_nan() || max_distance < 0.0 {
            return Err(GridError::InvalidMaxDistance(max_distance));
        }
        self.max_distance = max_distance;
        Ok(self)
    }

    /// Advance to the next cell, returning it with the distance at which
    /// the ray enters it (zero for the origin cell).
    fn advance(&mut self) -> Option<(GridCell, f64)> {
        if self.remaining == 0 {
            return None;
        }
        if !self.started {
            self.started = true;
            self.remaining -= 1;
            return Some((GridCell::new(self.cell[0], self.cell[1], self.cell[2]), 0.0));
        }

        let mut axis = 0;
        if self.t_max[1] < self.t_max[axis] {
            axis = 1;
        }
        if self.t_max[2] < self.t_max[axis] {
            axis = 2;
        }
        if self.step[axis] == 0 {
            // Every axis is stalled: zero direction.
            self.remaining = 0;
            return None;
        }

        let t_cross = self.t_max[axis];
        if t_cross > self.max_distance {
            self.remaining = 0;
            return None;
        }

        self.cell[axis] += self.step[axis];
        self.t_max[axis] += self.t_delta[axis];
        self.remaining -= 1;
        Some((
            GridCell::new(self.cell[0], self.cell[1], self.cell[2]),
            t_cross,
        ))
    }
}

/// Lazy cursor over the grid cells a ray passes through.
///
/// The first element is the cell containing the ray origin; each later
/// element is entered at a strictly greater distance from the origin.
/// The cursor yields at most `max_steps` cells, stops early at the
/// optional maximum distance, and is single-pass: it cannot be
/// restarted or shared, and once it returns `None` it does so forever.
#[derive(Debug)]
pub struct GridTraversal {
    core: TraversalCore,
}

impl GridTraversal {
    /// Create a traversal from a ray, a cell edge length, and a hard
    /// cap on the number of cells yielded.
    ///
    /// The direction is normalized internally, so distances are in
    /// world units. A zero direction is accepted and yields only the
    /// origin cell. Fails on non-finite coordinates or a cell size that
    /// is not positive and finite.
    pub fn new(origin: Point3, direction: Vec3, cell_size: f64, max_steps: usize) -> Result<Self> {
        Ok(Self {
            core: TraversalCore::new(origin, direction, cell_size, max_steps)?,
        })
    }

    /// Stop yielding cells once the ray has travelled `max_distance`
    /// from its origin. Infinity (the default) means unbounded.
    pub fn with_max_distance(self, max_distance: f64) -> Result<Self> {
        Ok(Self {
            core: self.core.with_max_distance(max_distance)?,
        })
    }
}

impl Iterator for GridTraversal {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        self.core.advance().map(|(cell, _)| cell)
    }
}

impl std::iter::FusedIterator for GridTraversal {}

/// Lazy cursor over the exact points at which a ray crosses into
/// successive grid cells.
///
/// Walks the same cells as [`GridTraversal`] under the same bounds, but
/// yields the world-space crossing point for each cell; the origin cell
/// contributes the origin itself.
#[derive(Debug)]
pub struct ExactGridTraversal {
    core: TraversalCore,
}

impl ExactGridTraversal {
    /// Create an exact traversal from a ray, a cell edge length, and a
    /// hard cap on the number of points yielded.
    ///
    /// Accepts and rejects the same inputs as [`GridTraversal::new`].
    pub fn new(origin: Point3, direction: Vec3, cell_size: f64, max_steps: usize) -> Result<Self> {
        Ok(Self {
            core: TraversalCore::new(origin, direction, cell_size, max_steps)?,
        })
    }

    /// Stop yielding points once the ray has travelled `max_distance`
    /// from its origin. Infinity (the default) means unbounded.
    pub fn with_max_distance(self, max_distance: f64) -> Result<Self> {
        Ok(Self {
            core: self.core.with_max_distance(max_distance)?,
        })
    }
}

impl Iterator for ExactGridTraversal {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        let (_, t) = self.core.advance()?;
        Some(self.core.origin + t * self.core.direction)
    }
}

impl std::iter::FusedIterator for ExactGridTraversal {}
