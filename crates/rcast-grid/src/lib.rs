#![warn(missing_docs)]

//! Lazy voxel grid traversal for the rcast kernel.
//!
//! Given a ray and a cell size, [`GridTraversal`] enumerates the
//! integer lattice cells the ray passes through, in strictly increasing
//! distance order, starting from the cell containing the origin.
//! [`ExactGridTraversal`] walks the same cells but yields the exact
//! world-space point at which the ray crosses into each of them.
//!
//! Both cursors are finite: a hard step cap bounds every traversal
//! (near-zero direction components would otherwise make boundary
//! crossings astronomically far apart), and an optional maximum
//! distance cuts the walk short. Cursors are single-pass and fused:
//! once exhausted they yield `None` forever, and restarting requires
//! constructing a new cursor.

mod cell;
mod error;
mod traverse;

pub use cell::GridCell;
pub use error::{GridError, Result};
pub use traverse::{ExactGridTraversal, GridTraversal};
