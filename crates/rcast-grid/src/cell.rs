//! Integer lattice cells.

use serde::{Deserialize, Serialize};

/// One axis-aligned cube of the traversal grid, identified by the
/// integer coordinates of its most negative corner.
///
/// Indexing floors toward negative infinity: a cell with index `i` on
/// an axis covers the half-open range `[i * cell_size, (i + 1) * cell_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell index along X.
    pub x: i64,
    /// Cell index along Y.
    pub y: i64,
    /// Cell index along Z.
    pub z: i64,
}

impl GridCell {
    /// Create a cell from its three indices.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl From<GridCell> for [i64; 3] {
    fn from(cell: GridCell) -> Self {
        [cell.x, cell.y, cell.z]
    }
}
