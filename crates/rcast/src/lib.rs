#![warn(missing_docs)]

//! Ray/segment query kernel facade.
//!
//! Re-exports the public surface of the rcast member crates:
//!
//! - [`rcast_math`] - points, vectors, and the generator-backed point factory
//! - [`rcast_area`] - areas, segment intersection, combination, conversion
//! - [`rcast_grid`] - lazy voxel grid traversal
//!
//! # Example
//!
//! ```
//! use rcast::{Area3d, CombinedArea, GridTraversal, Point3, RectangularPrism, Vec3};
//!
//! let near = RectangularPrism::new(Point3::new(2.0, -1.0, -1.0), Point3::new(3.0, 1.0, 1.0)).unwrap();
//! let far = RectangularPrism::new(Point3::new(6.0, -1.0, -1.0), Point3::new(7.0, 1.0, 1.0)).unwrap();
//! let combined: CombinedArea = [far, near].into_iter().collect();
//!
//! let hit = combined
//!     .closest_intersection(&Point3::new(0.0, 0.0, 0.0), &Point3::new(10.0, 0.0, 0.0))
//!     .unwrap();
//! assert_eq!(hit.member, 1); // the nearer prism wins, not the first inserted
//! assert!((hit.hit.point.x - 2.0).abs() < 1e-12);
//!
//! let cells = GridTraversal::new(
//!     Point3::new(0.5, 0.5, 0.5),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     1.0,
//!     5,
//! )
//! .unwrap();
//! assert_eq!(cells.count(), 5);
//! ```

pub use rcast_area;
pub use rcast_grid;
pub use rcast_math;

pub use rcast_area::{
    Area3d, AreaConverter, AreaError, CombinedArea, ConvertFn, CornerFn, LineHit, MemberHit,
    PrismWrapper, RectangularPrism,
};
pub use rcast_grid::{ExactGridTraversal, GridCell, GridError, GridTraversal};
pub use rcast_math::{point_from_fn, point_is_finite, vec_is_finite, Point3, Vec3};
