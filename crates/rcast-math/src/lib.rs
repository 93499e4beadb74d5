#![warn(missing_docs)]

//! Math types for the rcast ray query kernel.
//!
//! Thin wrappers around nalgebra providing the domain types shared by
//! the area and grid crates: points, vectors, a generator-backed point
//! factory, and finite-component checks used by constructors that must
//! reject NaN and infinite coordinates up front.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Build a point by drawing three components from a generator.
///
/// The generator is called exactly three times, in x, y, z order.
pub fn point_from_fn(mut generator: impl FnMut() -> f64) -> Point3 {
    let x = generator();
    let y = generator();
    let z = generator();
    Point3::new(x, y, z)
}

/// True if every component of the point is finite (not NaN or infinite).
pub fn point_is_finite(p: &Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// True if every component of the vector is finite (not NaN or infinite).
pub fn vec_is_finite(v: &Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
