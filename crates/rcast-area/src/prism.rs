//! Axis-aligned rectangular prisms: owned corners or borrowed accessors.

use rcast_math::{point_is_finite, Point3};

use crate::area::{Area3d, LineHit};
use crate::error::{AreaError, Result};

/// An axis-aligned rectangular prism owning its two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularPrism {
    min: Point3,
    max: Point3,
}

impl RectangularPrism {
    /// Create a prism from two opposite corners.
    ///
    /// Corners may be given in any order; they are normalized so that
    /// `min <= max` holds per component. Fails if any component is NaN
    /// or infinite.
    pub fn new(a: Point3, b: Point3) -> Result<Self> {
        for corner in [a, b] {
            if !point_is_finite(&corner) {
                return Err(AreaError::NonFiniteCorner {
                    x: corner.x,
                    y: corner.y,
                    z: corner.z,
                });
            }
        }
        let (min, max) = normalize_corners(a, b);
        Ok(Self { min, max })
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3 {
        self.max
    }
}

impl Area3d for RectangularPrism {
    fn line_intersection(&self, start: &Point3, end: &Point3) -> Option<LineHit> {
        segment_slab_entry(&self.min, &self.max, start, end)
    }
}

/// Accessor returning one corner of a wrapped object's bounding volume.
pub type CornerFn<T> = fn(&T) -> Point3;

/// A rectangular prism reading its corners from an externally owned
/// object through a pair of accessor functions.
///
/// The wrapper borrows the host and never copies its state: both
/// accessors are re-invoked on every query, so the wrapper always sees
/// the host's current geometry. The borrow guarantees the host outlives
/// the wrapper.
pub struct PrismWrapper<'a, T> {
    host: &'a T,
    min_fn: CornerFn<T>,
    max_fn: CornerFn<T>,
}

impl<'a, T> PrismWrapper<'a, T> {
    /// Wrap `host` with accessors for its min and max corners.
    ///
    /// Accessor output is normalized per query, so the accessors may
    /// report their corners in either order.
    pub fn new(host: &'a T, min_fn: CornerFn<T>, max_fn: CornerFn<T>) -> Self {
        Self { host, min_fn, max_fn }
    }

    /// Current minimum corner as reported by the host.
    pub fn min(&self) -> Point3 {
        (self.min_fn)(self.host)
    }

    /// Current maximum corner as reported by the host.
    pub fn max(&self) -> Point3 {
        (self.max_fn)(self.host)
    }
}

impl<T> Area3d for PrismWrapper<'_, T> {
    fn line_intersection(&self, start: &Point3, end: &Point3) -> Option<LineHit> {
        let a = (self.min_fn)(self.host);
        let b = (self.max_fn)(self.host);
        // A host reporting non-finite corners cannot intersect anything;
        // queries stay infallible.
        if !point_is_finite(&a) || !point_is_finite(&b) {
            return None;
        }
        let (min, max) = normalize_corners(a, b);
        segment_slab_entry(&min, &max, start, end)
    }
}

fn normalize_corners(a: Point3, b: Point3) -> (Point3, Point3) {
    (
        Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
        Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
    )
}

/// Slab test over the segment parametrization `start + t * (end - start)`.
///
/// Returns the entry hit with `t` in `[0, 1]`, or `None` on a miss.
/// A zero direction component means the segment is parallel to that
/// slab's faces: the axis either always passes (coordinate inside
/// `[min, max]`) or the segment misses outright. Branching here avoids
/// dividing through to signed infinity.
pub(crate) fn segment_slab_entry(
    min: &Point3,
    max: &Point3,
    start: &Point3,
    end: &Point3,
) -> Option<LineHit> {
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for axis in 0..3 {
        let s = start[axis];
        let d = end[axis] - s;
        if d == 0.0 {
            if s < min[axis] || s > max[axis] {
                return None;
            }
        } else {
            let inv = 1.0 / d;
            let mut t0 = (min[axis] - s) * inv;
            let mut t1 = (max[axis] - s) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
    }

    let point = start + t_enter * (end - start);
    Some(LineHit { t: t_enter, point })
}
