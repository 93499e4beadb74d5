//! Type-keyed conversion of foreign objects into areas.
//!
//! An [`AreaConverter`] maps a concrete Rust type to a function that
//! produces an area from a borrowed value of that type. Host
//! applications register their entity types once at startup and convert
//! instances on demand when building query sets.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::area::Area3d;
use crate::error::{AreaError, Result};

/// Conversion function registered for a type `T`.
///
/// Higher-ranked over the borrow so a conversion may return a wrapper
/// area that borrows the input value.
pub type ConvertFn<T> = for<'a> fn(&'a T) -> Result<Box<dyn Area3d + 'a>>;

trait ErasedConvert: Send + Sync {
    fn convert<'a>(&self, value: &'a dyn Any) -> Option<Result<Box<dyn Area3d + 'a>>>;
}

struct TypedConvert<T: 'static> {
    f: ConvertFn<T>,
}

impl<T: 'static> ErasedConvert for TypedConvert<T> {
    fn convert<'a>(&self, value: &'a dyn Any) -> Option<Result<Box<dyn Area3d + 'a>>> {
        value.downcast_ref::<T>().map(|v| (self.f)(v))
    }
}

/// Registry mapping concrete types to area conversion functions.
///
/// Reads may happen concurrently from many threads; registration takes
/// the write lock and is expected to happen once at startup, not in hot
/// paths. Re-registering a type silently replaces the previous function
/// (last write wins). Entries are never removed.
#[derive(Default)]
pub struct AreaConverter {
    entries: RwLock<HashMap<TypeId, Box<dyn ErasedConvert>>>,
}

impl AreaConverter {
    /// Create an empty converter registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    ///
    /// Register all types before the first conversion; there is no
    /// implicit registration.
    pub fn global() -> &'static AreaConverter {
        static GLOBAL: OnceLock<AreaConverter> = OnceLock::new();
        GLOBAL.get_or_init(AreaConverter::new)
    }

    /// Register (or replace) the conversion function for type `T`.
    pub fn register<T: 'static>(&self, f: ConvertFn<T>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), Box::new(TypedConvert { f }));
    }

    /// Convert a value into an area using the function registered for
    /// its exact type.
    ///
    /// Fails with [`AreaError::NoConverter`] if `T` was never
    /// registered. A missing converter is an integration bug and is
    /// reported as an error, never as a quiet "no intersection" area.
    pub fn convert<'a, T: 'static>(&self, value: &'a T) -> Result<Box<dyn Area3d + 'a>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&TypeId::of::<T>()) {
            Some(entry) => entry
                .convert(value)
                .unwrap_or(Err(AreaError::NoConverter(std::any::type_name::<T>()))),
            None => Err(AreaError::NoConverter(std::any::type_name::<T>())),
        }
    }

    /// True if a conversion function is registered for `T`.
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prism::{PrismWrapper, RectangularPrism};
    use rcast_math::Point3;
    use std::cell::Cell;

    struct Block {
        min: Point3,
        max: Point3,
    }

    fn block_area(block: &Block) -> Result<Box<dyn Area3d + '_>> {
        Ok(Box::new(RectangularPrism::new(block.min, block.max)?))
    }

    #[test]
    fn test_registered_conversion_matches_direct_construction() {
        let converter = AreaConverter::new();
        converter.register::<Block>(block_area);

        let block = Block {
            min: Point3::new(2.0, 0.0, 0.0),
            max: Point3::new(3.0, 1.0, 1.0),
        };
        let area = converter.convert(&block).unwrap();
        let direct = RectangularPrism::new(block.min, block.max).unwrap();

        let start = Point3::new(0.0, 0.5, 0.5);
        let end = Point3::new(10.0, 0.5, 0.5);
        let a = area.line_intersection(&start, &end).unwrap();
        let b = direct.line_intersection(&start, &end).unwrap();
        assert!((a.t - b.t).abs() < 1e-12);
        assert_eq!(a.point, b.point);
    }

    struct Slider {
        x: Cell<f64>,
    }

    fn slider_min(s: &Slider) -> Point3 {
        Point3::new(s.x.get(), 0.0, 0.0)
    }

    fn slider_max(s: &Slider) -> Point3 {
        Point3::new(s.x.get() + 1.0, 1.0, 1.0)
    }

    fn slider_area(slider: &Slider) -> Result<Box<dyn Area3d + '_>> {
        Ok(Box::new(PrismWrapper::new(slider, slider_min, slider_max)))
    }

    #[test]
    fn test_conversion_may_borrow_its_input() {
        let converter = AreaConverter::new();
        converter.register::<Slider>(slider_area);

        let slider = Slider { x: Cell::new(0.0) };
        let area = converter.convert(&slider).unwrap();

        let p = Point3::new(0.5, 0.5, 0.5);
        assert!(area.line_intersects(&p, &p));
        // The converted area re-reads the host's state per query.
        slider.x.set(5.0);
        assert!(!area.line_intersects(&p, &p));
    }

    struct Unregistered;

    #[test]
    fn test_unregistered_type_is_an_error() {
        let converter = AreaConverter::new();
        let result = converter.convert(&Unregistered);
        assert!(matches!(result, Err(AreaError::NoConverter(_))));
    }

    fn block_area_shrunk(block: &Block) -> Result<Box<dyn Area3d + '_>> {
        // Registered second: collapses the block to its lower half.
        let mid = Point3::new(
            (block.min.x + block.max.x) / 2.0,
            block.max.y,
            block.max.z,
        );
        Ok(Box::new(RectangularPrism::new(block.min, mid)?))
    }

    #[test]
    fn test_reregistration_last_write_wins() {
        let converter = AreaConverter::new();
        converter.register::<Block>(block_area);
        converter.register::<Block>(block_area_shrunk);

        let block = Block {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(4.0, 1.0, 1.0),
        };
        let area = converter.convert(&block).unwrap();
        // A point in the upper x half would only hit the replaced conversion.
        let p = Point3::new(3.0, 0.5, 0.5);
        assert!(!area.line_intersects(&p, &p));
        let q = Point3::new(1.0, 0.5, 0.5);
        assert!(area.line_intersects(&q, &q));
    }

    struct GlobalOnly {
        min: Point3,
        max: Point3,
    }

    fn global_only_area(v: &GlobalOnly) -> Result<Box<dyn Area3d + '_>> {
        Ok(Box::new(RectangularPrism::new(v.min, v.max)?))
    }

    #[test]
    fn test_global_registry() {
        AreaConverter::global().register::<GlobalOnly>(global_only_area);
        assert!(AreaConverter::global().is_registered::<GlobalOnly>());

        let v = GlobalOnly {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(1.0, 1.0, 1.0),
        };
        let area = AreaConverter::global().convert(&v).unwrap();
        let p = Point3::new(0.5, 0.5, 0.5);
        assert!(area.line_intersects(&p, &p));
    }
}
