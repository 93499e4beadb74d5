//! Adapt entities into areas through the converter registry, combine
//! them, and run segment queries plus a grid traversal over the scene.

use rcast::{
    point_from_fn, Area3d, AreaConverter, CombinedArea, ExactGridTraversal, GridTraversal,
    Point3, PrismWrapper, Vec3,
};

/// An entity owned by the host application, not by the kernel.
struct Entity {
    center: Point3,
    half_extents: Vec3,
}

impl Entity {
    fn min_corner(&self) -> Point3 {
        self.center - self.half_extents
    }

    fn max_corner(&self) -> Point3 {
        self.center + self.half_extents
    }
}

fn entity_area(entity: &Entity) -> rcast::rcast_area::Result<Box<dyn Area3d + '_>> {
    Ok(Box::new(PrismWrapper::new(
        entity,
        Entity::min_corner,
        Entity::max_corner,
    )))
}

fn main() {
    AreaConverter::global().register::<Entity>(entity_area);

    // A row of unit-ish boxes along the x axis.
    let entities: Vec<Entity> = (0..10)
        .map(|i| Entity {
            center: Point3::new(3.0 * i as f64 + 5.0, 0.0, 0.0),
            half_extents: Vec3::new(0.5, 0.5, 0.5),
        })
        .collect();

    let members = entities
        .iter()
        .map(|e| AreaConverter::global().convert(e))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let combined = CombinedArea::from_members(members);

    // A deterministic generator stands in for whatever randomness or
    // gameplay state the host would normally supply.
    let mut seed = 0x2545_f491_4f6c_dd1d_u64;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed >> 11) as f64 / (1_u64 << 53) as f64
    };

    let start = point_from_fn(&mut next);
    let end = Point3::new(40.0, 0.0, 0.0);
    match combined.closest_intersection(&start, &end) {
        Some(found) => println!(
            "segment {start} -> {end} first hits entity #{} at {} (t = {:.4})",
            found.member, found.hit.point, found.hit.t
        ),
        None => println!("segment {start} -> {end} hits nothing"),
    }

    let cells = GridTraversal::new(start, end - start, 1.0, 64)
        .unwrap()
        .with_max_distance(40.0)
        .unwrap();
    println!("the same ray pierces {} grid cells within 40 units", cells.count());

    let crossings: Vec<Point3> = ExactGridTraversal::new(start, end - start, 1.0, 4)
        .unwrap()
        .collect();
    println!("first boundary crossings: {crossings:?}");
}
