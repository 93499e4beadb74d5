//! Composite areas queried as one unit.

use rcast_math::Point3;

use crate::area::{Area3d, LineHit};

/// A hit produced by a [`CombinedArea`], carrying which member was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemberHit {
    /// Index of the winning member, in insertion order.
    pub member: usize,
    /// The intersection itself.
    pub hit: LineHit,
}

/// An ordered collection of areas queried as a single unit.
///
/// Members keep their insertion order and duplicates are permitted. A
/// query tests every member and returns the hit nearest to the segment
/// start; ties go to the earliest inserted member. Querying an empty
/// combination returns `None`.
///
/// The member list is not internally synchronized: build the combination
/// first, then query it, and do not mutate the list concurrently with
/// queries.
#[derive(Default)]
pub struct CombinedArea<'a> {
    members: Vec<Box<dyn Area3d + 'a>>,
}

impl<'a> CombinedArea<'a> {
    /// Create an empty combination.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Create a combination from already-boxed members.
    pub fn from_members(members: Vec<Box<dyn Area3d + 'a>>) -> Self {
        Self { members }
    }

    /// Append a member, keeping insertion order.
    pub fn push(&mut self, member: impl Area3d + 'a) {
        self.members.push(Box::new(member));
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the combination has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the nearest intersection across all members together with
    /// the index of the member that produced it.
    pub fn closest_intersection(&self, start: &Point3, end: &Point3) -> Option<MemberHit> {
        let mut closest: Option<MemberHit> = None;
        for (member, area) in self.members.iter().enumerate() {
            if let Some(hit) = area.line_intersection(start, end) {
                // Strict comparison keeps the earliest member on ties.
                if closest.as_ref().map_or(true, |best| hit.t < best.hit.t) {
                    closest = Some(MemberHit { member, hit });
                }
            }
        }
        closest
    }
}

impl Area3d for CombinedArea<'_> {
    fn line_intersection(&self, start: &Point3, end: &Point3) -> Option<LineHit> {
        self.closest_intersection(start, end).map(|m| m.hit)
    }
}

impl<'a, A: Area3d + 'a> FromIterator<A> for CombinedArea<'a> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|a| Box::new(a) as Box<dyn Area3d + 'a>)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prism::RectangularPrism;

    fn prism(x0: f64, x1: f64) -> RectangularPrism {
        RectangularPrism::new(Point3::new(x0, 0.0, 0.0), Point3::new(x1, 1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_empty_combination_misses() {
        let combined = CombinedArea::new();
        assert!(combined
            .line_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(1.0, 0.5, 0.5))
            .is_none());
    }

    #[test]
    fn test_single_crossed_member_reported() {
        let combined: CombinedArea =
            [prism(2.0, 3.0), prism(10.0, 11.0)].into_iter().collect();
        let hit = combined
            .closest_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(5.0, 0.5, 0.5))
            .unwrap();
        assert_eq!(hit.member, 0);
        assert!((hit.hit.point.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_member_wins() {
        // Insertion order deliberately places the farther prism first.
        let combined: CombinedArea =
            [prism(6.0, 7.0), prism(2.0, 3.0)].into_iter().collect();
        let hit = combined
            .closest_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(10.0, 0.5, 0.5))
            .unwrap();
        assert_eq!(hit.member, 1);
        assert!((hit.hit.t - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_earliest_member() {
        // Duplicate geometry: same entry t for both members.
        let combined: CombinedArea =
            [prism(2.0, 3.0), prism(2.0, 4.0)].into_iter().collect();
        let hit = combined
            .closest_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(10.0, 0.5, 0.5))
            .unwrap();
        assert_eq!(hit.member, 0);
    }

    #[test]
    fn test_all_members_miss() {
        let combined: CombinedArea =
            [prism(2.0, 3.0), prism(6.0, 7.0)].into_iter().collect();
        assert!(!combined.line_intersects(
            &Point3::new(0.0, 5.0, 0.5),
            &Point3::new(10.0, 5.0, 0.5)
        ));
    }

    #[test]
    fn test_push_preserves_order() {
        let mut combined = CombinedArea::new();
        combined.push(prism(6.0, 7.0));
        combined.push(prism(2.0, 3.0));
        assert_eq!(combined.len(), 2);
        let hit = combined
            .closest_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(10.0, 0.5, 0.5))
            .unwrap();
        assert_eq!(hit.member, 1);
    }

    #[test]
    fn test_area3d_impl_drops_member_index() {
        let combined: CombinedArea = [prism(2.0, 3.0)].into_iter().collect();
        let hit = combined
            .line_intersection(&Point3::new(0.0, 0.5, 0.5), &Point3::new(10.0, 0.5, 0.5))
            .unwrap();
        assert!((hit.t - 0.2).abs() < 1e-12);
    }
}
