//! Axis-aligned bounding-box overlap
//!
//! Boxes are anchored at an entity's position and extend by its width and
//! height toward +x/+y. The comparison is strict, so boxes that only share
//! an edge do not overlap.

use glam::Vec2;

/// An axis-aligned box anchored at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Strict overlap test on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.origin.x < other.max().x
            && self.max().x > other.origin.x
            && self.origin.y < other.max().y
            && self.max().y > other.origin.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&aabb(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&aabb(0.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = aabb(0.0, 0.0, 40.0, 30.0);
        let inner = aabb(10.0, 10.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&aabb(0.0, 50.0, 10.0, 10.0)));
        assert!(!a.overlaps(&aabb(-30.0, 0.0, 10.0, 10.0)));
    }
}
