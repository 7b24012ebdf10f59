//! # Bounds
//!
//! Axis-aligned bounding boxes computed from arbitrary point sets.

use glam::DVec3;
use serde::Serialize;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from explicit corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Computes the tightest box enclosing `points`.
    ///
    /// Returns `None` for an empty set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use plane_mesh::Aabb;
    ///
    /// let points = [DVec3::new(-1.0, 0.0, 2.0), DVec3::new(3.0, -4.0, 0.5)];
    /// let aabb = Aabb::from_points(points.iter().copied()).unwrap();
    /// assert_eq!(aabb.min, DVec3::new(-1.0, -4.0, 0.5));
    /// assert_eq!(aabb.max, DVec3::new(3.0, 0.0, 2.0));
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;

        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if `point` lies inside or on the boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
