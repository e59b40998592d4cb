//! Ray representation for intersection testing.
//!
//! A ray is defined as r(t) = origin + t * direction.

use crate::vec3::{Point3, Vec3};

/// Half-line in 3D space defined by origin and direction.
///
/// Fields are private so a ray cannot change once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    ///
    /// The direction does not need to be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Starting point of the ray.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Direction of travel.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// `t` is not restricted; negative values lie behind the origin.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
