//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives, [`HitRecord`] for
//! intersection data, and [`HittableList`], the brute-force scene aggregate.

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{dot, Point3, Vec3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Unit surface normal, always pointing against the incident ray
    pub normal: Vec3,
    /// Ray parameter at the intersection point
    pub t: f64,
    /// True if the ray arrives from outside the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for a hit at parameter `t`.
    ///
    /// `outward_normal` must be unit length. Orientation goes through
    /// [`HitRecord::set_face_normal`].
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3) -> Self {
        let mut rec = HitRecord {
            p: r.at(t),
            t,
            ..HitRecord::default()
        };
        rec.set_face_normal(r, outward_normal);
        rec
    }

    /// Set surface normal and determine front/back face.
    ///
    /// Ensures normal always points against the incident ray.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = dot(r.direction(), outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementors must be thread-safe so one scene can serve many rays in parallel.
pub trait Hittable: Sync + Send {
    /// Nearest intersection whose parameter lies strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Members are shared through
/// `Arc`, so the same primitive may also be held elsewhere.
#[derive(Default, Clone)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a new list with a single hittable object
    pub fn with_object(object: Arc<dyn Hittable>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
        debug!("Scene now holds {} objects", self.objects.len());
    }

    /// Remove every object, dropping the list's reference to each.
    pub fn clear(&mut self) {
        debug!("Clearing {} objects from scene", self.objects.len());
        self.objects.clear();
    }

    /// Members in insertion order.
    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene has no members.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Intersect a batch of rays in parallel.
    ///
    /// Results are in the same order as `rays`. Each ray keeps its own
    /// closest-so-far bound.
    pub fn hit_many(&self, rays: &[Ray], ray_t: Interval) -> Vec<Option<HitRecord>> {
        rays.par_iter().map(|r| self.hit(r, ray_t)).collect()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Each accepted hit shrinks the window, so later members must be strictly closer
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                trace!("hit at t={} (previous bound {})", rec.t, closest_so_far);
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
