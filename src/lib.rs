//! Ray intersection kernel
//!
//! Vector and interval math, rays, the [`hittable::Hittable`] capability, a
//! sphere primitive and the brute-force [`hittable::HittableList`] aggregate.
//! Materials, cameras and image output build on these types.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hittable;
pub mod interval;
pub mod random;
pub mod ray;
pub mod sphere;
pub mod vec3;

pub use error::KernelError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use interval::Interval;
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec3::{Point3, Vec3};
