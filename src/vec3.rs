//! Vector math for the intersection kernel.
//!
//! [`Vec3`] is glam's double-precision vector. Operators (negation, component-wise
//! `+ - *`, scalar `* /` on either side, `+= *= /=`) and `length`/`length_squared`
//! come from glam. Indexing with `v[i]` maps 0, 1, 2 to x, y, z and panics for
//! any other index.
//!
//! The free functions below are the geometric and sampling helpers that shading
//! and camera code build on.

use glam::DVec3;

use crate::random;

/// Three-component `f64` vector.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;

/// Squared length below which a rejection sample is redrawn before normalizing.
const MIN_SAMPLE_LENGTH_SQUARED: f64 = 1e-160;

/// Dot product.
#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f64 {
    u.x * v.x + u.y * v.y + u.z * v.z
}

/// Right-handed cross product.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    Vec3::new(
        u.y * v.z - u.z * v.y,
        u.z * v.x - u.x * v.z,
        u.x * v.y - u.y * v.x,
    )
}

/// Scale `v` to unit length.
///
/// `v` must not be zero: a zero-length input produces NaN components.
/// Use [`try_unit_vector`] when the input is not known to be valid.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Checked [`unit_vector`]. Returns `None` for zero or non-finite lengths.
pub fn try_unit_vector(v: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length.is_finite() && length > 0.0 {
        Some(v / length)
    } else {
        None
    }
}

/// True if every component is close to zero.
pub fn near_zero(v: Vec3) -> bool {
    const S: f64 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

/// Space-separated `"x y z"` form used by text outputs.
pub fn fmt_components(v: Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Random vector with components in [0.0, 1.0).
pub fn random_vec3() -> Vec3 {
    Vec3::new(random::random_f64(), random::random_f64(), random::random_f64())
}

/// Random vector with components in [min, max).
pub fn random_vec3_range(min: f64, max: f64) -> Vec3 {
    Vec3::new(
        random::random_f64_range(min, max),
        random::random_f64_range(min, max),
        random::random_f64_range(min, max),
    )
}

/// Generate random point inside unit disk using rejection sampling.
pub fn random_in_unit_disk() -> Vec3 {
    loop {
        let p = Vec3::new(
            random::random_f64_range(-1.0, 1.0),
            random::random_f64_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate random point inside the unit sphere using rejection sampling.
pub fn random_in_unit_sphere() -> Vec3 {
    loop {
        let p = random_vec3_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random direction of length one.
///
/// Normalizes a [`random_in_unit_sphere`] sample. Samples too close to the
/// origin to normalize reliably are redrawn.
pub fn random_unit_vector() -> Vec3 {
    loop {
        let p = random_in_unit_sphere();
        if p.length_squared() > MIN_SAMPLE_LENGTH_SQUARED {
            return unit_vector(p);
        }
    }
}

/// Generate random unit vector in the hemisphere oriented by `normal`.
pub fn random_on_hemisphere(normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector();
    if dot(on_unit_sphere, normal) < 0.0 {
        -on_unit_sphere
    } else {
        on_unit_sphere
    }
}

/// Mirror `v` about a surface with unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * dot(v, n) * n
}

/// Refract unit vector `uv` through a surface with unit normal `n` (Snell's law).
///
/// `etai_over_etat` is the ratio of refractive indices. Total internal
/// reflection is not detected: the parallel term's radicand is floored at zero.
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = dot(-uv, n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).max(0.0).sqrt() * n;
    r_out_perp + r_out_parallel
}
