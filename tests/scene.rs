use std::sync::Arc;

use raykernel::vec3::{dot, random_unit_vector};
use raykernel::{random, HitRecord, Hittable, HittableList, Interval, Point3, Ray, Sphere, Vec3};

const EXPECTED_T: f64 = 0.7284424941442670;

fn probe_ray() -> Ray {
    Ray::new(Point3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 7.0, 8.0))
}

fn sphere(center: Point3, radius: f64) -> Arc<dyn Hittable> {
    Arc::new(Sphere::new(center, radius).unwrap())
}

#[test]
fn sphere_hit_reproduces_reference_parameter() {
    let s = Sphere::new(Point3::new(0.0, -1.0, 0.0), 10.0).unwrap();
    let rec = s.hit(&probe_ray(), Interval::new(0.0, 10.0)).unwrap();
    // 10 significant digits
    assert!((rec.t - EXPECTED_T).abs() < 1e-10);
}

#[test]
fn list_returns_nearest_hit_in_either_order() {
    let big = sphere(Point3::new(0.0, -1.0, 0.0), 10.0);
    let small = sphere(Point3::new(100.0, 100.0, 100.0), 1.0);

    let mut first = HittableList::new();
    first.add(Arc::clone(&big));
    first.add(Arc::clone(&small));

    let mut second = HittableList::new();
    second.add(small);
    second.add(big);

    let a = first.hit(&probe_ray(), Interval::new(0.0, 10.0)).unwrap();
    let b = second.hit(&probe_ray(), Interval::new(0.0, 10.0)).unwrap();
    assert!((a.t - EXPECTED_T).abs() < 1e-10);
    assert_eq!(a, b);
}

#[test]
fn list_hit_agrees_with_brute_force_minimum() {
    random::reseed(99);

    let mut world = HittableList::new();
    let mut spheres = Vec::new();
    for i in 0..20 {
        let center = Point3::new(
            random::random_f64_range(-10.0, 10.0),
            random::random_f64_range(-10.0, 10.0),
            random::random_f64_range(-10.0, 10.0),
        );
        let s = Sphere::new(center, 0.5 + (i % 4) as f64).unwrap();
        spheres.push(s);
        world.add(Arc::new(s));
    }

    let ray_t = Interval::new(0.001, f64::INFINITY);
    for _ in 0..500 {
        let r = Ray::new(Point3::ZERO, random_unit_vector());
        let expected: Option<HitRecord> = spheres
            .iter()
            .filter_map(|s| s.hit(&r, ray_t))
            .min_by(|a, b| a.t.total_cmp(&b.t));

        let got = world.hit(&r, ray_t);
        match (got, expected) {
            (Some(g), Some(e)) => assert_eq!(g.t, e.t),
            (None, None) => {}
            (g, e) => panic!("list {:?} vs brute force {:?}", g, e),
        }
        if let Some(g) = got {
            assert!(dot(g.normal, r.direction()) <= 0.0);
        }
    }
}

#[test]
fn batch_query_matches_single_queries() {
    random::reseed(5);
    let mut world = HittableList::new();
    world.add(sphere(Point3::new(0.0, 0.0, -3.0), 1.0));
    world.add(sphere(Point3::new(0.0, -101.0, -3.0), 100.0));

    let rays: Vec<Ray> = (0..256)
        .map(|_| Ray::new(Point3::ZERO, random_unit_vector()))
        .collect();
    let ray_t = Interval::new(0.001, f64::INFINITY);

    let batch = world.hit_many(&rays, ray_t);
    for (r, rec) in rays.iter().zip(batch) {
        assert_eq!(rec, world.hit(r, ray_t));
    }
}

#[test]
fn cleared_list_misses_everything() {
    let mut world = HittableList::new();
    world.add(sphere(Point3::new(0.0, -1.0, 0.0), 10.0));
    assert!(world.hit(&probe_ray(), Interval::new(0.0, 10.0)).is_some());
    world.clear();
    assert!(world.is_empty());
    assert!(world.hit(&probe_ray(), Interval::new(0.0, 10.0)).is_none());
}
