use std::sync::Arc;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};

use raykernel::vec3::{fmt_components, random_unit_vector, try_unit_vector};
use raykernel::{random, Hittable, HittableList, Interval, Point3, Ray, Sphere};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Demo scene: one large sphere, one distant small sphere and a jittered row of small spheres.
fn create_scene() -> Result<HittableList> {
    let mut world = HittableList::new();

    world.add(Arc::new(
        Sphere::new(Point3::new(0.0, -1.0, 0.0), 10.0).context("large sphere")?,
    ));
    world.add(Arc::new(
        Sphere::new(Point3::new(100.0, 100.0, 100.0), 1.0).context("distant sphere")?,
    ));

    for a in -5..5 {
        let center = Point3::new(
            a as f64 * 3.0 + 0.9 * random::random_f64(),
            12.0,
            20.0 + 0.9 * random::random_f64(),
        );
        let radius = random::random_f64_range(0.2, 1.0);
        let sphere = Sphere::new(center, radius)
            .with_context(|| format!("small sphere at {}", fmt_components(center)))?;
        world.add(Arc::new(sphere));
    }

    debug!("Scene built with {} spheres", world.len());
    Ok(world)
}

/// Probe ray from the command line. The direction must have a finite, non-zero length.
fn probe_ray(args: &Args) -> Result<Ray> {
    ensure!(
        try_unit_vector(args.direction).is_some(),
        "probe direction [{}] has no usable length",
        fmt_components(args.direction)
    );
    Ok(Ray::new(args.origin, args.direction))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("raykernel - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    random::reseed(args.seed);
    let world = create_scene()?;
    let ray_t = Interval::new(args.t_min, args.t_max);

    let probe = probe_ray(&args)?;
    info!(
        "Probe ray origin [{}] direction [{}], t in ({}, {})",
        fmt_components(probe.origin()),
        fmt_components(probe.direction()),
        ray_t.min,
        ray_t.max
    );

    match world.hit(&probe, ray_t) {
        Some(rec) => info!(
            "Hit at t={} point [{}] normal [{}] {} face",
            rec.t,
            fmt_components(rec.p),
            fmt_components(rec.normal),
            if rec.front_face { "front" } else { "back" }
        ),
        None => info!("Probe ray missed every object"),
    }

    if args.batch > 0 {
        let rays: Vec<Ray> = (0..args.batch)
            .map(|_| Ray::new(args.origin, random_unit_vector()))
            .collect();

        info!("Casting {} rays using {} threads...", rays.len(), rayon::current_num_threads());
        let start = Instant::now();
        let hits = world.hit_many(&rays, ray_t);
        let elapsed = start.elapsed();

        let hit_count = hits.iter().filter(|h| h.is_some()).count();
        info!("{}/{} rays hit the scene in {:.2?}", hit_count, rays.len(), elapsed);
    }

    Ok(())
}
