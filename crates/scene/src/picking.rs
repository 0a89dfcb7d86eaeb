use foundation::math::{GeoCoordinate, Vec3};

use crate::globe::GLOBE_RADIUS;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Ray from `origin` aimed at `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }
}

/// Where a pointer ray meets the globe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub geo: GeoCoordinate,
    /// Distance along the normalized ray.
    pub distance: f64,
}

/// Analytic ray-vs-globe intersection.
///
/// Returns the nearest hit with `t >= 0`, or `None` when the ray misses
/// (a miss is an ordinary outcome, not an error: the click is ignored and
/// no state changes). A ray starting inside the sphere hits the far side.
pub fn pick_globe(ray: Ray) -> Option<SurfaceHit> {
    let dir = ray.dir.normalized()?;

    // |o + t*d|^2 = r^2, with d unit length.
    let b = ray.origin.dot(dir);
    let c = ray.origin.dot(ray.origin) - GLOBE_RADIUS * GLOBE_RADIUS;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    let t_far = -b + sqrt_disc;
    let t = if t_near >= 0.0 {
        t_near
    } else if t_far >= 0.0 {
        t_far
    } else {
        return None;
    };

    let point = ray.origin + dir * t;
    let geo = GeoCoordinate::from_surface_point(point)?;
    Some(SurfaceHit {
        point,
        geo,
        distance: t,
    })
}
