//! Simplified post-Newtonian correction around black holes
//!
//! Every black hole pushes the bodies inside its zone of influence along the
//! outward radial direction by
//!
//! ```text
//! a_extra = k·G·M / (c²·d) · |v|² · r̂
//! ```
//!
//! where `d` is the distance from the black hole, `v` the target's velocity
//! and `r̂` points from the black hole to the target. This is a presentation
//! approximation of orbital precession, not a validated PN expansion, so all
//! of its constants live in [`RelativityConfig`].

use crate::body::Body;
use common::constants::{schwarzschild_radius, SPEED_OF_LIGHT};
use glam::DVec3;

/// Tunable constants for the correction pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativityConfig {
    /// Speed of light in simulation units (AU/day)
    pub speed_of_light: f64,
    /// Leading coefficient `k` of the correction
    pub coefficient: f64,
    /// Targets closer than this many Schwarzschild radii are skipped
    pub inner_radius_factor: f64,
    /// Targets farther than this many Schwarzschild radii are unaffected
    pub influence_radius_factor: f64,
    /// Absolute distance floor, used when the horizon is tiny
    pub min_distance: f64,
}

impl Default for RelativityConfig {
    fn default() -> Self {
        Self {
            speed_of_light: SPEED_OF_LIGHT,
            coefficient: 3.0,
            // innermost stable circular orbit
            inner_radius_factor: 3.0,
            influence_radius_factor: 100.0,
            min_distance: 1e-10,
        }
    }
}

impl RelativityConfig {
    /// Distance band `[inner, outer]` in which a black hole of `mass` acts
    pub fn influence_band(&self, g: f64, mass: f64) -> (f64, f64) {
        let rs = schwarzschild_radius(g, mass, self.speed_of_light);
        let inner = (self.inner_radius_factor * rs).max(self.min_distance);
        let outer = self.influence_radius_factor * rs;
        (inner, outer)
    }

    /// Extra acceleration felt by a body at `offset` from a black hole of
    /// `mass`, moving with `velocity`. Zero outside the influence band.
    pub fn correction(&self, g: f64, mass: f64, offset: DVec3, velocity: DVec3) -> DVec3 {
        let (inner, outer) = self.influence_band(g, mass);
        let distance = offset.length();
        if distance < inner || distance > outer {
            return DVec3::ZERO;
        }

        let c_sq = self.speed_of_light * self.speed_of_light;
        let direction = offset / distance;
        let correction = self.coefficient * g * mass / (c_sq * distance);

        direction * correction * velocity.length_squared()
    }
}

/// Add the black hole correction to every body's acceleration.
///
/// Must run after [`crate::forces::accumulate_gravity`] and before the
/// velocity update. Only bodies without the black hole flag are targets.
/// Returns the number of (source, target) pairs that received a correction.
pub fn apply_corrections(bodies: &mut [Body], g: f64, config: &RelativityConfig) -> usize {
    let sources: Vec<(usize, DVec3, f64)> = bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_black_hole && !b.is_marked_for_removal())
        .map(|(i, b)| (i, b.position, b.mass))
        .collect();

    let mut applied = 0;
    for (source, bh_position, bh_mass) in sources {
        for (i, target) in bodies.iter_mut().enumerate() {
            if i == source || target.is_black_hole || target.is_marked_for_removal() {
                continue;
            }

            let extra = config.correction(g, bh_mass, target.position - bh_position, target.velocity);
            if extra != DVec3::ZERO {
                target.acceleration += extra;
                applied += 1;
            }
        }
    }
    applied
}
