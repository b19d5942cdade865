//! Exact pairwise Newtonian gravity

use crate::body::Body;
use common::constants::MIN_SEPARATION_SQ;
use glam::DVec3;
use log::trace;

/// Recompute every body's acceleration from mutual gravity.
///
/// Each body's current acceleration is first moved into
/// `previous_acceleration` and the acceleration is zeroed. Each unordered
/// pair is then visited once; pairs closer than [`MIN_SEPARATION_SQ`] and
/// bodies with `mass <= 0` are skipped.
pub fn accumulate_gravity(bodies: &mut [Body], g: f64) {
    for body in bodies.iter_mut() {
        body.previous_acceleration = body.acceleration;
        body.acceleration = DVec3::ZERO;
    }

    let n = bodies.len();
    let mut skipped = 0usize;

    for i in 0..n {
        if bodies[i].is_marked_for_removal() {
            continue;
        }

        for j in (i + 1)..n {
            if bodies[j].is_marked_for_removal() {
                continue;
            }

            let mi = bodies[i].mass;
            let mj = bodies[j].mass;

            let r = bodies[j].position - bodies[i].position;
            let dist_sq = r.length_squared();
            if dist_sq < MIN_SEPARATION_SQ {
                skipped += 1;
                continue;
            }

            let force_mag = g * mi * mj / dist_sq;
            let force_dir = r / dist_sq.sqrt();
            let force = force_dir * force_mag;

            bodies[i].acceleration += force / mi;
            bodies[j].acceleration -= force / mj;
        }
    }

    if skipped > 0 {
        trace!("skipped {skipped} coincident pair(s)");
    }
}
