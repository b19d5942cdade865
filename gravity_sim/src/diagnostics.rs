//! Conserved quantities and summary measurements
//!
//! Deleted bodies (`mass <= 0`) are ignored throughout.

use crate::body::Body;
use common::constants::MIN_SEPARATION_SQ;
use glam::DVec3;
use std::fmt;

fn live(bodies: &[Body]) -> impl Iterator<Item = &Body> {
    bodies.iter().filter(|b| !b.is_marked_for_removal())
}

/// Sum of `mass · velocity`
pub fn total_momentum(bodies: &[Body]) -> DVec3 {
    live(bodies).map(Body::momentum).sum()
}

pub fn total_mass(bodies: &[Body]) -> f64 {
    live(bodies).map(|b| b.mass).sum()
}

pub fn center_of_mass(bodies: &[Body]) -> DVec3 {
    let mut total_mass = 0.0;
    let mut com = DVec3::ZERO;

    for body in live(bodies) {
        com += body.position * body.mass;
        total_mass += body.mass;
    }

    if total_mass > 0.0 {
        com / total_mass
    } else {
        DVec3::ZERO
    }
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    live(bodies).map(Body::kinetic_energy).sum()
}

/// Pairwise Newtonian potential; coincident pairs contribute nothing,
/// matching the force pass.
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut potential = 0.0;

    for (i, body_i) in bodies.iter().enumerate() {
        if body_i.is_marked_for_removal() {
            continue;
        }
        for body_j in live(&bodies[i + 1..]) {
            let dist_sq = (body_j.position - body_i.position).length_squared();
            if dist_sq < MIN_SEPARATION_SQ {
                continue;
            }
            potential -= g * body_i.mass * body_j.mass / dist_sq.sqrt();
        }
    }

    potential
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// Snapshot of the system's bulk state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub body_count: usize,
    pub total_mass: f64,
    pub momentum: DVec3,
    pub center_of_mass: DVec3,
    pub energy: f64,
}

impl Diagnostics {
    pub fn measure(bodies: &[Body], g: f64) -> Self {
        Self {
            body_count: live(bodies).count(),
            total_mass: total_mass(bodies),
            momentum: total_momentum(bodies),
            center_of_mass: center_of_mass(bodies),
            energy: total_energy(bodies, g),
        }
    }

    /// |E - E₀| / |E₀|, or the absolute drift when E₀ is zero
    pub fn energy_drift_from(&self, initial: &Diagnostics) -> f64 {
        let drift = (self.energy - initial.energy).abs();
        if initial.energy != 0.0 {
            drift / initial.energy.abs()
        } else {
            drift
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bodies={} mass={:.6} E={:.9e} |p|={:.3e} com=({:.4}, {:.4}, {:.4})",
            self.body_count,
            self.total_mass,
            self.energy,
            self.momentum.length(),
            self.center_of_mass.x,
            self.center_of_mass.y,
            self.center_of_mass.z,
        )
    }
}
