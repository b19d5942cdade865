//! Time integration strategies
//!
//! The integrator owns only the ordering of a step. Force evaluation is handed
//! in as a closure so the same force pipeline drives any scheme.

use crate::body::Body;
use std::fmt;

/// Integration scheme used by [`crate::Simulation::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Second-order symplectic velocity Verlet
    #[default]
    VelocityVerlet,
}

impl Integrator {
    /// Advance `bodies` by exactly `dt`.
    ///
    /// `recompute` must leave the new acceleration in `acceleration` and the
    /// old one in `previous_acceleration`.
    pub fn integrate<F>(&self, bodies: &mut [Body], dt: f64, recompute: F)
    where
        F: FnOnce(&mut [Body]),
    {
        match self {
            Integrator::VelocityVerlet => velocity_verlet(bodies, dt, recompute),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::VelocityVerlet => "velocity Verlet",
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn velocity_verlet<F>(bodies: &mut [Body], dt: f64, recompute: F)
where
    F: FnOnce(&mut [Body]),
{
    // x(t+dt) = x + v·dt + ½·a(t)·dt²
    for body in bodies.iter_mut() {
        body.position += body.velocity * dt + 0.5 * body.acceleration * (dt * dt);
    }

    recompute(bodies);

    // v(t+dt) = v + ½·(a(t) + a(t+dt))·dt
    for body in bodies.iter_mut() {
        body.velocity += 0.5 * (body.previous_acceleration + body.acceleration) * dt;
    }
}
