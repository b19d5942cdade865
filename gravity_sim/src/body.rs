//! Point-mass records owned by the simulation

use common::constants::schwarzschild_radius;
use glam::{DVec3, Vec3};

/// A point mass with kinematic state and display attributes.
///
/// Units: AU, AU/day, solar masses. `radius` and `color` are only for
/// presentation; gravity treats every body as a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec3,
    pub velocity: DVec3,
    pub acceleration: DVec3,
    /// Acceleration from the step before, used by the second Verlet half-kick
    pub previous_acceleration: DVec3,
    /// A body with `mass <= 0` is logically deleted
    pub mass: f64,
    pub radius: f64,
    pub color: Vec3,
    /// Black holes source the relativistic correction and never receive it
    pub is_black_hole: bool,
}

impl Body {
    pub fn new(position: DVec3, velocity: DVec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration: DVec3::ZERO,
            previous_acceleration: DVec3::ZERO,
            mass,
            radius: 0.03,
            color: Vec3::ONE,
            is_black_hole: false,
        }
    }

    /// The black hole dropped at the camera: 10 solar masses, green
    pub fn black_hole(position: DVec3) -> Self {
        Self::new(position, DVec3::ZERO, 10.0)
            .with_radius(0.05)
            .with_color(Vec3::new(0.0, 1.0, 0.0))
            .as_black_hole()
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn as_black_hole(mut self) -> Self {
        self.is_black_hole = true;
        self
    }

    /// True once the mass has been zeroed (or made negative) for deletion
    pub fn is_marked_for_removal(&self) -> bool {
        self.mass <= 0.0
    }

    /// Event horizon radius for this body's mass
    pub fn schwarzschild_radius(&self, g: f64, c: f64) -> f64 {
        schwarzschild_radius(g, self.mass, c)
    }

    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
