//! Built-in reference configuration: the Sun and eight planets
//!
//! Distances in AU, velocities in AU/day, masses in solar masses. All planets
//! start on the +x axis moving along +y.

use crate::body::Body;
use glam::{DVec3, Vec3};

/// One row of the reference table
#[derive(Debug, Clone, Copy)]
pub struct PlanetData {
    pub name: &'static str,
    pub distance: f64,
    pub speed: f64,
    pub mass: f64,
    pub radius: f64,
    pub color: [f32; 3],
}

impl PlanetData {
    pub fn to_body(&self) -> Body {
        Body::new(
            DVec3::new(self.distance, 0.0, 0.0),
            DVec3::new(0.0, self.speed, 0.0),
            self.mass,
        )
        .with_radius(self.radius)
        .with_color(Vec3::from_array(self.color))
    }
}

pub const SOLAR_SYSTEM: [PlanetData; 9] = [
    PlanetData { name: "Sun", distance: 0.0, speed: 0.0, mass: 1.0, radius: 0.2, color: [1.0, 1.0, 0.0] },
    PlanetData { name: "Mercury", distance: 0.4, speed: 0.031, mass: 1.65e-7, radius: 0.02, color: [0.8, 0.8, 0.8] },
    PlanetData { name: "Venus", distance: 0.8, speed: 0.023, mass: 2.45e-6, radius: 0.03, color: [0.9, 0.7, 0.0] },
    PlanetData { name: "Earth", distance: 1.5, speed: 0.017, mass: 3e-6, radius: 0.03, color: [0.0, 0.0, 1.0] },
    PlanetData { name: "Mars", distance: 2.5, speed: 0.015, mass: 3.2e-7, radius: 0.02, color: [1.0, 0.0, 0.0] },
    PlanetData { name: "Jupiter", distance: 5.2, speed: 0.008, mass: 9.5e-4, radius: 0.08, color: [0.8, 0.6, 0.4] },
    PlanetData { name: "Saturn", distance: 9.5, speed: 0.006, mass: 2.75e-4, radius: 0.07, color: [0.9, 0.8, 0.5] },
    PlanetData { name: "Uranus", distance: 19.2, speed: 0.004, mass: 4.4e-5, radius: 0.05, color: [0.5, 0.8, 1.0] },
    PlanetData { name: "Neptune", distance: 30.1, speed: 0.003, mass: 5.15e-5, radius: 0.05, color: [0.0, 0.0, 0.8] },
];

/// Fresh bodies for the reference configuration, Sun first
pub fn reference_bodies() -> Vec<Body> {
    SOLAR_SYSTEM.iter().map(PlanetData::to_body).collect()
}
