//! Common utilities for the gravity sandbox
//!
//! This crate holds the unit system shared by the simulation and any front end
//! that drives it, plus the fixed-step frame clock used to decouple physics
//! from the display rate.

pub mod timestep;

pub use timestep::FixedTimestep;

/// Physical constants in simulation units (AU, solar masses, days)
pub mod constants {
    /// Gravitational constant in AU³ / (solar mass · day²)
    pub const DEFAULT_G: f64 = 0.000295912208;

    /// Speed of light in AU/day
    pub const SPEED_OF_LIGHT: f64 = 173.144_632_674;

    /// Pairs closer than this (squared, AU²) exert no force on each other
    pub const MIN_SEPARATION_SQ: f64 = 1e-12;

    /// Fixed physics step in days
    pub const PHYSICS_DT: f64 = 1.0 / 60.0;

    /// Schwarzschild radius r_s = 2GM/c² for a given G and mass
    pub fn schwarzschild_radius(g: f64, mass: f64, c: f64) -> f64 {
        2.0 * g * mass / (c * c)
    }
}
