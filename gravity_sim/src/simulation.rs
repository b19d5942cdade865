//! The simulation engine: owns the bodies, `G` and the integrator

use crate::body::Body;
use crate::diagnostics::Diagnostics;
use crate::forces::accumulate_gravity;
use crate::instance::{self, BodyInstance};
use crate::integrator::Integrator;
use crate::relativity::{apply_corrections, RelativityConfig};
use crate::solar_system;
use common::constants::DEFAULT_G;
use glam::DVec3;
use log::{debug, trace};

/// Exact O(n²) N-body system advanced at a caller-chosen fixed step.
///
/// The engine never rejects physically degenerate input. Zero or negative
/// masses, coincident bodies and a non-positive `G` all produce whatever
/// trajectory follows from the equations.
pub struct Simulation {
    bodies: Vec<Body>,
    g: f64,
    integrator: Integrator,
    relativity: RelativityConfig,
    elapsed_time: f64,
    steps: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_integrator(Integrator::default())
    }

    pub fn with_integrator(integrator: Integrator) -> Self {
        Self {
            bodies: Vec::new(),
            g: DEFAULT_G,
            integrator,
            relativity: RelativityConfig::default(),
            elapsed_time: 0.0,
            steps: 0,
        }
    }

    /// Append a body as-is, stored acceleration included
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    /// Takes effect on the next [`Simulation::update`]
    pub fn set_g(&mut self, value: f64) {
        self.g = value;
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn relativity(&self) -> &RelativityConfig {
        &self.relativity
    }

    pub fn relativity_mut(&mut self) -> &mut RelativityConfig {
        &mut self.relativity
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Live view for in-place edits. Setting a body's mass to zero deletes it
    /// at the next [`Simulation::remove_marked_bodies`].
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated time advanced since construction or the last reset
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Overwrite every stored acceleration with the current field.
    ///
    /// `update` drifts positions with whatever acceleration each body holds,
    /// which for new bodies is what the caller supplied. Call this after
    /// building a configuration to start from the real field instead.
    pub fn prime_accelerations(&mut self) {
        compute_accelerations(&mut self.bodies, self.g, &self.relativity);
    }

    /// Advance the system by exactly `dt`. No clamping, no substepping.
    pub fn update(&mut self, dt: f64) {
        if self.bodies.is_empty() {
            return;
        }

        let g = self.g;
        let relativity = self.relativity;
        self.integrator.integrate(&mut self.bodies, dt, |bodies| {
            compute_accelerations(bodies, g, &relativity);
        });

        self.elapsed_time += dt;
        self.steps += 1;
        trace!("step {} t={:.6} n={}", self.steps, self.elapsed_time, self.bodies.len());
    }

    /// Erase every body with `mass <= 0`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove_marked_bodies(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|body| !body.is_marked_for_removal());

        let removed = before - self.bodies.len();
        if removed > 0 {
            debug!("removed {removed} marked bod{}", if removed == 1 { "y" } else { "ies" });
        }
        removed
    }

    /// Replace everything with the Sun and eight planets
    pub fn reset_to_solar_system(&mut self) {
        self.clear_bodies();
        for body in solar_system::reference_bodies() {
            self.add_body(body);
        }
        self.elapsed_time = 0.0;
        self.steps = 0;
        debug!("reset to reference solar system ({} bodies)", self.bodies.len());
    }

    /// Drop a 10 M☉ black hole at `position`, at rest
    pub fn spawn_black_hole(&mut self, position: DVec3) {
        self.add_body(Body::black_hole(position));
        debug!("spawned black hole at ({:.3}, {:.3}, {:.3})", position.x, position.y, position.z);
    }

    /// Multiply the display radius of every non-black-hole body
    pub fn scale_planet_radii(&mut self, factor: f64) {
        for body in self.bodies.iter_mut().filter(|b| !b.is_black_hole) {
            body.radius *= factor;
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::measure(&self.bodies, self.g)
    }

    /// Per-body records for the renderer
    pub fn instances(&self) -> Vec<BodyInstance> {
        instance::instances(&self.bodies)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Full force pipeline: Newtonian gravity, then the black hole correction
pub fn compute_accelerations(bodies: &mut [Body], g: f64, relativity: &RelativityConfig) {
    accumulate_gravity(bodies, g);
    let corrected = apply_corrections(bodies, g, relativity);
    if corrected > 0 {
        trace!("applied {corrected} black hole correction(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, mass: f64) -> Body {
        Body::new(DVec3::new(x, 0.0, 0.0), DVec3::ZERO, mass)
    }

    #[test]
    fn starts_empty_with_default_g() {
        let sim = Simulation::new();
        assert!(sim.is_empty());
        assert_eq!(sim.g(), DEFAULT_G);
        assert_eq!(sim.integrator(), Integrator::VelocityVerlet);
    }

    #[test]
    fn update_on_empty_is_noop() {
        let mut sim = Simulation::new();
        sim.update(1.0);
        assert!(sim.is_empty());
        assert_eq!(sim.steps(), 0);
    }

    #[test]
    fn g_is_accepted_unchecked() {
        let mut sim = Simulation::new();
        sim.set_g(-3.0);
        assert_eq!(sim.g(), -3.0);
    }

    #[test]
    fn add_and_clear() {
        let mut sim = Simulation::new();
        sim.add_body(body_at(0.0, 1.0));
        sim.add_body(body_at(1.0, 1.0));
        assert_eq!(sim.len(), 2);
        sim.clear_bodies();
        assert!(sim.is_empty());
    }

    #[test]
    fn first_drift_uses_stored_acceleration() {
        let mut sim = Simulation::new();
        sim.set_g(1.0);
        sim.add_body(body_at(0.0, 1.0));
        sim.add_body(body_at(1.0, 1.0));
        sim.update(0.01);

        // at rest with zero acceleration: positions hold, velocities pick up half a kick
        assert_eq!(sim.bodies()[0].position.x, 0.0);
        assert_eq!(sim.bodies()[1].position.x, 1.0);
        assert!((sim.bodies()[0].velocity.x - 0.005).abs() < 1e-15);
    }

    #[test]
    fn primed_first_step_moves_immediately() {
        let mut sim = Simulation::new();
        sim.set_g(1.0);
        sim.add_body(body_at(0.0, 1.0));
        sim.add_body(body_at(1.0, 1.0));
        sim.prime_accelerations();
        assert_eq!(sim.bodies()[0].acceleration, DVec3::new(1.0, 0.0, 0.0));

        sim.update(0.01);
        assert!(sim.bodies()[0].position.x > 0.0);
        assert!(sim.bodies()[1].position.x < 1.0);
    }

    #[test]
    fn clock_advances_with_each_step() {
        let mut sim = Simulation::new();
        sim.add_body(body_at(0.0, 1.0));
        sim.update(0.25);
        sim.update(0.25);
        assert_eq!(sim.steps(), 2);
        assert_eq!(sim.elapsed_time(), 0.5);
    }

    #[test]
    fn g_change_applies_on_next_update() {
        let mut attract = Simulation::new();
        let mut repel = Simulation::new();
        for sim in [&mut attract, &mut repel] {
            sim.set_g(1.0);
            sim.add_body(body_at(0.0, 1.0));
            sim.add_body(body_at(1.0, 1.0));
            sim.update(0.01);
        }
        repel.set_g(-1.0);
        attract.update(0.01);
        repel.update(0.01);

        assert!(repel.bodies()[0].velocity.x < attract.bodies()[0].velocity.x);
    }

    #[test]
    fn removal_keeps_order() {
        let mut sim = Simulation::new();
        sim.add_body(body_at(0.0, 1.0));
        sim.add_body(body_at(1.0, 0.0));
        sim.add_body(body_at(2.0, 1.0));

        assert_eq!(sim.remove_marked_bodies(), 1);
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.bodies()[0].position.x, 0.0);
        assert_eq!(sim.bodies()[1].position.x, 2.0);
        assert_eq!(sim.remove_marked_bodies(), 0);
    }

    #[test]
    fn zeroing_mass_through_view_deletes() {
        let mut sim = Simulation::new();
        sim.reset_to_solar_system();
        sim.bodies_mut()[3].mass = 0.0;
        sim.remove_marked_bodies();
        assert_eq!(sim.len(), 8);
    }

    #[test]
    fn reset_restarts_clock() {
        let mut sim = Simulation::new();
        sim.reset_to_solar_system();
        sim.update(1.0);
        sim.reset_to_solar_system();
        assert_eq!(sim.steps(), 0);
        assert_eq!(sim.elapsed_time(), 0.0);
        assert_eq!(sim.bodies(), solar_system::reference_bodies().as_slice());
    }

    #[test]
    fn spawned_black_hole_is_flagged() {
        let mut sim = Simulation::new();
        sim.spawn_black_hole(DVec3::new(0.0, 0.0, 5.0));
        assert!(sim.bodies()[0].is_black_hole);
        assert_eq!(sim.bodies()[0].position.z, 5.0);
    }

    #[test]
    fn radius_scaling_skips_black_holes() {
        let mut sim = Simulation::new();
        sim.reset_to_solar_system();
        sim.spawn_black_hole(DVec3::ONE);
        sim.scale_planet_radii(2.0);

        assert_eq!(sim.bodies()[0].radius, 0.4);
        assert_eq!(sim.bodies()[9].radius, 0.05);
    }

    #[test]
    fn instances_follow_bodies() {
        let mut sim = Simulation::new();
        sim.reset_to_solar_system();
        let instances = sim.instances();
        assert_eq!(instances.len(), 9);
        assert_eq!(instances[3].position, [1.5, 0.0, 0.0]);
    }
}
