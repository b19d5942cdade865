//! Interactive N-body gravity engine
//!
//! Exact pairwise Newtonian gravity with a simplified relativistic correction
//! near black holes, advanced by velocity Verlet at a fixed physics step.
//! Units are AU, days and solar masses.
//!
//! A front end owns one [`Simulation`], feeds it fixed steps from a
//! [`common::FixedTimestep`], and reads [`Simulation::bodies`] or
//! [`Simulation::instances`] to draw.

pub mod body;
pub mod diagnostics;
pub mod forces;
pub mod instance;
pub mod integrator;
pub mod relativity;
pub mod simulation;
pub mod solar_system;

pub use body::Body;
pub use diagnostics::Diagnostics;
pub use instance::BodyInstance;
pub use integrator::Integrator;
pub use relativity::RelativityConfig;
pub use simulation::{compute_accelerations, Simulation};
