//! Headless driver for the gravity engine
//!
//! Runs the same frame loop a windowed front end would, without a window:
//! each frame applies pending edits, runs as many fixed physics steps as the
//! frame clock allows, sweeps deleted bodies, then builds the instance buffer
//! a renderer would upload.
//!
//! Example:
//!   RUST_LOG=info gravity_sim --duration 30 --speed 10 --black-hole 3 0 0.5

use anyhow::{ensure, Result};
use clap::Parser;
use common::constants::PHYSICS_DT;
use common::FixedTimestep;
use glam::DVec3;
use gravity_sim::solar_system::SOLAR_SYSTEM;
use gravity_sim::{Body, Simulation};
use log::{info, trace};

#[derive(Parser, Debug)]
#[command(version, about = "Run the reference solar system through the fixed-step frame loop")]
struct Args {
    /// Wall-clock seconds to run for
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// Simulated display frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Fixed physics step, in days
    #[arg(long, default_value_t = PHYSICS_DT)]
    physics_dt: f64,

    /// Simulation speed multiplier (days of physics per wall-clock second)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Override the gravitational constant
    #[arg(long, allow_negative_numbers = true)]
    gravity: Option<f64>,

    /// Drop a black hole at this position (AU)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    black_hole: Option<Vec<f64>>,

    /// Frame on which the black hole appears
    #[arg(long, default_value_t = 0)]
    black_hole_frame: u64,

    /// Clamp frame times above this many seconds
    #[arg(long)]
    max_frame_time: Option<f64>,

    /// Log a diagnostics line every this many frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

/// Validate the arguments and return the number of frames to run
fn frame_count(args: &Args) -> Result<u64> {
    ensure!(args.fps > 0.0, "--fps must be positive, got {}", args.fps);
    ensure!(args.physics_dt > 0.0, "--physics-dt must be positive, got {}", args.physics_dt);
    ensure!(args.speed > 0.0, "--speed must be positive, got {}", args.speed);
    ensure!(args.duration >= 0.0, "--duration must not be negative");

    let frames = (args.duration * args.fps).round() as u64;
    if args.black_hole.is_some() {
        ensure!(
            args.black_hole_frame < frames,
            "--black-hole-frame {} is past the last frame ({} frames)",
            args.black_hole_frame,
            frames
        );
    }
    Ok(frames)
}

/// Drop the labels of bodies about to be swept, keeping the rest aligned
fn sweep_labels(labels: &mut Vec<&'static str>, bodies: &[Body]) {
    let mut live = bodies.iter().map(|body| !body.is_marked_for_removal());
    labels.retain(|_| live.next().unwrap_or(true));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let frames = frame_count(&args)?;

    let mut simulation = Simulation::new();
    simulation.reset_to_solar_system();
    let mut labels: Vec<&'static str> = SOLAR_SYSTEM.iter().map(|planet| planet.name).collect();
    if let Some(g) = args.gravity {
        simulation.set_g(g);
    }

    let mut clock = FixedTimestep::new(args.physics_dt).with_speed(args.speed);
    clock.max_frame_time = args.max_frame_time;

    let frame_time = 1.0 / args.fps;
    let initial = simulation.diagnostics();

    info!(
        "{} bodies, G={}, {} at dt={} days, {} frames",
        simulation.len(),
        simulation.g(),
        simulation.integrator(),
        clock.step(),
        frames
    );
    info!("initial: {initial}");

    for frame in 0..frames {
        // edits
        if frame == args.black_hole_frame {
            if let Some(p) = &args.black_hole {
                simulation.spawn_black_hole(DVec3::new(p[0], p[1], p[2]));
                labels.push("black hole");
            }
        }

        // physics
        let steps = clock.advance(frame_time);
        for _ in 0..steps {
            simulation.update(clock.step());
        }

        // removal
        sweep_labels(&mut labels, simulation.bodies());
        simulation.remove_marked_bodies();

        // read for rendering
        let instances = simulation.instances();
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        trace!(
            "frame {frame}: {steps} step(s), {} instance bytes, alpha={:.3}",
            bytes.len(),
            clock.alpha()
        );

        if args.report_every > 0 && frame % args.report_every == 0 {
            let now = simulation.diagnostics();
            info!(
                "day {:>9.3}: {now} drift={:.3e}",
                simulation.elapsed_time(),
                now.energy_drift_from(&initial)
            );
        }
    }

    let last = simulation.diagnostics();
    info!(
        "finished after {} steps ({:.3} days): {last} drift={:.3e}",
        simulation.steps(),
        simulation.elapsed_time(),
        last.energy_drift_from(&initial)
    );

    for (name, body) in labels.iter().zip(simulation.bodies()) {
        info!(
            "{name:>10}: r=({:8.4}, {:8.4}, {:8.4}) |v|={:.5}",
            body.position.x,
            body.position.y,
            body.position.z,
            body.velocity.length()
        );
    }

    Ok(())
}
