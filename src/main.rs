//! Wavedrift - headless driver for the procedural water and particle scenes
//!
//! Samples a clock once per frame, advances the wave surface and the
//! particle buffer, and optionally records top-down snapshots.

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};

use wavedrift::cli::Args;
use wavedrift::clock::{Clock, FixedStepClock, SystemClock};
use wavedrift::error::{AnimError, AnimResult};
use wavedrift::scene::Scene;
use wavedrift::snapshot::render_top_down;

fn run(args: &Args) -> AnimResult<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        return Err(AnimError::invalid(
            "fps",
            format!("must be finite and > 0, got {}", args.fps),
        ));
    }

    let config = args.scene_config();
    let recording = args.recording_config();
    let mut scene = Scene::new(&config, args.seed)?;

    let mut clock: Box<dyn Clock> = if args.realtime {
        Box::new(SystemClock::new())
    } else {
        Box::new(FixedStepClock::new(args.fps))
    };
    let frame_interval = Duration::from_secs_f64(1.0 / args.fps);
    let stats_every = (args.fps.round() as u64).max(1);

    if let Some(rec) = &recording {
        info!(
            "Recording {}x{} snapshots every {} frames to {}",
            rec.width,
            rec.height,
            rec.every_n_frames,
            rec.output_dir.display()
        );
    }

    for frame in 0..args.frames {
        let frame_start = Instant::now();

        // Query the clock exactly once per frame
        let time_s = clock.elapsed_s();
        let state = scene.update(time_s);

        if let Some(rec) = &recording {
            if rec.captures(frame) {
                let snapshot = render_top_down(&scene, time_s, rec.width, rec.height);
                let path = rec.frame_path(frame);
                snapshot.save(&path)?;
                info!("Saved {}", path.display());
            }
        }

        if frame % stats_every == 0 {
            let (lo, hi) = scene.grid.height_range();
            info!(
                "t={:6.2}s surface [{:+.2}, {:+.2}] m, particles gen {}, prop {:?}",
                state.time_s, lo, hi, state.particle_generation, state.prop_position
            );
        }

        if args.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < frame_interval {
                thread::sleep(frame_interval - elapsed);
            }
        }
    }

    info!("Finished {} frames of '{}'", args.frames, scene.name);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
