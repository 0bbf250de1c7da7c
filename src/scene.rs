//! Per-frame scene driver: wave surface, particles, and the moving props they follow.

use glam::{DVec2, DVec3};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::AnimResult;
use crate::params::{CirclePath, ParticleTiming, PointStyle, SceneConfig};
use crate::particles::{MotionPolicy, ParticleSystem};
use crate::wave::{WaveField, WaveGrid};

/// Snapshot of what one update produced, for the render layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Elapsed time this frame was computed for (seconds)
    pub time_s: f64,

    /// Seconds since the previous update (0 on the first frame)
    pub dt_s: f64,

    /// Position of the moving prop, `None` when no prop is present
    pub prop_position: Option<DVec3>,

    /// Position of the dynamic point light
    pub light_position: DVec3,

    /// Grid generation after this update; changed → re-upload vertices
    pub grid_generation: u64,

    /// Particle generation after this update; changed → re-upload points
    pub particle_generation: u64,
}

/// Wave surface plus particle system, advanced together once per frame
pub struct Scene {
    pub name: &'static str,
    pub grid: WaveGrid,
    pub field: WaveField,
    pub particles: ParticleSystem,
    pub point_style: PointStyle,
    timing: ParticleTiming,
    prop_path: Option<CirclePath>,
    light_path: CirclePath,
    last_time_s: Option<f64>,
}

impl Scene {
    /// Build every component from `config`, seeding particles from `seed`
    pub fn new(config: &SceneConfig, seed: u64) -> AnimResult<Self> {
        config.validate()?;

        let field = WaveField::new(config.wave.clone())?;
        let mut grid = WaveGrid::new(&config.grid);
        grid.update(&field, 0.0);

        let mut rng = StdRng::seed_from_u64(seed);
        let particles = ParticleSystem::new(&config.particles, &mut rng)?;

        info!(
            "Scene '{}': {}x{} grid, {} particles ({:?}), seed {}",
            config.name,
            grid.resolution(),
            grid.resolution(),
            particles.len(),
            particles.policy(),
            seed
        );

        if config.prop_path.is_none() {
            if let MotionPolicy::Orbiting { default_pivot } = particles.policy() {
                warn!(
                    "No prop in scene '{}', motes orbit the default pivot {:?}",
                    config.name, default_pivot
                );
            }
        }

        Ok(Self {
            name: config.name,
            grid,
            field,
            particles,
            point_style: config.point_style,
            timing: config.timing,
            prop_path: config.prop_path,
            light_path: config.light_path,
            last_time_s: None,
        })
    }

    /// Remove the moving prop (e.g. its model failed to load)
    pub fn detach_prop(&mut self) {
        self.prop_path = None;
    }

    /// Advance the scene to elapsed time `time_s`
    ///
    /// Order: surface heights, then prop (the orbit pivot), then one particle tick.
    pub fn update(&mut self, time_s: f64) -> FrameState {
        let dt_s = self
            .last_time_s
            .map(|last| (time_s - last).max(0.0))
            .unwrap_or(0.0);
        self.last_time_s = Some(time_s);

        self.grid.update(&self.field, time_s);

        let prop_position = self.prop_path.map(|path| path.position(time_s));
        let pivot = prop_position.map(|p| DVec2::new(p.x, p.z));

        let step = self.timing.step(dt_s);
        self.particles.tick(step, pivot);

        let state = FrameState {
            time_s,
            dt_s,
            prop_position,
            light_position: self.light_path.position(time_s),
            grid_generation: self.grid.generation(),
            particle_generation: self.particles.generation(),
        };
        debug!("Frame t={:.3}s dt={:.4}s step={:.3}", time_s, dt_s, step);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        FallingConfig, GridConfig, OrbitingConfig, ParticleConfig, ScenePreset,
    };

    fn small(mut config: SceneConfig) -> SceneConfig {
        config.grid = GridConfig {
            size_m: 20.0,
            segments: 8,
        };
        config.particles.set_count(64);
        config
    }

    #[test]
    fn test_scene_creation_for_all_presets() {
        for preset in ScenePreset::ALL {
            let scene = Scene::new(&small(preset.config()), 1).unwrap();
            assert_eq!(scene.particles.len(), 64);
            assert_eq!(scene.grid.vertices.len(), 81);
        }
    }

    #[test]
    fn test_update_bumps_generations() {
        let mut scene = Scene::new(&small(ScenePreset::Ocean.config()), 5).unwrap();
        let first = scene.update(0.0);
        let second = scene.update(1.0 / 60.0);

        assert!(second.grid_generation > first.grid_generation);
        assert_eq!(second.particle_generation, first.particle_generation + 1);
        assert_eq!(first.dt_s, 0.0);
        assert!((second.dt_s - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_ocean_prop_follows_circle() {
        let mut scene = Scene::new(&small(ScenePreset::Ocean.config()), 5).unwrap();
        let state = scene.update(std::f64::consts::PI);

        // sin(π/2)·5, cos(π/2)·5 at t = π with ω = 0.5
        let prop = state.prop_position.unwrap();
        assert!((prop.x - 5.0).abs() < 1e-12);
        assert!(prop.z.abs() < 1e-12);

        let light = state.light_position;
        assert!((light.x - 10.0).abs() < 1e-12);
        assert_eq!(light.y, 10.0);
    }

    #[test]
    fn test_rain_scene_keeps_drops_in_range() {
        let mut config = small(ScenePreset::Swamp.config());
        config.particles = ParticleConfig::Falling(FallingConfig {
            count: 128,
            ..Default::default()
        });
        let mut scene = Scene::new(&config, 9).unwrap();

        for frame in 0..300 {
            scene.update(frame as f64 / 60.0);
        }
        assert!(scene
            .particles
            .positions()
            .iter()
            .all(|p| (0.0..=50.0).contains(&p.y)));
    }

    #[test]
    fn test_motes_follow_moving_prop() {
        let mut config = small(ScenePreset::Desert.config());
        let path = CirclePath::new(3.0, 0.2, 2.0);
        config.prop_path = Some(path);
        let mut scene = Scene::new(&config, 2).unwrap();

        // Radius about the pivot is preserved within each tick
        for frame in 1..50 {
            let t = frame as f64 / 60.0;
            let pivot = path.pivot(t);
            let before: Vec<f64> = scene
                .particles
                .positions()
                .iter()
                .map(|p| DVec2::new(p.x - pivot.x, p.z - pivot.y).length())
                .collect();
            scene.update(t);
            for (p, r0) in scene.particles.positions().iter().zip(before) {
                let r1 = DVec2::new(p.x - pivot.x, p.z - pivot.y).length();
                assert!((r1 - r0).abs() < 1e-9 * r0.max(1.0));
            }
        }
    }

    #[test]
    fn test_detached_prop_falls_back_to_default_pivot() {
        let mut config = small(ScenePreset::Desert.config());
        config.particles = ParticleConfig::Orbiting(OrbitingConfig {
            count: 16,
            default_pivot: DVec2::new(1.0, 1.0),
            ..Default::default()
        });
        let mut scene = Scene::new(&config, 4).unwrap();
        scene.detach_prop();

        let pivot = DVec2::new(1.0, 1.0);
        let before: Vec<f64> = scene
            .particles
            .positions()
            .iter()
            .map(|p| DVec2::new(p.x - pivot.x, p.z - pivot.y).length())
            .collect();

        let state = scene.update(0.5);
        assert!(state.prop_position.is_none());
        for (p, r0) in scene.particles.positions().iter().zip(before) {
            let r1 = DVec2::new(p.x - pivot.x, p.z - pivot.y).length();
            assert!((r1 - r0).abs() < 1e-9 * r0.max(1.0));
        }
    }

    #[test]
    fn test_scaled_timing_moves_with_elapsed_time() {
        let mut config = small(ScenePreset::Ocean.config());
        config.timing = ParticleTiming::Scaled {
            reference_fps: 60.0,
        };
        let mut scene = Scene::new(&config, 8).unwrap();

        // First frame has dt = 0: nothing moves
        let before = scene.particles.positions().to_vec();
        scene.update(0.0);
        assert_eq!(scene.particles.positions(), &before[..]);

        // Two reference frames elapse: each drop falls twice its velocity or resets
        scene.update(1.0 / 30.0);
        let after = scene.particles.positions();
        for ((b, a), &v) in before.iter().zip(after).zip(scene.particles.velocities()) {
            let expected = b.y + 2.0 * v;
            if expected < 0.0 {
                assert_eq!(a.y, 50.0);
            } else {
                assert!((a.y - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = small(ScenePreset::Ocean.config());
        config.particles.set_count(0);
        assert!(Scene::new(&config, 0).is_err());
    }
}
