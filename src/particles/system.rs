//! Particle motion policies and the per-frame tick.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use rand::Rng;

use super::buffer::{ParticleBuffer, ParticleVertex};
use crate::error::{ensure_finite, ensure_positive, AnimError, AnimResult};
use crate::params::{FallingConfig, OrbitingConfig, ParticleConfig};

/// Rule governing how every particle moves on a tick, fixed per system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPolicy {
    /// Straight down by the particle's velocity; below 0 teleports to `reset_height`
    Falling { reset_height: f64 },

    /// Revolve about the pivot by the particle's angular step, radius preserved
    Orbiting { default_pivot: DVec2 },
}

/// Owns N particles and advances all of them once per tick
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    policy: MotionPolicy,
    buffer: ParticleBuffer,
}

impl ParticleSystem {
    /// Seed a particle system for either policy from an injected random source
    pub fn new<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> AnimResult<Self> {
        match config {
            ParticleConfig::Falling(c) => Self::falling(c, rng),
            ParticleConfig::Orbiting(c) => Self::orbiting(c, rng),
        }
    }

    /// Rain: uniform in the box `[-h, h] × [0, reset_height] × [-h, h]`,
    /// velocity `-uniform(fall_speed)`
    pub fn falling<R: Rng + ?Sized>(config: &FallingConfig, rng: &mut R) -> AnimResult<Self> {
        config.validate()?;

        let h = config.half_extent_xz;
        let (min_speed, max_speed) = config.fall_speed;
        let mut positions = Vec::new();
        let mut velocities = Vec::new();
        positions
            .try_reserve_exact(config.count)
            .and_then(|_| velocities.try_reserve_exact(config.count))
            .map_err(|_| AnimError::InvalidParticleCount(config.count))?;

        for _ in 0..config.count {
            positions.push(DVec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(0.0..=config.reset_height),
                rng.gen_range(-h..=h),
            ));
            velocities.push(-rng.gen_range(min_speed..=max_speed));
        }

        Ok(Self {
            policy: MotionPolicy::Falling {
                reset_height: config.reset_height,
            },
            buffer: ParticleBuffer::new(positions, velocities)?,
        })
    }

    /// Motes: area-uniform in the annulus around `default_pivot`, random
    /// height within the band, angular step `±uniform(angular_speed)`
    pub fn orbiting<R: Rng + ?Sized>(config: &OrbitingConfig, rng: &mut R) -> AnimResult<Self> {
        config.validate()?;

        let pivot = config.default_pivot;
        let (r_in_sq, r_out_sq) = (
            config.inner_radius * config.inner_radius,
            config.outer_radius * config.outer_radius,
        );
        let (min_speed, max_speed) = config.angular_speed;
        let mut positions = Vec::new();
        let mut velocities = Vec::new();
        positions
            .try_reserve_exact(config.count)
            .and_then(|_| velocities.try_reserve_exact(config.count))
            .map_err(|_| AnimError::InvalidParticleCount(config.count))?;

        for _ in 0..config.count {
            let radius = rng.gen_range(r_in_sq..=r_out_sq).sqrt();
            let angle = rng.gen_range(0.0..TAU);
            positions.push(DVec3::new(
                pivot.x + angle.cos() * radius,
                rng.gen_range(config.height_band.0..=config.height_band.1),
                pivot.y + angle.sin() * radius,
            ));

            let speed = rng.gen_range(min_speed..=max_speed);
            velocities.push(if rng.gen_bool(0.5) { speed } else { -speed });
        }

        Ok(Self {
            policy: MotionPolicy::Orbiting {
                default_pivot: pivot,
            },
            buffer: ParticleBuffer::new(positions, velocities)?,
        })
    }

    /// Build a system from explicit state
    ///
    /// Falling systems require velocities <= 0 and heights within
    /// `[0, reset_height]`, so a tick can never leave that range.
    pub fn from_parts(
        policy: MotionPolicy,
        positions: Vec<DVec3>,
        velocities: Vec<f64>,
    ) -> AnimResult<Self> {
        match policy {
            MotionPolicy::Falling { reset_height } => {
                ensure_positive("reset_height", reset_height)?;
                if velocities.iter().any(|&v| v > 0.0) {
                    return Err(AnimError::invalid(
                        "velocities",
                        "falling particles need velocity <= 0",
                    ));
                }
                if positions.iter().any(|p| !(0.0..=reset_height).contains(&p.y)) {
                    return Err(AnimError::invalid(
                        "positions",
                        format!("falling particles need y within [0, {}]", reset_height),
                    ));
                }
            }
            MotionPolicy::Orbiting { default_pivot } => {
                ensure_finite("default_pivot.x", default_pivot.x)?;
                ensure_finite("default_pivot.y", default_pivot.y)?;
            }
        }

        Ok(Self {
            policy,
            buffer: ParticleBuffer::new(positions, velocities)?,
        })
    }

    /// Advance every particle once
    ///
    /// `step` scales each particle's velocity (1.0 = one frame's worth).
    /// `pivot` is the current planar position of the object orbiting motes
    /// follow; ignored by falling systems. When absent or non-finite the
    /// policy's default pivot is used.
    pub fn tick(&mut self, step: f64, pivot: Option<DVec2>) {
        // Motion only runs forward
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };

        match self.policy {
            MotionPolicy::Falling { reset_height } => {
                for (position, velocity) in self.buffer.entries_mut() {
                    position.y += velocity * step;
                    if position.y < 0.0 {
                        position.y = reset_height;
                    }
                }
            }
            MotionPolicy::Orbiting { default_pivot } => {
                let pivot = pivot
                    .filter(|p| p.is_finite())
                    .unwrap_or(default_pivot);
                for (position, velocity) in self.buffer.entries_mut() {
                    revolve(position, pivot, velocity * step);
                }
            }
        }

        self.buffer.mark_dirty();
    }

    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Read-only view of the current positions
    pub fn positions(&self) -> &[DVec3] {
        self.buffer.positions()
    }

    pub fn velocities(&self) -> &[f64] {
        self.buffer.velocities()
    }

    /// Number of ticks applied; changes whenever positions change
    pub fn generation(&self) -> u64 {
        self.buffer.generation()
    }

    /// Positions in renderer layout
    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.buffer.vertices()
    }
}

/// Rotate `position` about `pivot` in the XZ plane by `delta` radians
fn revolve(position: &mut DVec3, pivot: DVec2, delta: f64) {
    let dx = position.x - pivot.x;
    let dz = position.z - pivot.y;
    let radius = dx.hypot(dz);

    if radius == 0.0 {
        // Degenerate: no direction to rotate, stay on the pivot
        position.x = pivot.x;
        position.z = pivot.y;
        return;
    }

    let angle = dz.atan2(dx) + delta;
    position.x = pivot.x + angle.cos() * radius;
    position.z = pivot.y + angle.sin() * radius;
}
