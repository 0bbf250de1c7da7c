//! Particle system parameters for rain and orbiting motes.

use glam::{DVec2, Vec3};

use super::wave::rgb_from_hex;
use crate::error::{
    ensure_finite, ensure_non_negative, ensure_positive, ensure_sampleable, AnimError, AnimResult,
};

/// Rain: particles seeded in a box and falling straight down
#[derive(Debug, Clone)]
pub struct FallingConfig {
    /// Number of drops
    pub count: usize,

    /// Half width of the seeding box on X and Z (meters)
    /// Drops are seeded in [-half, half] on both axes
    pub half_extent_xz: f64,

    /// Height a drop is teleported to when it passes below 0 (meters).
    /// Also the top of the seeding box.
    pub reset_height: f64,

    /// Fall speed range (meters per tick, positive magnitudes)
    /// Each drop gets `-uniform(min, max)` once at creation
    pub fall_speed: (f64, f64),
}

impl Default for FallingConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            half_extent_xz: 50.0,
            reset_height: 50.0,
            fall_speed: (0.2, 0.8),
        }
    }
}

impl FallingConfig {
    pub fn validate(&self) -> AnimResult<()> {
        if self.count == 0 {
            return Err(AnimError::InvalidParticleCount(self.count));
        }
        ensure_non_negative("half_extent_xz", self.half_extent_xz)?;
        ensure_sampleable("half_extent_xz", -self.half_extent_xz, self.half_extent_xz)?;
        ensure_positive("reset_height", self.reset_height)?;
        ensure_sampleable("reset_height", 0.0, self.reset_height)?;
        // Every drop must actually fall
        ensure_positive("fall_speed", self.fall_speed.0)?;
        validate_range("fall_speed", self.fall_speed)
    }
}

/// Motes revolving around a moving pivot
#[derive(Debug, Clone)]
pub struct OrbitingConfig {
    /// Number of motes
    pub count: usize,

    /// Inner radius of the seeding annulus (meters)
    pub inner_radius: f64,

    /// Outer radius of the seeding annulus (meters)
    pub outer_radius: f64,

    /// Height band motes are seeded in (meters, min..max)
    pub height_band: (f64, f64),

    /// Angular step magnitude range (radians per tick)
    /// Each mote gets `±uniform(min, max)` with a random sign
    pub angular_speed: (f64, f64),

    /// Pivot used for seeding and whenever the pivot object is absent
    pub default_pivot: DVec2,
}

impl Default for OrbitingConfig {
    fn default() -> Self {
        Self {
            count: 2_000,
            inner_radius: 2.0,
            outer_radius: 15.0,
            height_band: (0.5, 8.0),
            angular_speed: (0.0015, 0.0025),
            default_pivot: DVec2::ZERO,
        }
    }
}

impl OrbitingConfig {
    pub fn validate(&self) -> AnimResult<()> {
        if self.count == 0 {
            return Err(AnimError::InvalidParticleCount(self.count));
        }
        ensure_non_negative("inner_radius", self.inner_radius)?;
        ensure_non_negative("outer_radius", self.outer_radius)?;
        if self.inner_radius > self.outer_radius {
            return Err(AnimError::invalid(
                "inner_radius",
                format!(
                    "must not exceed outer_radius ({} > {})",
                    self.inner_radius, self.outer_radius
                ),
            ));
        }
        // Seeding samples the squared radius
        ensure_sampleable(
            "outer_radius",
            self.inner_radius * self.inner_radius,
            self.outer_radius * self.outer_radius,
        )?;
        ensure_finite("height_band.0", self.height_band.0)?;
        ensure_finite("height_band.1", self.height_band.1)?;
        if self.height_band.0 > self.height_band.1 {
            return Err(AnimError::invalid("height_band", "min exceeds max"));
        }
        ensure_sampleable("height_band", self.height_band.0, self.height_band.1)?;
        validate_range("angular_speed", self.angular_speed)?;
        ensure_finite("default_pivot.x", self.default_pivot.x)?;
        ensure_finite("default_pivot.y", self.default_pivot.y)
    }
}

/// Motion policy selection plus its configuration
#[derive(Debug, Clone)]
pub enum ParticleConfig {
    Falling(FallingConfig),
    Orbiting(OrbitingConfig),
}

impl ParticleConfig {
    pub fn count(&self) -> usize {
        match self {
            ParticleConfig::Falling(c) => c.count,
            ParticleConfig::Orbiting(c) => c.count,
        }
    }

    pub fn set_count(&mut self, count: usize) {
        match self {
            ParticleConfig::Falling(c) => c.count = count,
            ParticleConfig::Orbiting(c) => c.count = count,
        }
    }

    pub fn validate(&self) -> AnimResult<()> {
        match self {
            ParticleConfig::Falling(c) => c.validate(),
            ParticleConfig::Orbiting(c) => c.validate(),
        }
    }
}

/// How elapsed time couples to per-particle velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleTiming {
    /// Velocity is applied once per tick regardless of frame duration
    PerFrame,

    /// Velocity is scaled by `dt * reference_fps`, so motion matches
    /// `PerFrame` at the reference rate and stays frame-rate independent
    Scaled { reference_fps: f64 },
}

impl Default for ParticleTiming {
    fn default() -> Self {
        Self::PerFrame
    }
}

impl ParticleTiming {
    /// Step multiplier to pass to `ParticleSystem::tick` for a frame of `dt_s` seconds
    pub fn step(&self, dt_s: f64) -> f64 {
        match *self {
            ParticleTiming::PerFrame => 1.0,
            ParticleTiming::Scaled { reference_fps } => dt_s * reference_fps,
        }
    }
}

/// Point sprite appearance (consumed by the snapshot rasterizer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub color: Vec3,

    /// Sprite size in world units (meters)
    pub size_m: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: rgb_from_hex(0x00ff00), // Acid green
            size_m: 0.2,
        }
    }
}

fn validate_range(name: &'static str, (min, max): (f64, f64)) -> AnimResult<()> {
    ensure_non_negative(name, min)?;
    ensure_non_negative(name, max)?;
    if min > max {
        return Err(AnimError::invalid(
            name,
            format!("min exceeds max ({} > {})", min, max),
        ));
    }
    ensure_sampleable(name, min, max)
}
