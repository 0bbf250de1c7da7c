//! Scene presets bundling wave, particle, and prop parameters.

use std::str::FromStr;

use glam::{DVec2, DVec3};

use super::particles::{FallingConfig, OrbitingConfig, ParticleConfig, ParticleTiming, PointStyle};
use super::render::GridConfig;
use super::wave::{rgb_from_hex, WaveParams};
use crate::error::{ensure_finite, ensure_non_negative, AnimError, AnimResult};

/// Horizontal circular path: `(sin(ωt + φ)·r, h, cos(ωt + φ)·r)`
///
/// Drives the wandering prop (the orbit pivot) and the point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePath {
    /// Circle radius (meters)
    pub radius_m: f64,

    /// Angular speed (radians per second)
    pub angular_speed: f64,

    /// Constant height (meters)
    pub height_m: f64,

    /// Phase offset (radians)
    pub phase: f64,
}

impl CirclePath {
    pub const fn new(radius_m: f64, angular_speed: f64, height_m: f64) -> Self {
        Self {
            radius_m,
            angular_speed,
            height_m,
            phase: 0.0,
        }
    }

    /// Position on the path at `time_s`
    pub fn position(&self, time_s: f64) -> DVec3 {
        let angle = time_s * self.angular_speed + self.phase;
        DVec3::new(
            angle.sin() * self.radius_m,
            self.height_m,
            angle.cos() * self.radius_m,
        )
    }

    /// Planar (x, z) position, used as an orbit pivot
    pub fn pivot(&self, time_s: f64) -> DVec2 {
        let p = self.position(time_s);
        DVec2::new(p.x, p.z)
    }

    pub fn validate(&self) -> AnimResult<()> {
        ensure_non_negative("path.radius_m", self.radius_m)?;
        ensure_finite("path.angular_speed", self.angular_speed)?;
        ensure_finite("path.height_m", self.height_m)?;
        ensure_finite("path.phase", self.phase)
    }
}

/// Complete scene description
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub name: &'static str,
    pub grid: GridConfig,
    pub wave: WaveParams,
    pub particles: ParticleConfig,
    pub timing: ParticleTiming,
    pub point_style: PointStyle,

    /// Path of the loaded model; its planar position is the orbit pivot.
    /// `None` when the model is absent.
    pub prop_path: Option<CirclePath>,

    /// Path of the dynamic point light
    pub light_path: CirclePath,
}

impl SceneConfig {
    pub fn validate(&self) -> AnimResult<()> {
        self.grid.validate()?;
        self.wave.validate()?;
        self.particles.validate()?;
        if let ParticleTiming::Scaled { reference_fps } = self.timing {
            if !(reference_fps.is_finite() && reference_fps > 0.0) {
                return Err(AnimError::invalid(
                    "timing.reference_fps",
                    format!("must be finite and > 0, got {}", reference_fps),
                ));
            }
        }
        if let Some(path) = &self.prop_path {
            path.validate()?;
        }
        self.light_path.validate()
    }
}

/// The three shipped scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePreset {
    /// Swell under acid rain, skull drifting on the waves
    #[default]
    Ocean,

    /// Gooey multi-harmonic swamp under heavier rain
    Swamp,

    /// Flat desert with motes orbiting the wandering hammer
    Desert,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 3] = [ScenePreset::Ocean, ScenePreset::Swamp, ScenePreset::Desert];

    pub fn name(self) -> &'static str {
        match self {
            ScenePreset::Ocean => "ocean",
            ScenePreset::Swamp => "swamp",
            ScenePreset::Desert => "desert",
        }
    }

    pub fn config(self) -> SceneConfig {
        // Light circles the origin at 10 m, half a radian per second
        let light_path = CirclePath::new(10.0, 0.5, 10.0);

        match self {
            ScenePreset::Ocean => SceneConfig {
                name: self.name(),
                grid: GridConfig::default(),
                wave: WaveParams::swell(),
                particles: ParticleConfig::Falling(FallingConfig {
                    fall_speed: (0.2, 0.7),
                    ..Default::default()
                }),
                timing: ParticleTiming::PerFrame,
                point_style: PointStyle::default(),
                prop_path: Some(CirclePath::new(5.0, 0.5, -4.0)),
                light_path,
            },
            ScenePreset::Swamp => SceneConfig {
                name: self.name(),
                grid: GridConfig::default(),
                wave: WaveParams::gooey(),
                particles: ParticleConfig::Falling(FallingConfig::default()),
                timing: ParticleTiming::PerFrame,
                point_style: PointStyle {
                    color: rgb_from_hex(0x9acd32),
                    size_m: 0.15,
                },
                prop_path: Some(CirclePath::new(5.0, 0.5, -4.0)),
                light_path,
            },
            ScenePreset::Desert => SceneConfig {
                name: self.name(),
                grid: GridConfig::default(),
                wave: WaveParams::flat(),
                particles: ParticleConfig::Orbiting(OrbitingConfig::default()),
                timing: ParticleTiming::PerFrame,
                point_style: PointStyle {
                    color: rgb_from_hex(0x87cefa),
                    size_m: 0.3,
                },
                prop_path: Some(CirclePath::new(3.0, 0.2, 2.0)),
                light_path,
            },
        }
    }
}

impl FromStr for ScenePreset {
    type Err = AnimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ocean" => Ok(ScenePreset::Ocean),
            "swamp" => Ok(ScenePreset::Swamp),
            "desert" => Ok(ScenePreset::Desert),
            other => Err(AnimError::invalid(
                "scene",
                format!("unknown preset '{}' (expected ocean, swamp or desert)", other),
            )),
        }
    }
}
