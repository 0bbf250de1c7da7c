//! Wave field harmonics and surface color palette.

use glam::Vec3;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, AnimError, AnimResult};

/// Planar coordinate a harmonic samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
    /// Diagonal term, `x + z`
    XPlusZ,
}

impl Axis {
    pub fn sample(self, x: f64, z: f64) -> f64 {
        match self {
            Axis::X => x,
            Axis::Z => z,
            Axis::XPlusZ => x + z,
        }
    }
}

/// Periodic function a harmonic uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    pub fn apply(self, phase: f64) -> f64 {
        match self {
            Trig::Sin => phase.sin(),
            Trig::Cos => phase.cos(),
        }
    }
}

/// One additive sinusoidal term of the displacement sum
///
/// Contribution: `amp_multiplier * amplitude * trig(axis(x,z) * frequency * freq_multiplier + t * time_multiplier)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    pub axis: Axis,
    pub trig: Trig,

    /// Spatial frequency scale relative to the field frequency (> 0)
    pub freq_multiplier: f64,

    /// Phase speed relative to elapsed seconds (> 0)
    pub time_multiplier: f64,

    /// Share of the field amplitude, in [0, 1]
    pub amp_multiplier: f64,
}

impl Harmonic {
    pub const fn new(
        axis: Axis,
        trig: Trig,
        freq_multiplier: f64,
        time_multiplier: f64,
        amp_multiplier: f64,
    ) -> Self {
        Self {
            axis,
            trig,
            freq_multiplier,
            time_multiplier,
            amp_multiplier,
        }
    }

    fn validate(&self) -> AnimResult<()> {
        ensure_positive("harmonic.freq_multiplier", self.freq_multiplier)?;
        ensure_positive("harmonic.time_multiplier", self.time_multiplier)?;
        ensure_finite("harmonic.amp_multiplier", self.amp_multiplier)?;
        if !(0.0..=1.0).contains(&self.amp_multiplier) {
            return Err(AnimError::invalid(
                "harmonic.amp_multiplier",
                format!("must be within [0, 1], got {}", self.amp_multiplier),
            ));
        }
        Ok(())
    }
}

/// Ocean swell: `sin(x·f + t)·0.8 + cos(z·f + 1.5t)·0.6`
pub const SWELL_HARMONICS: [Harmonic; 2] = [
    Harmonic::new(Axis::X, Trig::Sin, 1.0, 1.0, 0.8),
    Harmonic::new(Axis::Z, Trig::Cos, 1.0, 1.5, 0.6),
];

/// Swamp goo: two axis-aligned terms plus a diagonal term at half time rate
pub const GOOEY_HARMONICS: [Harmonic; 3] = [
    Harmonic::new(Axis::X, Trig::Sin, 1.0, 1.0, 0.5),
    Harmonic::new(Axis::Z, Trig::Cos, 1.3, 0.8, 0.3),
    Harmonic::new(Axis::XPlusZ, Trig::Sin, 0.7, 0.5, 0.2),
];

/// How a fragment value maps onto the deep → shallow blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRamp {
    /// Blend factor `v * scale + bias`, where `v` is the UV v-coordinate
    Uv { scale: f32, bias: f32 },

    /// Blend factor `|sin(height * k)|`, where `height` is the displaced y
    HeightSine { k: f32 },
}

/// Two-color gradient applied to the water surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Color at blend factor 0 (linear RGB, 0..1)
    pub deep: Vec3,

    /// Color at blend factor 1 (linear RGB, 0..1)
    pub shallow: Vec3,

    pub ramp: ColorRamp,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            deep: rgb_from_hex(0x003300),
            shallow: rgb_from_hex(0x1e9e60),
            ramp: ColorRamp::Uv {
                scale: 0.8,
                bias: 0.2,
            },
        }
    }
}

/// Convert a `0xRRGGBB` literal to an RGB vector in [0, 1]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Wave field parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Base wave height in meters (0 = flat surface)
    pub amplitude: f64,

    /// Base spatial frequency (radians per meter)
    pub frequency: f64,

    /// Ordered additive terms
    pub harmonics: Vec<Harmonic>,

    pub palette: Palette,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::swell()
    }
}

impl WaveParams {
    /// Gentle ocean swell (amplitude 1.5 m, frequency 0.5)
    pub fn swell() -> Self {
        Self {
            amplitude: 1.5,
            frequency: 0.5,
            harmonics: SWELL_HARMONICS.to_vec(),
            palette: Palette::default(),
        }
    }

    /// Gooey multi-harmonic swamp surface (amplitude 1.2 m, frequency 1.0)
    pub fn gooey() -> Self {
        Self {
            amplitude: 1.2,
            frequency: 1.0,
            harmonics: GOOEY_HARMONICS.to_vec(),
            palette: Palette {
                deep: rgb_from_hex(0x1a2b0f),
                shallow: rgb_from_hex(0x6b8e23),
                ramp: ColorRamp::HeightSine { k: 2.0 },
            },
        }
    }

    /// Still desert floor: no animated displacement
    pub fn flat() -> Self {
        Self {
            amplitude: 0.0,
            frequency: 0.0,
            harmonics: Vec::new(),
            palette: Palette {
                deep: rgb_from_hex(0xc2a060),
                shallow: rgb_from_hex(0xedc9af),
                ramp: ColorRamp::Uv {
                    scale: 0.8,
                    bias: 0.2,
                },
            },
        }
    }

    /// Sum of amplitude contributions, the bound on |displacement|
    pub fn amplitude_sum(&self) -> f64 {
        self.amplitude * self.harmonics.iter().map(|h| h.amp_multiplier).sum::<f64>()
    }

    /// Validate configuration (finite, non-negative amplitude and frequency, etc.)
    pub fn validate(&self) -> AnimResult<()> {
        ensure_non_negative("amplitude", self.amplitude)?;
        ensure_non_negative("frequency", self.frequency)?;
        for harmonic in &self.harmonics {
            harmonic.validate()?;
        }
        Ok(())
    }
}
