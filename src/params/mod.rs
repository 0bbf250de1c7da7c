//! Parameter definitions with physical units and documented semantics.
//!
//! Every scene constant lives here with:
//! - World units (meters, seconds, radians per tick)
//! - Documented ranges and meanings
//! - A `validate()` that rejects values the animation core cannot use

mod particles;
mod render;
mod scene;
mod wave;

// Re-export all types
pub use particles::{FallingConfig, OrbitingConfig, ParticleConfig, ParticleTiming, PointStyle};
pub use render::{GridConfig, RecordingConfig};
pub use scene::{CirclePath, SceneConfig, ScenePreset};
pub use wave::{rgb_from_hex, Axis, ColorRamp, Harmonic, Palette, Trig, WaveParams};
