//! Particle buffers driven by a fixed motion policy (rain or orbiting motes).

mod buffer;
mod system;

// Re-export public types
pub use buffer::{ParticleBuffer, ParticleVertex};
pub use system::{MotionPolicy, ParticleSystem};
