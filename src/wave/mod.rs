//! Animated water surface: harmonic displacement field and the grid it drives.

mod field;
mod mesh;

// Re-export public types
pub use field::WaveField;
pub use mesh::{Vertex, WaveGrid};
