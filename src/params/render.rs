//! Surface grid and recording configuration.

use std::path::PathBuf;

use crate::error::{ensure_positive, AnimError, AnimResult};

/// Water surface grid configuration
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Side length of the square plane (meters)
    pub size_m: f64,

    /// Cells per side (300 = 90,601 vertices)
    pub segments: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size_m: 75.0,
            segments: 300,
        }
    }
}

impl GridConfig {
    /// Spacing between neighbouring vertices (meters)
    pub fn spacing_m(&self) -> f64 {
        self.size_m / self.segments as f64
    }

    /// Total vertex count: (segments + 1)^2
    pub fn vertex_count(&self) -> usize {
        (self.segments + 1).pow(2)
    }

    pub fn validate(&self) -> AnimResult<()> {
        ensure_positive("grid.size_m", self.size_m)?;
        if self.segments == 0 {
            return Err(AnimError::invalid("grid.segments", "must be > 0"));
        }
        Ok(())
    }
}

/// Recording mode configuration (headless PNG snapshots)
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Write one snapshot every N frames
    pub every_n_frames: u64,

    /// Snapshot width (pixels)
    pub width: u32,

    /// Snapshot height (pixels)
    pub height: u32,
}

impl RecordingConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            every_n_frames: 30,
            width: 512,
            height: 512,
        }
    }

    /// Whether frame `frame` should be captured
    pub fn captures(&self, frame: u64) -> bool {
        frame % self.every_n_frames.max(1) == 0
    }

    /// Frame file path
    pub fn frame_path(&self, frame: u64) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame))
    }
}
