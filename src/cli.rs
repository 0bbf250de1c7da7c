//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::params::{RecordingConfig, SceneConfig, ScenePreset};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavedrift")]
#[command(about = "Headless driver for procedural water and particle animation", long_about = None)]
pub struct Args {
    /// Scene preset: ocean (default), swamp, desert
    #[arg(long, value_name = "PRESET", default_value = "ocean")]
    pub scene: String,

    /// Number of frames to simulate
    #[arg(long, value_name = "FRAMES", default_value = "600")]
    pub frames: u64,

    /// Frame rate of the fixed-step clock (frames per second)
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: f64,

    /// Seed for particle initialization
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Override the preset's particle count
    #[arg(long, value_name = "COUNT")]
    pub particles: Option<usize>,

    /// Use the wall clock and pace frames in real time
    #[arg(long)]
    pub realtime: bool,

    /// Run without the moving prop (motes orbit the default pivot)
    #[arg(long)]
    pub no_prop: bool,

    /// Write top-down PNG snapshots into this directory
    #[arg(long, value_name = "DIR")]
    pub record: Option<PathBuf>,

    /// Snapshot every N frames when recording
    #[arg(long, value_name = "N", default_value = "30")]
    pub record_every: u64,

    /// Snapshot size in pixels (square)
    #[arg(long, value_name = "PIXELS", default_value = "512")]
    pub record_size: u32,
}

impl Args {
    /// Resolve the scene preset, falling back to ocean for unknown names
    pub fn parse_scene_preset(&self) -> ScenePreset {
        match self.scene.parse::<ScenePreset>() {
            Ok(preset) => preset,
            Err(e) => {
                warn!("{}; using ocean", e);
                ScenePreset::Ocean
            }
        }
    }

    /// Scene configuration with command-line overrides applied
    pub fn scene_config(&self) -> SceneConfig {
        let preset = self.parse_scene_preset();
        info!("Scene: {}", preset.name());

        let mut config = preset.config();
        if let Some(count) = self.particles {
            config.particles.set_count(count);
        }
        if self.no_prop {
            config.prop_path = None;
        }
        config
    }

    /// Create recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> Option<RecordingConfig> {
        self.record.as_ref().map(|dir| {
            let mut config = RecordingConfig::new(dir);
            config.every_n_frames = self.record_every;
            config.width = self.record_size;
            config.height = self.record_size;
            config
        })
    }
}
