//! Wavedrift library - Procedural water surface and particle animation core

pub mod cli;
pub mod clock;
pub mod error;
pub mod params;
pub mod particles;
pub mod scene;
pub mod snapshot;
pub mod wave;
