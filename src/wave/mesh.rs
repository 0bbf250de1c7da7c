//! Water surface grid mesh displaced by the wave field each frame.

use bytemuck::{Pod, Zeroable};

use super::field::WaveField;
use crate::params::GridConfig;

/// Vertex data for the surface mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Regular grid over the XZ plane, centred at the origin
///
/// Base planar positions are fixed at construction; heights are derived
/// from the wave field on every `update` and never accumulated.
pub struct WaveGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Immutable base (x, z) per vertex, full precision
    base_xz: Vec<[f64; 2]>,
    segments: usize,
    size_m: f64,
    /// Bumped on every height update so the renderer knows to re-upload
    generation: u64,
}

impl WaveGrid {
    /// Create a flat grid with the given dimensions
    pub fn new(config: &GridConfig) -> Self {
        let segments = config.segments;
        let spacing = config.spacing_m();
        let half_size = config.size_m / 2.0;

        let mut vertices = Vec::with_capacity(config.vertex_count());
        let mut base_xz = Vec::with_capacity(config.vertex_count());
        let mut indices = Vec::with_capacity(segments * segments * 6);

        // Row iz = 0 is the far edge (z = -half), where v = 1
        for iz in 0..=segments {
            for ix in 0..=segments {
                let x = ix as f64 * spacing - half_size;
                let z = iz as f64 * spacing - half_size;

                base_xz.push([x, z]);
                vertices.push(Vertex {
                    position: [x as f32, 0.0, z as f32],
                    uv: [
                        ix as f32 / segments as f32,
                        1.0 - iz as f32 / segments as f32,
                    ],
                });
            }
        }

        // Generate triangle indices (counter-clockwise winding)
        for iz in 0..segments {
            for ix in 0..segments {
                let top_left = (iz * (segments + 1) + ix) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((iz + 1) * (segments + 1) + ix) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            base_xz,
            segments,
            size_m: config.size_m,
            generation: 0,
        }
    }

    /// Recompute every vertex height for elapsed time `t_s`
    pub fn update(&mut self, field: &WaveField, t_s: f64) {
        for (vertex, &[x, z]) in self.vertices.iter_mut().zip(&self.base_xz) {
            vertex.position[1] = field.displacement(x, z, t_s) as f32;
        }
        self.generation += 1;
    }

    /// Vertices per side
    pub fn resolution(&self) -> usize {
        self.segments + 1
    }

    /// Side length of the plane (meters)
    pub fn size_m(&self) -> f64 {
        self.size_m
    }

    /// Number of height updates applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// (min, max) height over the current surface
    pub fn height_range(&self) -> (f32, f32) {
        self.vertices
            .iter()
            .map(|v| v.position[1])
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            })
    }

    /// Raw vertex bytes, ready for a GPU vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
