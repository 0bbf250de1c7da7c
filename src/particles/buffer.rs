//! Fixed-size particle state buffer.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use crate::error::{AnimError, AnimResult};

/// Point-cloud vertex for renderer upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
}

/// Positions and per-particle velocities, indexed `0..N`
///
/// N is fixed at creation. Only `ParticleSystem` mutates the contents;
/// the generation counter tells readers when the positions changed.
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    positions: Vec<DVec3>,
    velocities: Vec<f64>,
    generation: u64,
}

impl ParticleBuffer {
    pub fn new(positions: Vec<DVec3>, velocities: Vec<f64>) -> AnimResult<Self> {
        if positions.len() != velocities.len() {
            return Err(AnimError::BufferMismatch {
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        if positions.is_empty() {
            return Err(AnimError::InvalidParticleCount(0));
        }
        if positions.iter().any(|p| !p.is_finite()) {
            return Err(AnimError::invalid("positions", "must be finite"));
        }
        if velocities.iter().any(|v| !v.is_finite()) {
            return Err(AnimError::invalid("velocities", "must be finite"));
        }
        Ok(Self {
            positions,
            velocities,
            generation: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mutable positions paired with their frozen velocities
    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = (&mut DVec3, f64)> {
        self.positions
            .iter_mut()
            .zip(self.velocities.iter().copied())
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.generation += 1;
    }

    /// Positions narrowed to f32 for the renderer
    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.positions
            .iter()
            .map(|p| ParticleVertex {
                position: p.as_vec3().to_array(),
            })
            .collect()
    }
}
