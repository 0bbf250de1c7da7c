//! Headless top-down snapshots of the surface and particles, written as PNG.

use std::path::Path;

use glam::Vec3;

use crate::error::AnimResult;
use crate::params::ColorRamp;
use crate::scene::Scene;

/// RGBA8 image of one frame, looking straight down the -Y axis
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Snapshot {
    /// RGBA value at pixel (x, y), `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        self.pixels.get(i..i + 4)?.try_into().ok()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    /// Write the snapshot as PNG
    pub fn save(&self, path: &Path) -> AnimResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}

/// Convert linear [0, 1] RGB to opaque RGBA8
pub fn to_rgba8(color: Vec3) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Rasterize the scene at `time_s` over the full plane extent
///
/// Each pixel samples the wave field at its centre and takes the palette
/// color (UV ramps use the pixel's v coordinate, height ramps the displaced
/// height). Particles inside the plane are splatted on top as squares of
/// their sprite size, at least one pixel wide.
pub fn render_top_down(scene: &Scene, time_s: f64, width: u32, height: u32) -> Snapshot {
    let mut snapshot = Snapshot {
        width,
        height,
        pixels: vec![0; width as usize * height as usize * 4],
    };
    if width == 0 || height == 0 {
        return snapshot;
    }

    let size = scene.grid.size_m();
    let half = size / 2.0;
    let field = &scene.field;
    let uv_ramp = matches!(field.params().palette.ramp, ColorRamp::Uv { .. });

    for py in 0..height {
        let z = -half + (py as f64 + 0.5) / height as f64 * size;
        let v = 1.0 - (z + half) / size;
        for px in 0..width {
            let x = -half + (px as f64 + 0.5) / width as f64 * size;
            let color = if uv_ramp {
                field.color(v)
            } else {
                field.color(field.displacement(x, z, time_s))
            };
            snapshot.put(px, py, to_rgba8(color));
        }
    }

    let point_color = to_rgba8(scene.point_style.color);
    let splat = ((scene.point_style.size_m as f64 / size * width as f64).round() as u32).max(1);
    for p in scene.particles.positions() {
        let u = (p.x + half) / size;
        let w = (p.z + half) / size;
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&w) {
            continue;
        }
        let cx = (u * width as f64) as u32;
        let cy = (w * height as f64) as u32;
        for sy in cy..(cy + splat).min(height) {
            for sx in cx..(cx + splat).min(width) {
                snapshot.put(sx, sy, point_color);
            }
        }
    }

    snapshot
}
