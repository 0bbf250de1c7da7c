//! Harmonic displacement field and surface color policy.

use glam::Vec3;

use crate::error::AnimResult;
use crate::params::{ColorRamp, WaveParams};

/// Time-driven vertical displacement over the XZ plane
///
/// Stateless: every query is a pure function of `(x, z, t)` and the
/// parameters validated at construction.
#[derive(Debug, Clone)]
pub struct WaveField {
    params: WaveParams,
    amplitude_bound: f64,
}

impl WaveField {
    /// Create a wave field, rejecting invalid parameters
    pub fn new(params: WaveParams) -> AnimResult<Self> {
        params.validate()?;
        let amplitude_bound = params.amplitude_sum();
        Ok(Self {
            params,
            amplitude_bound,
        })
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Largest possible |displacement|
    pub fn amplitude_bound(&self) -> f64 {
        self.amplitude_bound
    }

    /// Vertical displacement at planar position `(x, z)` and time `t_s`
    ///
    /// Finite for all finite input. A term whose phase overflows contributes 0.
    pub fn displacement(&self, x: f64, z: f64, t_s: f64) -> f64 {
        let p = &self.params;
        if p.amplitude == 0.0 {
            return 0.0;
        }

        p.harmonics
            .iter()
            .map(|h| {
                let phase = h.axis.sample(x, z) * p.frequency * h.freq_multiplier
                    + t_s * h.time_multiplier;
                if !phase.is_finite() {
                    return 0.0;
                }
                h.amp_multiplier * p.amplitude * h.trig.apply(phase)
            })
            .sum()
    }

    /// Blend factor in [0, 1] for a UV v-coordinate or displaced height,
    /// depending on the palette's ramp
    pub fn blend_factor(&self, height_or_uv: f64) -> f32 {
        let value = height_or_uv as f32;
        let factor = match self.params.palette.ramp {
            ColorRamp::Uv { scale, bias } => value * scale + bias,
            ColorRamp::HeightSine { k } => (value * k).sin().abs(),
        };
        if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Surface color: linear blend from deep to shallow
    pub fn color(&self, height_or_uv: f64) -> Vec3 {
        let palette = &self.params.palette;
        palette
            .deep
            .lerp(palette.shallow, self.blend_factor(height_or_uv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{rgb_from_hex, Axis, Harmonic, Palette, Trig};

    fn swell() -> WaveField {
        WaveField::new(WaveParams::swell()).unwrap()
    }

    #[test]
    fn test_swell_phase_zero_baseline() {
        // sin(0)·0.8·1.5 + cos(0)·0.6·1.5 = 0.9 at the origin
        let field = swell();
        assert!((field.displacement(0.0, 0.0, 0.0) - 0.9).abs() < 1e-12);

        // At x = π (f = 0.5 → phase π/2): sin = 1, z = 0: cos = 1
        let y = field.displacement(std::f64::consts::PI, 0.0, 0.0);
        assert!((y - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_swell_matches_closed_form() {
        let field = swell();
        for i in 0..50 {
            let (x, z, t) = (i as f64 * 1.3 - 30.0, i as f64 * -0.7 + 12.0, i as f64 * 0.11);
            let expected =
                (x * 0.5 + t).sin() * 1.5 * 0.8 + (z * 0.5 + t * 1.5).cos() * 1.5 * 0.6;
            assert!((field.displacement(x, z, t) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_displacement_within_bound() {
        for params in [WaveParams::swell(), WaveParams::gooey()] {
            let field = WaveField::new(params).unwrap();
            let bound = field.amplitude_bound();
            for i in -40..40 {
                for j in -40..40 {
                    let t = (i * j) as f64 * 0.013;
                    let y = field.displacement(i as f64 * 0.9, j as f64 * 1.1, t);
                    assert!(y.is_finite());
                    assert!(y.abs() <= bound + 1e-12, "{} exceeds bound {}", y, bound);
                }
            }
        }
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let mut params = WaveParams::swell();
        params.amplitude = 0.0;
        let field = WaveField::new(params).unwrap();
        for i in 0..20 {
            let v = i as f64 * 3.7;
            assert_eq!(field.displacement(v, -v, v * 0.5), 0.0);
        }

        let flat = WaveField::new(WaveParams::flat()).unwrap();
        assert_eq!(flat.displacement(12.0, -3.0, 100.0), 0.0);
        assert_eq!(flat.amplitude_bound(), 0.0);
    }

    #[test]
    fn test_zero_frequency_is_spatially_uniform() {
        let mut params = WaveParams::swell();
        params.frequency = 0.0;
        let field = WaveField::new(params).unwrap();
        let a = field.displacement(-20.0, 4.0, 1.25);
        let b = field.displacement(33.0, -9.0, 1.25);
        assert!(a.is_finite());
        assert_eq!(a, b);
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        let field = swell();
        let huge = f64::MAX;
        assert!(field.displacement(huge, huge, huge).is_finite());
        assert!(field.displacement(-huge, 0.0, 1e300).is_finite());
    }

    #[test]
    fn test_gooey_diagonal_term() {
        let params = WaveParams {
            amplitude: 1.0,
            frequency: 1.0,
            harmonics: vec![Harmonic::new(Axis::XPlusZ, Trig::Sin, 1.0, 0.5, 1.0)],
            palette: Palette::default(),
        };
        let field = WaveField::new(params).unwrap();
        // Only x + z matters: swapping the coordinates changes nothing
        assert_eq!(field.displacement(1.0, 2.0, 3.0), field.displacement(2.0, 1.0, 3.0));
        assert!((field.displacement(1.0, 2.0, 2.0) - (3.0f64 + 1.0).sin()).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut params = WaveParams::gooey();
        params.frequency = -1.0;
        assert!(WaveField::new(params).is_err());
    }

    #[test]
    fn test_uv_color_ramp() {
        let field = swell();
        let deep = rgb_from_hex(0x003300);
        let shallow = rgb_from_hex(0x1e9e60);

        // v = 0 → 0.2 blend, v = 1 → fully shallow
        let c0 = field.color(0.0);
        assert!((c0 - deep.lerp(shallow, 0.2)).length() < 1e-6);
        let c1 = field.color(1.0);
        assert!((c1 - shallow).length() < 1e-6);
    }

    #[test]
    fn test_height_sine_color_ramp() {
        let field = WaveField::new(WaveParams::gooey()).unwrap();
        let palette = field.params().palette;

        // |sin(0)| = 0 → deep
        assert!((field.color(0.0) - palette.deep).length() < 1e-6);

        // k = 2: height π/4 → |sin(π/2)| = 1 → shallow
        let c = field.color(std::f64::consts::FRAC_PI_4);
        assert!((c - palette.shallow).length() < 1e-5);

        // Negative heights use the absolute value
        assert!((field.blend_factor(-0.3) - field.blend_factor(0.3)).abs() < 1e-6);
    }

    #[test]
    fn test_blend_factor_clamped() {
        let field = swell();
        assert_eq!(field.blend_factor(5.0), 1.0);
        assert_eq!(field.blend_factor(-5.0), 0.0);
        assert_eq!(field.blend_factor(f64::NAN), 0.0);
    }
}
