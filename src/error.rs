//! Error types for scene construction and snapshot output.

use thiserror::Error;

/// Result type for animation core operations
pub type AnimResult<T> = Result<T, AnimError>;

/// Errors raised while building the animation core or writing snapshots.
///
/// Per-frame updates never fail; everything here surfaces at construction
/// time or from the headless snapshot writer.
#[derive(Error, Debug)]
pub enum AnimError {
    #[error("Particle count must be > 0, got {0}")]
    InvalidParticleCount(usize),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Particle buffer mismatch: {positions} positions, {velocities} velocities")]
    BufferMismatch { positions: usize, velocities: usize },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnimError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AnimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject non-finite values for a named parameter
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> AnimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnimError::invalid(name, format!("must be finite, got {}", value)))
    }
}

/// Reject negative or non-finite values for a named parameter
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> AnimResult<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(AnimError::invalid(name, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

/// Reject zero, negative, or non-finite values for a named parameter
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> AnimResult<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(AnimError::invalid(name, format!("must be > 0, got {}", value)));
    }
    Ok(())
}

/// Largest span a seeding range may cover; uniform sampling divides the
/// span by a value just under 1, so it must stay well inside f64 range
pub(crate) const MAX_SAMPLE_SPAN: f64 = f64::MAX / 4.0;

/// Reject `[low, high]` ranges whose width is not finite or too wide to sample
pub(crate) fn ensure_sampleable(name: &'static str, low: f64, high: f64) -> AnimResult<()> {
    ensure_finite(name, low)?;
    ensure_finite(name, high)?;
    let span = high - low;
    if !(span.is_finite() && span.abs() <= MAX_SAMPLE_SPAN) {
        return Err(AnimError::invalid(
            name,
            format!("range [{}, {}] is too wide to sample", low, high),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_checks() {
        assert!(ensure_finite("x", 1.0).is_ok());
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", -0.1).is_err());
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_sampleable_span() {
        assert!(ensure_sampleable("x", -50.0, 50.0).is_ok());
        assert!(ensure_sampleable("x", 0.0, 0.0).is_ok());
        assert!(ensure_sampleable("x", -f64::MAX, f64::MAX).is_err());
        assert!(ensure_sampleable("x", 0.0, f64::MAX).is_err());
        assert!(ensure_sampleable("x", 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = ensure_positive("frequency", -1.0).unwrap_err();
        assert!(err.to_string().contains("frequency"));

        let err = AnimError::InvalidParticleCount(0);
        assert_eq!(err.to_string(), "Particle count must be > 0, got 0");
    }
}
