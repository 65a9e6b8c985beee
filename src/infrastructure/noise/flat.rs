use crate::domain::ports::noise_source::NoiseSource;

/// Zero-noise source: every sample is 0.0, so generated series collapse
/// to their deterministic centerline. Used in tests and anywhere a
/// reproducible sparkline is needed.
pub struct FlatNoise;

impl NoiseSource for FlatNoise {
    fn sample(&self, _amplitude: f64) -> f64 {
        0.0
    }
}
