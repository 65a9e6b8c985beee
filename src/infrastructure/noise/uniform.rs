use rand::Rng;

use crate::domain::ports::noise_source::NoiseSource;

/// Thread-local uniform noise. Each call samples the calling thread's
/// generator, so concurrent derivations never contend on shared state.
pub struct UniformNoise;

impl NoiseSource for UniformNoise {
    fn sample(&self, amplitude: f64) -> f64 {
        rand::thread_rng().gen_range(-amplitude..=amplitude)
    }
}
