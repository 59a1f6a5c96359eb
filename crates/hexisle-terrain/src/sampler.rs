//! Per-tile height field sampling over coherent noise.

use noise::{NoiseFn, Simplex};

use crate::lattice::LatticeIndex;

/// Default lattice-to-noise frequency. Adjacent tiles sit 0.1 apart in noise space.
pub const DEFAULT_FREQUENCY: f64 = 0.1;

/// Default shaping exponent. Values above 1 flatten the field towards the low end.
pub const DEFAULT_EXPONENT: f64 = 1.3;

/// A scalar field over the lattice with values in `[0, 1]`.
///
/// Implementations must be pure: the same index always yields the same value
/// for the lifetime of the sampler.
pub trait HeightSampler {
    fn sample(&self, index: LatticeIndex) -> f64;
}

impl<F> HeightSampler for F
where
    F: Fn(LatticeIndex) -> f64,
{
    fn sample(&self, index: LatticeIndex) -> f64 {
        self(index)
    }
}

/// Samples a 2D noise function at `index * frequency`, normalizes the result
/// from `[-1, 1]` to `[0, 1]` and raises it to `exponent`.
#[derive(Clone, Debug)]
pub struct NoiseSampler<N = Simplex> {
    noise: N,
    frequency: f64,
    exponent: f64,
}

impl NoiseSampler<Simplex> {
    /// Simplex noise with the given seed.
    pub fn simplex(seed: u64, frequency: f64, exponent: f64) -> Self {
        Self::new(Simplex::new(seed as u32), frequency, exponent)
    }
}

impl<N: NoiseFn<f64, 2>> NoiseSampler<N> {
    pub fn new(noise: N, frequency: f64, exponent: f64) -> Self {
        Self {
            noise,
            frequency,
            exponent,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl<N: NoiseFn<f64, 2>> HeightSampler for NoiseSampler<N> {
    fn sample(&self, index: LatticeIndex) -> f64 {
        let raw = self.noise.get([
            index.i as f64 * self.frequency,
            index.j as f64 * self.frequency,
        ]);
        // Simplex can overshoot [-1, 1] slightly; powf on a negative base is NaN.
        let normalized = ((raw + 1.0) * 0.5).clamp(0.0, 1.0);
        normalized.powf(self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use noise::Constant;

    use super::*;
    use crate::lattice::scan_square;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_determinism_same_seed_same_index() {
        let a = NoiseSampler::simplex(42, DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let b = NoiseSampler::simplex(42, DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        for index in scan_square(-5..5) {
            let (ha, hb) = (a.sample(index), b.sample(index));
            assert!((ha - hb).abs() < EPSILON, "{index:?}: {ha} vs {hb}");
        }
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let a = NoiseSampler::simplex(1, DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let b = NoiseSampler::simplex(999, DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let differs = scan_square(-5..5).any(|idx| (a.sample(idx) - b.sample(idx)).abs() > EPSILON);
        assert!(differs, "different seeds should produce different heights");
    }

    #[test]
    fn test_output_within_unit_range() {
        let sampler = NoiseSampler::simplex(7, DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        for index in scan_square(-30..30) {
            let h = sampler.sample(index);
            assert!((0.0..=1.0).contains(&h), "sample {h} at {index:?} is out of range");
        }
    }

    #[test]
    fn test_constant_noise_extremes() {
        let low = NoiseSampler::new(Constant::new(-1.0), DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let high = NoiseSampler::new(Constant::new(1.0), DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let idx = LatticeIndex::new(3, -4);
        assert_eq!(low.sample(idx), 0.0);
        assert_eq!(high.sample(idx), 1.0);
    }

    #[test]
    fn test_exponent_biases_towards_low_values() {
        let linear = NoiseSampler::new(Constant::new(0.0), DEFAULT_FREQUENCY, 1.0);
        let shaped = NoiseSampler::new(Constant::new(0.0), DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let idx = LatticeIndex::new(0, 0);
        assert!((linear.sample(idx) - 0.5).abs() < EPSILON);
        assert!((shaped.sample(idx) - 0.5_f64.powf(1.3)).abs() < EPSILON);
        assert!(shaped.sample(idx) < linear.sample(idx));
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let sampler = NoiseSampler::new(Constant::new(-1.5), DEFAULT_FREQUENCY, DEFAULT_EXPONENT);
        let h = sampler.sample(LatticeIndex::new(0, 0));
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_adjacent_tiles_vary_smoothly() {
        let sampler = NoiseSampler::simplex(42, DEFAULT_FREQUENCY, 1.0);
        for i in -20..20 {
            let a = sampler.sample(LatticeIndex::new(i, 0));
            let b = sampler.sample(LatticeIndex::new(i + 1, 0));
            assert!((a - b).abs() < 0.5, "jump between tiles {i} and {}: {a} -> {b}", i + 1);
        }
    }

    #[test]
    fn test_closures_are_samplers() {
        let flat = |_: LatticeIndex| 0.25;
        assert_eq!(flat.sample(LatticeIndex::new(9, 9)), 0.25);
    }
}
