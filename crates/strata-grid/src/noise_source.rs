//! The sampling seam between classification and whatever produced the noise.

use strata_terrain::HeightField;

/// A flat, index-addressed source of normalized noise values.
///
/// The classifier addresses cells through a flattened index, so any dense
/// array of samples works: a generated [`HeightField`], a plain slice, or a
/// synthetic source in tests.
pub trait NoiseSource {
    /// Normalized noise value at the given flattened index.
    fn sample(&self, index: usize) -> f64;
}

impl NoiseSource for HeightField {
    fn sample(&self, index: usize) -> f64 {
        self.values()[index]
    }
}

impl NoiseSource for [f64] {
    fn sample(&self, index: usize) -> f64 {
        self[index]
    }
}

impl NoiseSource for Vec<f64> {
    fn sample(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<T: NoiseSource + ?Sized> NoiseSource for &T {
    fn sample(&self, index: usize) -> f64 {
        (**self).sample(index)
    }
}

/// A source returning the same value at every index. Test fixture.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&self, _index: usize) -> f64 {
        self.0
    }
}
