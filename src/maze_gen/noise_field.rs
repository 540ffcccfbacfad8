use noise::{NoiseFn, Perlin};
use std::fmt;

/// Default distance between neighboring cell samples in noise space. Perlin noise repeats its
/// lattice every 1.0, so ten cells span one lattice square.
pub const DEFAULT_FREQUENCY: f64 = 0.1;

/// A deterministic scalar field over integer grid coordinates.
pub trait NoiseSource {
	fn sample(&self, x: i32, y: i32) -> f64;
}

/// Gradient noise sampled at cell centers. The same `seed` always yields the same field, and
/// neighboring cells produce similar values so thresholding it gives contiguous blobs.
#[derive(Clone)]
pub struct NoiseField {
	seed: i32,
	frequency: f64,
	perlin: Perlin,
}

impl NoiseField {
	pub fn new(seed: i32) -> Self {
		Self::with_frequency(seed, DEFAULT_FREQUENCY)
	}

	pub fn with_frequency(seed: i32, frequency: f64) -> Self {
		NoiseField {
			seed,
			frequency,
			perlin: Perlin::new(seed as u32),
		}
	}

	pub fn seed(&self) -> i32 {
		self.seed
	}

	pub fn frequency(&self) -> f64 {
		self.frequency
	}
}

impl fmt::Debug for NoiseField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NoiseField")
			.field("seed", &self.seed)
			.field("frequency", &self.frequency)
			.finish()
	}
}

impl NoiseSource for NoiseField {
	fn sample(&self, x: i32, y: i32) -> f64 {
		// integer lattice points are always 0 for Perlin noise, so sample the cell center
		let px = (x as f64 + 0.5) * self.frequency;
		let py = (y as f64 + 0.5) * self.frequency;
		self.perlin.get([px, py])
	}
}

/// Samples the noise instance selected by `seed` at `(x, y)` with the default frequency.
pub fn sample(x: i32, y: i32, seed: i32) -> f64 {
	NoiseField::new(seed).sample(x, y)
}
