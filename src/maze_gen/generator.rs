use super::{
	config::GeneratorConfig,
	error::{MazeError, Result},
	noise_field::{NoiseField, NoiseSource},
	CellState, Direction, Grid,
};
use log::{debug, info, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use std::f64::consts::PI;

/// Numbers describing the last maze a `MazeGenerator` built.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationStats {
	pub seed: i32,
	pub cutoff: f64,
	/// filled cells after the noise seeding pass
	pub seeded_filled: usize,
	/// random walks started by the carve pass
	pub walks: usize,
	/// cells turned from wall into floor by the carve pass
	pub carved: usize,
}

/// Builds mazes in two passes:
///
/// 1. seed every cell of the grid as wall or floor by thresholding a noise field
/// 2. visit every cell that is still a wall, column by column, and start a random walk there
///    that digs a corridor through neighboring walls until it reaches floor or leaves the grid
///
/// The generator owns its random number source, so a generator built with `from_seed` always
/// produces the same sequence of mazes.
pub struct MazeGenerator<R: Rng = ThreadRng> {
	config: GeneratorConfig,
	rng: R,
	stats: Option<GenerationStats>,
}

impl MazeGenerator<ThreadRng> {
	pub fn new(config: GeneratorConfig) -> Self {
		Self::with_rng(config, thread_rng())
	}
}

impl MazeGenerator<StdRng> {
	/// a generator whose walks are driven by an RNG seeded with `rng_seed`
	pub fn from_seed(config: GeneratorConfig, rng_seed: u64) -> Self {
		Self::with_rng(config, StdRng::seed_from_u64(rng_seed))
	}
}

impl<R: Rng> MazeGenerator<R> {
	pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
		MazeGenerator {
			config,
			rng,
			stats: None,
		}
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// returns the statistics of the last successful `generate` call
	pub fn stats(&self) -> Option<&GenerationStats> {
		self.stats.as_ref()
	}

	/// Generates a `width` x `height` maze. Zero sized dimensions give an empty grid, negative
	/// ones are rejected before anything is built.
	pub fn generate(&mut self, width: i32, height: i32) -> Result<Grid> {
		if width < 0 || height < 0 {
			return Err(MazeError::InvalidDimension { width, height });
		}

		let seed = match self.config.seed {
			Some(seed) => seed,
			None => self.rng.gen_range(i16::MIN as i32..i16::MAX as i32),
		};
		let cutoff = self.config.cutoff;
		info!("Noise seed: {}, noise cutoff: {}", seed, cutoff);

		let noise = NoiseField::with_frequency(seed, self.config.frequency);
		let mut grid = seed_grid(width as usize, height as usize, &noise, cutoff);
		let seeded_filled = grid.filled_count();
		let (walks, carved) = self.carve(&mut grid);

		let stats = GenerationStats {
			seed,
			cutoff,
			seeded_filled,
			walks,
			carved,
		};
		debug!("{:?}", stats);
		self.stats = Some(stats);

		Ok(grid)
	}

	/// Runs the carve pass over `grid`: a random walk is started from every cell that is still
	/// filled when the scan reaches it, x outer and y inner.
	/// Returns the number of walks started and the total number of cells carved.
	pub fn carve(&mut self, grid: &mut Grid) -> (usize, usize) {
		let (width, height) = grid.dimensions();
		let mut walks = 0;
		let mut carved = 0;
		for x in 0..width as i32 {
			for y in 0..height as i32 {
				if matches!(grid.state_at(x, y), Ok(CellState::Filled)) {
					walks += 1;
					carved += self.carve_walk(grid, (x, y));
				}
			}
		}
		(walks, carved)
	}

	/// Performs one random walk from `start`. The first step goes to a random neighbor inside the
	/// grid; while the cell under the walk is filled it is carved and the walk moves on in a
	/// freshly drawn direction. Stepping onto floor or off the grid ends the walk.
	/// Returns the number of cells carved.
	pub fn carve_walk(&mut self, grid: &mut Grid, start: (i32, i32)) -> usize {
		// a 1x1 grid has nowhere to go
		let mut next = match grid.neighbors(start).choose(&mut self.rng) {
			Some(&(_, pos)) => pos,
			None => return 0,
		};

		let mut carved = 0;
		while grid.carve(next) {
			carved += 1;
			next = self.random_direction().step(next);
		}
		trace!("walk from {:?} carved {} cells", start, carved);
		carved
	}

	fn random_direction(&mut self) -> Direction {
		Direction::CARDINALS[self.rng.gen_range(0..Direction::CARDINALS.len())]
	}
}

/// Builds a grid whose cells are empty where `|π * noise| < cutoff` and filled everywhere else.
pub fn seed_grid(width: usize, height: usize, noise: &impl NoiseSource, cutoff: f64) -> Grid {
	Grid::from_fn(width, height, |x, y| {
		let value = (PI * noise.sample(x, y)).abs();
		if value < cutoff {
			CellState::Empty
		} else {
			CellState::Filled
		}
	})
}

/// Generates a random `width` x `height` maze with the default options and the thread RNG.
pub fn generate(width: i32, height: i32) -> Result<Grid> {
	MazeGenerator::new(GeneratorConfig::default()).generate(width, height)
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FixedNoise(f64);

	impl NoiseSource for FixedNoise {
		fn sample(&self, _x: i32, _y: i32) -> f64 {
			self.0
		}
	}

	struct Checkerboard;

	impl NoiseSource for Checkerboard {
		fn sample(&self, x: i32, y: i32) -> f64 {
			if (x + y) % 2 == 0 {
				0.0
			} else {
				1.0
			}
		}
	}

	fn seeded(rng_seed: u64) -> MazeGenerator<StdRng> {
		MazeGenerator::from_seed(GeneratorConfig::default(), rng_seed)
	}

	#[test]
	fn default_cutoff_seeds_every_cell_filled() {
		let noise = NoiseField::new(12);
		let grid = seed_grid(8, 6, &noise, GeneratorConfig::default().cutoff);
		assert_eq!(grid.filled_count(), 48);
	}

	#[test]
	fn high_cutoff_seeds_every_cell_empty() {
		let noise = NoiseField::new(12);
		let grid = seed_grid(8, 6, &noise, 10.0);
		assert_eq!(grid.filled_count(), 0);
	}

	#[test]
	fn cutoff_splits_cells_by_noise_value() {
		let grid = seed_grid(4, 4, &Checkerboard, 1.0);
		assert_eq!(grid.state_at(0, 0).unwrap(), CellState::Empty);
		assert_eq!(grid.state_at(1, 0).unwrap(), CellState::Filled);
		assert_eq!(grid.filled_count(), 8);
	}

	#[test]
	fn seeding_uses_absolute_value() {
		let grid = seed_grid(3, 3, &FixedNoise(-1.0), 3.0);
		assert_eq!(grid.filled_count(), 9);
		let grid = seed_grid(3, 3, &FixedNoise(-0.5), 3.0);
		assert_eq!(grid.filled_count(), 0);
	}

	#[test]
	fn zero_sized_maze_is_empty() {
		let grid = seeded(1).generate(0, 0).unwrap();
		assert!(grid.is_empty());
		assert!(seeded(1).generate(0, 7).unwrap().is_empty());
		assert!(seeded(1).generate(7, 0).unwrap().is_empty());
	}

	#[test]
	fn negative_dimensions_are_rejected() {
		let mut generator = seeded(1);
		match generator.generate(-1, 5) {
			Err(MazeError::InvalidDimension { width, height }) => assert_eq!((width, height), (-1, 5)),
			other => panic!("expected invalid dimension, got {:?}", other),
		}
		assert!(generator.generate(5, -3).is_err());
		assert!(generator.stats().is_none());
	}

	#[test]
	fn single_cell_maze_terminates() {
		for rng_seed in 0..32 {
			let mut generator = seeded(rng_seed);
			let grid = generator.generate(1, 1).unwrap();
			assert_eq!(grid.state_at(0, 0).unwrap(), CellState::Filled);
			assert_eq!(generator.stats().unwrap().carved, 0);
		}
	}

	#[test]
	fn single_row_and_column_mazes_terminate() {
		for rng_seed in 0..16 {
			let row = seeded(rng_seed).generate(9, 1).unwrap();
			assert!(row.filled_count() < 9);
			let column = seeded(rng_seed).generate(1, 9).unwrap();
			assert!(column.filled_count() < 9);
		}
	}

	#[test]
	fn small_filled_maze_gets_carved() {
		for rng_seed in 0..32 {
			let mut generator = seeded(rng_seed);
			let grid = generator.generate(5, 5).unwrap();
			let stats = generator.stats().unwrap();
			assert_eq!(stats.seeded_filled, 25);
			assert!(stats.carved > 0);
			assert!(grid.iter_cells().any(|cell| !cell.is_filled()));
		}
	}

	#[test]
	fn each_walk_carves_exactly_what_it_reports() {
		let mut generator = seeded(7);
		let mut grid = Grid::new(12, 9, CellState::Filled);
		let mut filled = grid.filled_count();
		for x in 0..12 {
			for y in 0..9 {
				if grid.state_at(x, y).unwrap() == CellState::Filled {
					let carved = generator.carve_walk(&mut grid, (x, y));
					let now = grid.filled_count();
					assert!(now <= filled);
					assert_eq!(filled - now, carved);
					filled = now;
				}
			}
		}
	}

	#[test]
	fn carving_never_fills_a_cell() {
		let mut generator = seeded(3);
		let mut grid = seed_grid(10, 10, &Checkerboard, 1.0);
		let empty_before: Vec<_> = grid
			.iter_cells()
			.filter(|cell| !cell.is_filled())
			.map(|cell| cell.position())
			.collect();
		generator.carve(&mut grid);
		for (x, y) in empty_before {
			assert_eq!(grid.state_at(x, y).unwrap(), CellState::Empty);
		}
	}

	#[test]
	fn walk_stops_on_empty_neighbor() {
		let mut generator = seeded(5);
		let mut grid = Grid::new(3, 1, CellState::Empty);
		grid.set_state((1, 0), CellState::Filled).unwrap();
		// (1, 0) only has empty neighbors
		assert_eq!(generator.carve_walk(&mut grid, (1, 0)), 0);
		assert_eq!(grid.filled_count(), 1);
	}

	#[test]
	fn total_carving_is_bounded_by_grid_size() {
		for rng_seed in 0..8 {
			let mut generator = seeded(rng_seed);
			let grid = generator.generate(30, 20).unwrap();
			let stats = generator.stats().unwrap();
			assert!(stats.carved <= 30 * 20);
			assert!(stats.walks <= 30 * 20);
			assert_eq!(stats.seeded_filled - stats.carved, grid.filled_count());
		}
	}

	#[test]
	fn same_rng_seed_gives_same_maze() {
		let a = seeded(2024).generate(25, 15).unwrap();
		let b = seeded(2024).generate(25, 15).unwrap();
		assert_eq!(a.to_string(), b.to_string());
	}

	#[test]
	fn configured_noise_seed_is_used() {
		let config = GeneratorConfig {
			seed: Some(321),
			..Default::default()
		};
		let mut generator = MazeGenerator::from_seed(config, 1);
		generator.generate(4, 4).unwrap();
		assert_eq!(generator.stats().unwrap().seed, 321);
	}

	#[test]
	fn drawn_noise_seed_stays_in_short_range() {
		let mut generator = seeded(11);
		for _ in 0..16 {
			generator.generate(2, 2).unwrap();
			let seed = generator.stats().unwrap().seed;
			assert!(seed >= i16::MIN as i32 && seed < i16::MAX as i32);
		}
	}

	#[test]
	fn sparse_cutoff_leaves_floor_untouched() {
		let config = GeneratorConfig {
			cutoff: 10.0,
			..Default::default()
		};
		let mut generator = MazeGenerator::from_seed(config, 9);
		let grid = generator.generate(6, 6).unwrap();
		assert_eq!(grid.filled_count(), 0);
		assert_eq!(generator.stats().unwrap().walks, 0);
	}

	#[test]
	fn thread_rng_generation() {
		let grid = generate(16, 16).unwrap();
		assert_eq!(grid.dimensions(), (16, 16));
	}
}
