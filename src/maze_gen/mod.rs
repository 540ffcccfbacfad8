mod cell;
mod config;
mod direction;
mod error;
mod generator;
mod grid;
mod noise_field;

pub use {
	cell::{Cell, CellState},
	config::{GeneratorConfig, MazeConfig},
	direction::Direction,
	error::{MazeError, Result},
	generator::{generate, seed_grid, GenerationStats, MazeGenerator},
	grid::Grid,
	noise_field::{sample, NoiseField, NoiseSource},
};
