use anyhow::{Context, Result};
use log::info;
use maze_walk::{Grid, MazeConfig, MazeGenerator};
use std::{env, fs};

pub fn main() -> Result<()> {
	env_logger::init();

	let config = match env::args().nth(1) {
		Some(path) => {
			let source = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
			MazeConfig::from_yaml(&source).with_context(|| format!("parsing {}", path))?
		}
		None => MazeConfig::default(),
	};
	info!("Building {}x{} maze", config.width, config.height);

	let mut generator = MazeGenerator::new(config.generator.clone());
	let grid = generator
		.generate(config.width, config.height)
		.context("generating maze")?;

	print!("{}", render(&grid, config.border));
	Ok(())
}

/// Draws every solid position of the maze plus a `border` wide margin around it.
fn render(grid: &Grid, border: i32) -> String {
	let (width, height) = grid.dimensions();
	let (width, height) = (width as i32, height as i32);
	let mut buf = String::new();
	for y in (-border..height + border).rev() {
		for x in -border..width + border {
			buf.push(if grid.is_solid(x, y) { '#' } else { ' ' });
		}
		buf.push('\n');
	}
	buf
}
