use super::{error::Result, noise_field::DEFAULT_FREQUENCY};
use serde_derive::{Deserialize, Serialize};

/// Options for a single maze generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	/// most cells become filled unless their noise value falls below this cutoff. The default
	/// is low enough that every cell starts out filled.
	pub cutoff: f64,
	/// noise seed. Drawn from the generator's RNG when absent.
	pub seed: Option<i32>,
	pub frequency: f64,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			cutoff: -10.0,
			seed: None,
			frequency: DEFAULT_FREQUENCY,
		}
	}
}

/// Everything the command line host needs to build and print a maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
	pub width: i32,
	pub height: i32,
	/// width of the solid margin drawn around the maze
	pub border: i32,
	pub generator: GeneratorConfig,
}

impl Default for MazeConfig {
	fn default() -> Self {
		Self {
			width: 100,
			height: 100,
			border: 5,
			generator: GeneratorConfig::default(),
		}
	}
}

impl MazeConfig {
	pub fn from_yaml(source: &str) -> Result<Self> {
		Ok(serde_yaml::from_str(source)?)
	}
}
