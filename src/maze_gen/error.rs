use thiserror::Error;

/// Errors produced while generating or reading a maze.
#[derive(Debug, Error)]
pub enum MazeError {
	/// a maze cannot have a negative width or height
	#[error("invalid maze dimensions {width}x{height}")]
	InvalidDimension { width: i32, height: i32 },

	/// the coordinate lies outside of `[0, width) x [0, height)`
	#[error("position ({x}, {y}) is outside of the maze")]
	OutOfBounds { x: i32, y: i32 },

	#[error("malformed maze config: {0}")]
	Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
