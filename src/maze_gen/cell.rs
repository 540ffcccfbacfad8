use std::hash::{Hash, Hasher};

/// Whether a cell is open floor or wall.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellState {
	Empty,
	Filled,
}

impl Default for CellState {
	fn default() -> Self {
		CellState::Empty
	}
}

/// Cell is a single square of a maze `Grid`. Its `position` is fixed when the cell is created and
/// uniquely identifies it within the grid, while its `state` changes as the maze is carved.
#[derive(Debug, Copy, Clone)]
pub struct Cell {
	position: (i32, i32),
	state: CellState,
}

impl Cell {
	// constructs a new Cell at `position` with the specified `state`
	pub fn new(position: (i32, i32), state: CellState) -> Self {
		Cell { position, state }
	}

	// returns the (x, y) position of this cell
	pub fn position(&self) -> (i32, i32) {
		self.position
	}

	pub fn x(&self) -> i32 {
		self.position.0
	}

	pub fn y(&self) -> i32 {
		self.position.1
	}

	// returns the state of the cell
	pub fn state(&self) -> CellState {
		self.state
	}

	pub fn set_state(&mut self, new_state: CellState) {
		self.state = new_state;
	}

	pub fn is_filled(&self) -> bool {
		self.state == CellState::Filled
	}
}

impl PartialEq for Cell {
	/// two cells are considered equal if their respective `position`s are equal
	fn eq(&self, other: &Self) -> bool {
		self.position == other.position
	}
}

impl Eq for Cell {}

// HASH impl
impl Hash for Cell {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.position.hash(state);
	}
}
