use super::{
	error::{MazeError, Result},
	Cell, CellState, Direction,
};
use std::fmt::{Display, Formatter};
use std::slice::{Chunks, Iter};

/// Grid is a dense, rectangular map of `Cell`s covering `[0, width) x [0, height)`. Cells are
/// stored in a single buffer in row order, so the cell at `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone)]
pub struct Grid {
	cells: Vec<Cell>,
	width: usize,
	height: usize,
}

impl Grid {
	/// constructs a new grid with the specified dimensions where every cell has the given `state`
	pub fn new(width: usize, height: usize, state: CellState) -> Self {
		Self::from_fn(width, height, |_, _| state)
	}

	/// constructs a new grid with the specified dimensions, asking `state_of` for the initial
	/// state of the cell at each `(x, y)`
	pub fn from_fn(width: usize, height: usize, mut state_of: impl FnMut(i32, i32) -> CellState) -> Self {
		let mut cells = Vec::with_capacity(width * height);
		for y in 0..height as i32 {
			for x in 0..width as i32 {
				cells.push(Cell::new((x, y), state_of(x, y)));
			}
		}

		Self {
			cells,
			width,
			height,
		}
	}

	/// returns the dimensions of the grid as a (width, height) tuple
	pub fn dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	/// returns the total number of cells stored in this grid (i.e. width * height)
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// returns a one-dimensional index based on the given x, y values.
	/// `width` is the number of columns in the grid
	pub fn idx_1d(x: usize, y: usize, width: usize) -> usize {
		y * width + x
	}

	/// returns `true` if `pos` lies within the grid
	pub fn contains(&self, (x, y): (i32, i32)) -> bool {
		x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
	}

	fn index_of(&self, pos: (i32, i32)) -> Option<usize> {
		if self.contains(pos) {
			Some(Self::idx_1d(pos.0 as usize, pos.1 as usize, self.width))
		} else {
			None
		}
	}

	/// returns the cell at `pos`, or None if `pos` is outside of the grid
	pub fn cell(&self, pos: (i32, i32)) -> Option<&Cell> {
		self.index_of(pos).map(|idx| &self.cells[idx])
	}

	/// returns the state of the cell at `(x, y)`
	pub fn state_at(&self, x: i32, y: i32) -> Result<CellState> {
		self.cell((x, y))
			.map(Cell::state)
			.ok_or(MazeError::OutOfBounds { x, y })
	}

	/// returns `true` if `(x, y)` should be drawn as wall: either the cell there is filled, or the
	/// position is outside of the grid and therefore part of the border
	pub fn is_solid(&self, x: i32, y: i32) -> bool {
		self.cell((x, y)).map_or(true, Cell::is_filled)
	}

	pub fn set_state(&mut self, pos: (i32, i32), state: CellState) -> Result<()> {
		let idx = self
			.index_of(pos)
			.ok_or(MazeError::OutOfBounds { x: pos.0, y: pos.1 })?;
		self.cells[idx].set_state(state);
		Ok(())
	}

	/// turns the cell at `pos` into floor. Returns `true` if it was filled before, `false` if
	/// it was already empty or `pos` is outside of the grid
	pub fn carve(&mut self, pos: (i32, i32)) -> bool {
		match self.index_of(pos) {
			Some(idx) if self.cells[idx].is_filled() => {
				self.cells[idx].set_state(CellState::Empty);
				true
			}
			_ => false,
		}
	}

	/// returns the number of filled (wall) cells
	pub fn filled_count(&self) -> usize {
		self.cells.iter().filter(|cell| cell.is_filled()).count()
	}

	/// returns the directions from `pos` that lead to another cell of the grid, paired with the
	/// position of that neighbor
	pub fn neighbors(&self, pos: (i32, i32)) -> Vec<(Direction, (i32, i32))> {
		Direction::CARDINALS
			.iter()
			.map(|&dir| (dir, dir.step(pos)))
			.filter(|&(_, next)| self.contains(next))
			.collect()
	}

	/// returns an immutable iterator over the *rows* of this grid, lowest y first
	pub fn iter_rows(&self) -> Chunks<'_, Cell> {
		self.cells.chunks(self.width.max(1))
	}

	/// returns an immutable iterator over this grid's cells in row order
	pub fn iter_cells(&self) -> Iter<'_, Cell> {
		self.cells.iter()
	}
}

/// pretty prints the grid as ASCII, `#` for walls. The row with the highest y is printed first.
impl Display for Grid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for row in self.iter_rows().rev() {
			let line: String = row
				.iter()
				.map(|cell| if cell.is_filled() { '#' } else { ' ' })
				.collect();
			writeln!(f, "{}", line)?;
		}

		Ok(())
	}
}
