/// Movement directions as bit flags. Several flags may be combined by a caller tracking which
/// directions are held at once, but walking the maze only ever uses the four single directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
	Idle = 0,
	Left = 1,
	Right = 2,
	Up = 4,
	Down = 8,
}

impl Direction {
	/// the single directions a walk can step in
	pub const CARDINALS: [Direction; 4] = [
		Direction::Left,
		Direction::Right,
		Direction::Up,
		Direction::Down,
	];

	/// returns the flag value of this direction
	pub fn bits(self) -> u8 {
		self as u8
	}

	/// returns `true` if this direction's flag is set in `mask`
	pub fn is_set_in(self, mask: u8) -> bool {
		self != Direction::Idle && mask & self.bits() != 0
	}

	/// returns the unit vector of this direction as an `(x, y)` offset. Y grows upwards.
	pub fn offset(self) -> (i32, i32) {
		match self {
			Direction::Idle => (0, 0),
			Direction::Left => (-1, 0),
			Direction::Right => (1, 0),
			Direction::Up => (0, 1),
			Direction::Down => (0, -1),
		}
	}

	/// returns `pos` moved one step in this direction
	pub fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
		let (dx, dy) = self.offset();
		(x + dx, y + dy)
	}
}

impl Default for Direction {
	fn default() -> Self {
		Direction::Idle
	}
}
