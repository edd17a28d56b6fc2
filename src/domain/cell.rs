/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Compute the next state from the number of live neighbours:
    /// 1. Dead cell with exactly 3 neighbours is born
    /// 2. Live cell with 1 or fewer, or 4 or more, neighbours dies
    /// 3. Every other cell keeps its state
    pub const fn evolve(self, neighbours: u8) -> Self {
        match (self, neighbours) {
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Alive, 0 | 1) => Cell::Dead,
            (Cell::Alive, n) if n >= 4 => Cell::Dead,
            (state, _) => state,
        }
    }
}
