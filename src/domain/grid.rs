use std::fmt;

use super::{Cell, GridError};

/// Offsets of the eight Moore neighbours.
#[rustfmt::skip]
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Wrap `coord + offset` onto `0..len`.
///
/// `len` must be non-zero. Works for any offset, not just ±1.
pub const fn wrap(coord: usize, offset: isize, len: usize) -> usize {
    (coord as isize + offset).rem_euclid(len as isize) as usize
}

/// Grid is one fixed-size cell buffer of the torus.
/// Cells are stored row-major at `x + y * width`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Dimensions are validated by [`GridEngine::new`](super::GridEngine::new).
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as `(columns, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub(crate) fn check(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        self.check(x, y)?;
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    /// Count live neighbours with toroidal wrapping.
    ///
    /// On grids one or two cells wide (or tall) several offsets land on the
    /// same cell, possibly `(x, y)` itself; each offset is counted.
    pub fn count_live_neighbours(&self, x: usize, y: usize) -> u8 {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| {
                let nx = wrap(x, dx, self.width);
                let ny = wrap(y, dy, self.height);
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write the next generation of every cell into `next`.
    ///
    /// `next` must have the same dimensions as `self`.
    pub(crate) fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.get_index(x, y);
                let neighbours = self.count_live_neighbours(x, y);
                next.cells[idx] = self.cells[idx].evolve(neighbours);
            }
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
