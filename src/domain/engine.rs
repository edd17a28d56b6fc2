//! Double-buffered Game of Life engine on a fixed-size torus.
//!
//! The engine owns two [`Grid`] buffers of identical dimensions. One is the
//! *current* generation, readable through [`GridEngine::grid`]; the other is
//! the write target of the next [`GridEngine::step`]. After every step the
//! roles swap, so the buffer being read is never the buffer being written.

use tracing::{debug, trace};

use super::{Cell, Grid, GridError, Pattern, grid::wrap};

/// GridEngine advances a toroidal Life grid one generation at a time.
#[derive(Clone, Debug)]
pub struct GridEngine {
    buffers: [Grid; 2],
    /// Index into `buffers` of the current generation.
    front: usize,
    paused: bool,
    generation: u64,
}

impl GridEngine {
    /// Create a paused engine with every cell of both buffers dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        debug!(width, height, "created grid engine");

        Ok(Self {
            buffers: [Grid::new(width, height), Grid::new(width, height)],
            front: 0,
            paused: true,
            generation: 0,
        })
    }

    /// Grid dimensions as `(columns, rows)`
    pub const fn size(&self) -> (usize, usize) {
        self.buffers[0].dimensions()
    }

    /// Read-only view of the current generation.
    ///
    /// The borrow ends before the next [`step`](Self::step); clone the grid
    /// if a snapshot has to outlive it.
    pub fn grid(&self) -> &Grid {
        &self.buffers[self.front]
    }

    fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.front]
    }

    /// Checked read of one cell of the current generation
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        let grid = self.grid();
        let (width, height) = grid.dimensions();
        grid.get(x, y).ok_or(GridError::InvalidCoordinate { x, y, width, height })
    }

    /// Bring the cell at `(x, y)` of the current generation to life
    pub fn set_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.current_mut().set(x, y, Cell::Alive)
    }

    /// Kill the cell at `(x, y)` of the current generation
    pub fn unset_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.current_mut().set(x, y, Cell::Dead)
    }

    /// Kill every cell in both buffers and reset the generation counter.
    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(Cell::Dead);
        }
        self.generation = 0;

        debug!("cleared both buffers");
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "toggled pause");
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of generations computed since construction or the last clear
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.grid().population()
    }

    /// Stamp `pattern` with its top-left corner at `(x, y)`.
    ///
    /// Pattern cells past an edge wrap around the torus. Only live cells are
    /// written; existing live cells under the pattern stay alive.
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        x: usize,
        y: usize,
    ) -> Result<(), GridError> {
        let grid = self.current_mut();
        grid.check(x, y)?;

        let (width, height) = grid.dimensions();
        for &(dx, dy) in &pattern.cells {
            let px = wrap(x, (dx % width) as isize, width);
            let py = wrap(y, (dy % height) as isize, height);
            grid.set(px, py, Cell::Alive)?;
        }

        debug!(pattern = pattern.name, x, y, "placed pattern");
        Ok(())
    }

    /// Overwrite every cell of the current generation, alive where `alive(x, y)`
    /// returns true. The next buffer is left alone.
    pub fn populate<F>(&mut self, mut alive: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        let grid = self.current_mut();
        let (width, _) = grid.dimensions();
        for (idx, cell) in grid.cells_mut().iter_mut().enumerate() {
            let (x, y) = (idx % width, idx / width);
            *cell = if alive(x, y) { Cell::Alive } else { Cell::Dead };
        }
    }

    /// Advance one generation unless paused.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        let [first, second] = &mut self.buffers;
        let (current, next) = if self.front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };
        current.evolve_into(next);

        self.front ^= 1;
        self.generation += 1;

        trace!(generation = self.generation, "advanced generation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use proptest::prelude::*;

    fn running(width: usize, height: usize) -> GridEngine {
        let mut engine = GridEngine::new(width, height).unwrap();
        engine.toggle_pause();
        engine
    }

    fn alive_cells(engine: &GridEngine) -> Vec<(usize, usize)> {
        engine
            .grid()
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_new_engine_is_paused_and_dead() {
        let engine = GridEngine::new(7, 4).unwrap();
        assert_eq!(engine.size(), (7, 4));
        assert!(engine.is_paused());
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            GridEngine::new(0, 3).unwrap_err(),
            GridError::EmptyDimensions { width: 0, height: 3 }
        );
        assert!(GridEngine::new(3, 0).is_err());
    }

    #[test]
    fn test_set_and_unset_cell() {
        let mut engine = GridEngine::new(4, 4).unwrap();
        engine.set_cell(3, 2).unwrap();
        assert_eq!(engine.cell(3, 2).unwrap(), Cell::Alive);
        engine.unset_cell(3, 2).unwrap();
        assert_eq!(engine.cell(3, 2).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_out_of_range_mutation_is_rejected() {
        let mut engine = GridEngine::new(4, 3).unwrap();
        let expected = GridError::InvalidCoordinate { x: 4, y: 0, width: 4, height: 3 };
        assert_eq!(engine.set_cell(4, 0).unwrap_err(), expected);
        assert!(engine.unset_cell(0, 3).is_err());
        assert!(engine.cell(9, 9).is_err());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_set_cell_only_touches_current_buffer() {
        let mut engine = GridEngine::new(4, 4).unwrap();
        engine.set_cell(1, 1).unwrap();
        assert_eq!(engine.buffers[engine.front].population(), 1);
        assert_eq!(engine.buffers[engine.front ^ 1].population(), 0);
    }

    #[test]
    fn test_paused_step_is_noop() {
        let mut engine = GridEngine::new(5, 5).unwrap();
        for (x, y) in [(1, 2), (2, 2), (3, 2)] {
            engine.set_cell(x, y).unwrap();
        }
        let before = engine.grid().clone();
        let front = engine.front;

        engine.step();

        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.front, front);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_single_cell_torus_dies() {
        let mut engine = running(1, 1);
        engine.set_cell(0, 0).unwrap();
        engine.step();
        assert_eq!(engine.cell(0, 0).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_birth_exactness() {
        let cases = [
            (vec![(0, 0), (1, 0)], Cell::Dead),
            (vec![(0, 0), (1, 0), (2, 0)], Cell::Alive),
            (vec![(0, 0), (1, 0), (2, 0), (0, 1)], Cell::Dead),
        ];

        for (alive, expected) in cases {
            let mut engine = running(10, 10);
            for &(x, y) in &alive {
                engine.set_cell(x + 3, y + 3).unwrap();
            }
            assert_eq!(engine.cell(4, 4).unwrap(), Cell::Dead);
            engine.step();
            assert_eq!(engine.cell(4, 4).unwrap(), expected, "seed {alive:?}");
        }
    }

    #[test]
    fn test_clear_resets_both_buffers() {
        let mut engine = running(6, 6);
        engine.place_pattern(&presets::glider(), 1, 1).unwrap();
        engine.step();
        engine.step();
        engine.step();
        assert!(engine.buffers[engine.front ^ 1].population() > 0);

        engine.clear();
        assert_eq!(engine.buffers[0].population(), 0);
        assert_eq!(engine.buffers[1].population(), 0);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.is_paused());

        engine.step();
        assert_eq!(engine.population(), 0);
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_clear_while_paused_empties_inactive_buffer() {
        let mut engine = running(8, 8);
        engine.place_pattern(&presets::blinker(), 2, 2).unwrap();
        engine.step();
        engine.toggle_pause();
        engine.place_pattern(&presets::block(), 5, 5).unwrap();

        engine.clear();

        for buffer in &engine.buffers {
            assert!(buffer.cells().iter().all(|cell| !cell.is_alive()));
        }
    }

    #[test]
    fn test_cell_reports_coordinate() {
        let engine = GridEngine::new(3, 2).unwrap();
        assert_eq!(
            engine.cell(1, 2),
            Err(GridError::InvalidCoordinate { x: 1, y: 2, width: 3, height: 2 })
        );
        assert_eq!(engine.cell(2, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_populate_writes_current_buffer_only() {
        let mut engine = GridEngine::new(4, 3).unwrap();
        engine.set_cell(0, 0).unwrap();
        engine.populate(|x, y| x == y);

        assert_eq!(alive_cells(&engine), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(engine.buffers[engine.front ^ 1].population(), 0);
    }

    #[test]
    fn test_single_column_grid_displays() {
        let engine = GridEngine::new(1, 3).unwrap();
        assert_eq!(engine.grid().to_string(), ".\n.\n.\n");
    }

    #[test]
    fn test_buffer_roles_return_after_two_steps() {
        let mut engine = running(6, 6);
        engine.place_pattern(&presets::blinker(), 1, 1).unwrap();
        let start = alive_cells(&engine);
        let front = engine.grid() as *const Grid;

        engine.step();
        assert!(!std::ptr::eq(engine.grid(), front));
        assert_ne!(alive_cells(&engine), start);

        engine.step();
        assert!(std::ptr::eq(engine.grid(), front));
        assert_eq!(alive_cells(&engine), start);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_place_pattern_wraps() {
        let mut engine = GridEngine::new(4, 4).unwrap();
        engine.place_pattern(&presets::block(), 3, 3).unwrap();
        assert_eq!(alive_cells(&engine), vec![(0, 0), (3, 0), (0, 3), (3, 3)]);
        assert!(engine.place_pattern(&presets::block(), 4, 0).is_err());
    }

    fn seeded(width: usize, height: usize, alive: &[bool]) -> GridEngine {
        let mut engine = GridEngine::new(width, height).unwrap();
        for (idx, _) in alive.iter().enumerate().filter(|(_, a)| **a) {
            engine.set_cell(idx % width, idx / width).unwrap();
        }
        engine
    }

    fn seeds() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), prop::collection::vec(any::<bool>(), w * h))
        })
    }

    proptest! {
        #[test]
        fn prop_step_is_deterministic(
            (width, height, alive) in seeds()) {
            let mut a = seeded(width, height, &alive);
            let mut b = seeded(width, height, &alive);
            a.toggle_pause();
            b.toggle_pause();

            for _ in 0..6 {
                a.step();
                b.step();
                prop_assert_eq!(a.grid(), b.grid());
            }
        }

        #[test]
        fn prop_paused_step_never_changes_cells(
            (width, height, alive) in seeds()) {
            let mut engine = seeded(width, height, &alive);
            let before = engine.grid().clone();
            for _ in 0..3 {
                engine.step();
            }
            prop_assert_eq!(engine.grid(), &before);
        }
    }
}
