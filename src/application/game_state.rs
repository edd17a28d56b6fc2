use rand::Rng;
use tracing::{debug, info};

use super::{Config, ConfigError};
use crate::domain::GridEngine;

/// GameState drives a [`GridEngine`] from the frame loop.
/// The engine's pause flag is the single source of truth for running/paused.
pub struct GameState {
    pub engine: GridEngine,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub fill_ratio: f64,
    /// Duration of the most recent step
    pub last_step_time_ms: f32,
}

impl GameState {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = GridEngine::new(config.columns, config.rows)?;

        info!(
            columns = config.columns,
            rows = config.rows,
            updates_per_second = config.updates_per_second,
            "simulation ready"
        );

        Ok(Self {
            engine,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            fill_ratio: config.fill_ratio,
            last_step_time_ms: 0.0,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.engine.is_paused()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.engine.toggle_pause();
        self.update_timer = 0.0;
        self
    }

    /// Kill every cell; running state is kept
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.update_timer = 0.0;
        self
    }

    /// Refill the grid at random and pause
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng>(mut self, rng: &mut R) -> Self {
        if self.is_running() {
            self.engine.toggle_pause();
        }
        self.engine.clear();

        let fill_ratio = self.fill_ratio;
        self.engine.populate(|_, _| rng.random_bool(fill_ratio));

        debug!(population = self.engine.population(), "randomized grid");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance the frame timer and step once the update interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            let start = std::time::Instant::now();
            self.engine.step();
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state() -> GameState {
        GameState::new(&Config::default().with_size(12, 12)).unwrap()
    }

    #[test]
    fn test_starts_paused() {
        let state = state();
        assert!(!state.is_running());
        assert_eq!(state.engine.size(), (12, 12));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config { updates_per_second: -1.0, ..Config::default() };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = state().toggle_running();
        state.engine.place_pattern(&presets::blinker(), 4, 4).unwrap();

        // 10 gen/s -> 0.1s interval
        let state = state.tick(0.05);
        assert_eq!(state.engine.generation(), 0);
        let state = state.tick(0.06);
        assert_eq!(state.engine.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_tick_while_paused_does_nothing() {
        let state = state().tick(10.0);
        assert_eq!(state.engine.generation(), 0);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_randomize_is_reproducible_and_pauses() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let a = state().toggle_running().randomize_with(&mut rng_a);
        let b = state().randomize_with(&mut rng_b);

        assert!(!a.is_running());
        assert_eq!(a.engine.grid(), b.engine.grid());
        assert_eq!(a.engine.generation(), 0);
    }

    #[test]
    fn test_full_fill_ratio() {
        let config = Config { fill_ratio: 1.0, ..Config::default().with_size(5, 4) };
        let state = GameState::new(&config).unwrap().randomize();
        assert_eq!(state.engine.population(), 20);
    }

    #[test]
    fn test_zero_fill_ratio_empties_grid() {
        let config = Config { fill_ratio: 0.0, ..Config::default().with_size(6, 6) };
        let mut state = GameState::new(&config).unwrap();
        state.engine.place_pattern(&presets::block(), 2, 2).unwrap();

        let state = state.randomize();
        assert_eq!(state.engine.population(), 0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let state = state().adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);
        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }
}
