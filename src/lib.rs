// Domain layer - grid buffers, rules and the double-buffered engine
pub mod domain;

// Application layer - configuration and frame-timed driver
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub use domain::{Cell, Grid, GridEngine, GridError, Pattern, presets};
pub use application::{Config, ConfigError, GameState};
