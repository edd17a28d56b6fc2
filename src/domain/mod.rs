mod cell;
mod engine;
mod error;
mod grid;
mod patterns;

pub use cell::Cell;
pub use engine::GridEngine;
pub use error::GridError;
pub use grid::{Grid, wrap};
pub use patterns::{Pattern, presets};
