mod config;
mod game_state;

pub use config::{Config, ConfigError};
pub use game_state::GameState;
