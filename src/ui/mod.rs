mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 8.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Map a screen position to the grid cell under it, if any
pub fn screen_to_cell(pos: (f32, f32), dimensions: (usize, usize)) -> Option<(usize, usize)> {
    let (sx, sy) = pos;
    if sx < 0.0 || sy < 0.0 || sx >= grid_area_width() {
        return None;
    }

    let (x, y) = ((sx / CELL_SIZE) as usize, (sy / CELL_SIZE) as usize);
    (x < dimensions.0 && y < dimensions.1).then_some((x, y))
}

/// Actions bound to the control panel buttons, in layout order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    TogglePause,
    Clear,
    Randomize,
}

/// Create the control panel buttons
pub fn create_buttons() -> Vec<(ButtonAction, Button)> {
    let px = panel_x();
    [
        (ButtonAction::TogglePause, "Play/Pause"),
        (ButtonAction::Clear, "Clear"),
        (ButtonAction::Randomize, "Random"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, label))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        (action, Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label))
    })
    .collect()
}
