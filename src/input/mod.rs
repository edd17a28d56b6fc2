use macroquad::prelude::*;
use tracing::warn;

use crate::application::GameState;
use crate::domain::presets;
use crate::ui::{Button, ButtonAction, screen_to_cell};

/// Paint with the left mouse button, erase with the right one.
/// Only active while paused.
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    if state.is_running() {
        return;
    }

    let Some((x, y)) = screen_to_cell(mouse_pos, state.engine.size()) else {
        return;
    };

    let result = if is_mouse_button_down(MouseButton::Left) {
        state.engine.set_cell(x, y)
    } else if is_mouse_button_down(MouseButton::Right) {
        state.engine.unset_cell(x, y)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        warn!(%err, "rejected paint");
    }
}

/// Stamp a glider at the cursor
pub fn handle_pattern_stamp(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_key_pressed(KeyCode::G) {
        return;
    }

    if let Some((x, y)) = screen_to_cell(mouse_pos, state.engine.size()) {
        if let Err(err) = state.engine.place_pattern(&presets::glider(), x, y) {
            warn!(%err, "rejected pattern");
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (action, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match action {
            ButtonAction::TogglePause => s.toggle_running(),
            ButtonAction::Clear => s.clear(),
            ButtonAction::Randomize => s.randomize(),
        }
    })
}
