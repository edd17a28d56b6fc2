use macroquad::prelude::*;
use torus_life::{Config, GameState, input, rendering, ui};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Game of Life".to_owned(),
        window_width: 980,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut state = match GameState::new(&Config::default()) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse_paint(&mut state, mouse_pos);
        input::handle_pattern_stamp(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(state.engine.grid());
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
