use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{
    Button, ButtonAction, CELL_SIZE, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x,
};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Draw the current generation, clipped to the grid area
pub fn draw_grid(grid: &Grid) {
    let (columns, rows) = grid.dimensions();
    let visible_x = ((grid_area_width() / CELL_SIZE).ceil() as usize).min(columns);
    let visible_y = ((grid_area_height() / CELL_SIZE).ceil() as usize).min(rows);

    grid.iter_cells()
        .filter(|&(x, y, cell)| cell.is_alive() && x < visible_x && y < visible_y)
        .for_each(|(x, y, _)| {
            draw_rectangle(
                x as f32 * CELL_SIZE,
                y as f32 * CELL_SIZE,
                CELL_SIZE,
                CELL_SIZE,
                ALIVE_COLOR,
            );
        });

    // torus border
    draw_rectangle_lines(
        0.0,
        0.0,
        visible_x as f32 * CELL_SIZE,
        visible_y as f32 * CELL_SIZE,
        1.0,
        GRID_LINE_COLOR,
    );
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[(ButtonAction, Button)], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let (columns, rows) = state.engine.size();
    let (status, status_color) = if state.is_running() {
        ("Running", GREEN)
    } else {
        ("Paused", ORANGE)
    };

    let labels = [
        ("LMB: Paint  RMB: Erase".to_owned(), 190.0, 12.0, GRAY),
        ("Space: Play  C: Clear".to_owned(), 205.0, 12.0, GRAY),
        ("R: Random  G: Glider".to_owned(), 220.0, 12.0, GRAY),
        (format!("Grid: {columns}x{rows}"), 250.0, 14.0, LIGHTGRAY),
        (format!("Population: {}", state.engine.population()), 270.0, 14.0, LIGHTGRAY),
        (format!("Generation: {}", state.engine.generation()), 290.0, 16.0, WHITE),
        (format!("Speed: {:.0} gen/s", state.updates_per_second), 310.0, 14.0, LIGHTGRAY),
        (format!("Step: {:.2}ms", state.last_step_time_ms), 330.0, 14.0, LIGHTGRAY),
        (status.to_owned(), 360.0, 18.0, status_color),
    ];

    for (text, y, size, color) in &labels {
        draw_text(text, px + 8.0, *y, *size, *color);
    }
}
