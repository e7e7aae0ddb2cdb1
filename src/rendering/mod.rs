use macroquad::prelude::*;
use crate::application::{Config, GridState};
use crate::domain::Cell;

/// Gap left between neighboring cells, in pixels
const CELL_GUTTER: f32 = 2.0;

/// Fill colour for a cell; colour only exists at this layer
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Dead => Color::from_rgba(0xB0, 0xB0, 0xB0, 255), // Grey
        Cell::Alive => Color::from_rgba(255, 255, 0, 255),    // Yellow
    }
}

/// Top-left pixel of cell (x, y)
pub fn cell_origin(x: usize, y: usize, cell_size: f32) -> (f32, f32) {
    (x as f32 * cell_size, y as f32 * cell_size)
}

/// Paint every cell with its coordinate label
pub fn draw_grid(state: &GridState, config: &Config) {
    let cell_size = config.cell_size;
    let size = state.size();
    let label_size = (cell_size / 4.0).clamp(8.0, 16.0);

    for y in 0..size {
        for x in 0..size {
            let (screen_x, screen_y) = cell_origin(x, y, cell_size);
            let cell = state.get_cell(x, y);

            draw_rectangle(
                screen_x,
                screen_y,
                cell_size - CELL_GUTTER,
                cell_size - CELL_GUTTER,
                cell_color(cell),
            );

            // Labels get unreadable on small cells
            if cell_size >= 24.0 {
                draw_text(
                    &format!("{x} {y}"),
                    screen_x + 4.0,
                    screen_y + cell_size / 2.0,
                    label_size,
                    BLACK,
                );
            }
        }
    }
}

/// Small overlay with generation and play status
pub fn draw_status(state: &GridState) {
    let status = if state.is_playing() { "Running" } else { "Paused" };
    let text = format!("Gen {} | {} | Live {}", state.generation(), status, state.live_count());
    let dims = measure_text(&text, None, 16, 1.0);

    draw_rectangle(0.0, 0.0, dims.width + 8.0, dims.height + 8.0, Color::from_rgba(0, 0, 0, 160));
    draw_text(&text, 4.0, dims.height + 4.0, 16.0, WHITE);
}
