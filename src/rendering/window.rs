//! Window renderer backed by macroquad. Must be driven from a macroquad main loop.

use macroquad::prelude::*;
use tracing::debug;

use super::Renderer;
use crate::domain::{Grid, RenderError};

const LABEL_HEIGHT: f32 = 28.0;

/// Draws live cells as squares scaled to fit the window, with the
/// generation counter above the grid.
pub struct WindowRenderer {
    alive_color: Color,
    background: Color,
    label_color: Color,
}

impl WindowRenderer {
    pub fn new() -> Self {
        Self {
            alive_color: Color::from_rgba(0, 255, 150, 255), // Bright green
            background: Color::from_rgba(15, 15, 15, 255),
            label_color: WHITE,
        }
    }

    /// Largest square cell size that fits the grid below the label
    fn cell_size(grid: &Grid) -> f32 {
        let (rows, cols) = grid.dimensions();
        let by_width = screen_width() / cols as f32;
        let by_height = (screen_height() - LABEL_HEIGHT).max(1.0) / rows as f32;
        by_width.min(by_height).max(1.0)
    }
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for WindowRenderer {
    fn initialize(&mut self, grid: &Grid) -> Result<(), RenderError> {
        let (rows, cols) = grid.dimensions();
        debug!(rows, cols, cell_size = Self::cell_size(grid), "window renderer ready");
        Ok(())
    }

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), RenderError> {
        clear_background(self.background);

        let size = Self::cell_size(grid);
        for (row, col) in grid.live_cells() {
            draw_rectangle(
                col as f32 * size,
                LABEL_HEIGHT + row as f32 * size,
                size,
                size,
                self.alive_color,
            );
        }

        draw_text(
            &format!("Generation {generation}"),
            8.0,
            LABEL_HEIGHT - 8.0,
            22.0,
            self.label_color,
        );
        Ok(())
    }
}
