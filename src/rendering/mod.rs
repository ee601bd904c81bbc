use std::io::Write;

use crate::domain::{Grid, RenderError};

pub mod window;

pub use window::WindowRenderer;

/// Consumes snapshots of the simulation. Renderers only ever read.
pub trait Renderer {
    /// One-time setup before the first frame
    fn initialize(&mut self, _grid: &Grid) -> Result<(), RenderError> {
        Ok(())
    }

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), RenderError>;
}

/// Text dump: `Generation <n>`, then one line per row of `x`/`.` cells
pub fn render_text(grid: &Grid, generation: u64) -> String {
    format!("Generation {generation}\n{grid}")
}

/// Writes [`render_text`] frames to any output stream
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), RenderError> {
        self.out.write_all(render_text(grid, generation).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_format() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 0, true).unwrap();
        assert_eq!(render_text(&grid, 7), "Generation 7\n. .\nx .\n");
    }

    #[test]
    fn test_text_renderer_appends_frames() {
        let grid = Grid::new(1, 3).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&grid, 0).unwrap();
        renderer.render(&grid, 1).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "Generation 0\n. . .\nGeneration 1\n. . .\n");
    }
}
