use crate::field::StarField;
use crate::math::remap;
use crate::types::{Config, Viewport};
use crate::ui::canvas::StarCanvas;
use tracing::{debug, info};

/// Top-level application state.
pub struct App {
    pub field: StarField,
    pub canvas: StarCanvas,
    pub viewport: Viewport,
    /// Last terminal column the pointer was seen in.
    pub pointer_column: u16,
    /// Width of the terminal, in columns.
    pub columns: u16,
    pub should_quit: bool,
    /// Frames rendered so far.
    pub frames: u64,
}

impl App {
    pub fn new(config: &Config, columns: u16) -> Self {
        let viewport = config.viewport();
        let field = match config.seed {
            Some(seed) => StarField::with_seed(config.star_count, viewport, seed),
            None => StarField::from_entropy(config.star_count, viewport),
        };
        info!(
            stars = field.len(),
            width = viewport.width,
            height = viewport.height,
            seed = ?config.seed,
            "star field ready"
        );
        Self {
            field,
            canvas: StarCanvas::new(viewport),
            viewport,
            pointer_column: 0,
            columns,
            should_quit: false,
            frames: 0,
        }
    }

    /// Pointer position across the viewport: the first terminal column is 0,
    /// the last one is the viewport width.
    pub fn mouse_x(&self) -> f64 {
        if self.columns < 2 {
            return 0.0;
        }
        let last = f64::from(self.columns - 1);
        remap(f64::from(self.pointer_column), 0.0, last, 0.0, self.viewport.w())
    }

    pub fn point_at(&mut self, column: u16) {
        self.pointer_column = column;
    }

    pub fn resize(&mut self, columns: u16) {
        debug!(columns, "terminal resized");
        self.columns = columns;
    }

    pub fn quit(&mut self) {
        if !self.should_quit {
            info!(frames = self.frames, "quit requested");
        }
        self.should_quit = true;
    }

    /// Advance every star one step and redraw them into the canvas.
    pub fn render_frame(&mut self) {
        let mouse_x = self.mouse_x();
        self.field.render_frame(&mut self.canvas, mouse_x);
        self.frames += 1;
    }
}
