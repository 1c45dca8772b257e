use crate::surface::Surface;
use crate::types::{EllipseBounds, Viewport};
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use ratatui::widgets::Widget;

/// Distance between samples when filling an ellipse, in screen units.
const SAMPLE_STEP: f64 = 1.0;

/// One frame of stars, recorded in screen space and painted onto a
/// Braille canvas stretched over the widget area.
#[derive(Debug, Clone)]
pub struct StarCanvas {
    viewport: Viewport,
    background: Color,
    ellipses: Vec<(EllipseBounds, Color)>,
}

impl StarCanvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: theme::BACKGROUND,
            ellipses: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Ellipses drawn since the last fill.
    #[cfg(test)]
    pub fn ellipses(&self) -> &[(EllipseBounds, Color)] {
        &self.ellipses
    }
}

impl Surface for StarCanvas {
    fn fill(&mut self, color: Color) {
        self.background = color;
        self.ellipses.clear();
    }

    fn fill_ellipse(&mut self, bounds: EllipseBounds, color: Color) {
        if bounds.is_empty() {
            return;
        }
        self.ellipses.push((bounds, color));
    }
}

impl Widget for &StarCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let height = self.viewport.h();
        Canvas::default()
            .background_color(self.background)
            .marker(Marker::Braille)
            .x_bounds([0.0, self.viewport.w()])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for (bounds, color) in &self.ellipses {
                    ctx.draw(&FilledEllipse {
                        bounds: *bounds,
                        flip_height: height,
                        color: *color,
                    });
                }
            })
            .render(area, buf);
    }
}

/// Solid ellipse in screen space. The canvas y axis points up, so every
/// sample is flipped against `flip_height` before painting.
struct FilledEllipse {
    bounds: EllipseBounds,
    flip_height: f64,
    color: Color,
}

impl FilledEllipse {
    fn paint_at(&self, painter: &mut Painter, x: f64, y: f64) {
        if let Some((px, py)) = painter.get_point(x, self.flip_height - y) {
            painter.paint(px, py, self.color);
        }
    }
}

impl Shape for FilledEllipse {
    fn draw(&self, painter: &mut Painter) {
        let (cx, cy) = self.bounds.center();
        let rx = self.bounds.width / 2.0;
        let ry = self.bounds.height / 2.0;

        // Stars smaller than a canvas dot still show up as one dot.
        self.paint_at(painter, cx, cy);

        let cols = (self.bounds.width / SAMPLE_STEP).ceil() as usize;
        let rows = (self.bounds.height / SAMPLE_STEP).ceil() as usize;
        for row in 0..=rows {
            let y = (self.bounds.top + row as f64 * SAMPLE_STEP)
                .min(self.bounds.top + self.bounds.height);
            let dy = (y - cy) / ry;
            for col in 0..=cols {
                let x = (self.bounds.left + col as f64 * SAMPLE_STEP)
                    .min(self.bounds.left + self.bounds.width);
                let dx = (x - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.paint_at(painter, x, y);
                }
            }
        }
    }
}
