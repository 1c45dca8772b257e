use crate::types::EllipseBounds;
use ratatui::style::Color;

/// Something a frame of stars can be drawn onto.
pub trait Surface {
    /// Overwrite the whole surface with `color`.
    fn fill(&mut self, color: Color);

    /// Draw a filled ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: EllipseBounds, color: Color);
}
