pub mod canvas;
pub mod theme;

use crate::app::App;
use ratatui::Frame;

/// Master render function: the star canvas covers the whole terminal.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(&app.canvas, area);
}
