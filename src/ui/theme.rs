use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
pub const STAR: Color = Color::Rgb(255, 255, 255);
