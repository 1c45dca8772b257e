use serde::Deserialize;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_STAR_COUNT: usize = 800;
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Startup options, read from `config.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub star_count: usize,
    pub target_fps: u32,
    /// Fixed seed for the star generator. Random when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            star_count: DEFAULT_STAR_COUNT,
            target_fps: DEFAULT_TARGET_FPS,
            seed: None,
        }
    }
}

impl Config {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
        }
    }
}

/// Logical size of the drawing surface, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn w(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn h(&self) -> f64 {
        f64::from(self.height)
    }
}

/// Axis-aligned box around an ellipse, top-left origin, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl EllipseBounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
