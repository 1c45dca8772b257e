use crate::math::remap;
use crate::surface::Surface;
use crate::types::{EllipseBounds, Viewport};
use crate::ui::theme;
use rand::Rng;

/// Depth lost per frame when the pointer sits on the right edge.
pub const MAX_SPEED: f64 = 50.0;
/// Size of a star at depth 1.
pub const MAX_RADIUS: f64 = 8.0;

/// A single star. `x` and `y` are offsets from the centre of the screen,
/// `z` is its depth (smaller is closer).
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pz: f64,
}

impl Star {
    pub fn new<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        let mut star = Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            pz: 1.0,
        };
        star.initialize(rng, viewport);
        star
    }

    /// Place the star at a fresh random position and depth.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R, viewport: Viewport) {
        self.scatter(rng, viewport);
        self.pz = self.z;
    }

    /// Depth before the most recent update. Not consumed by drawing.
    #[allow(dead_code)]
    pub fn previous_z(&self) -> f64 {
        self.pz
    }

    /// Move the star toward the viewer. The speed follows `mouse_x` across
    /// the viewport width; a star that passes depth 1 is scattered again.
    pub fn update<R: Rng>(&mut self, mouse_x: f64, rng: &mut R, viewport: Viewport) {
        self.pz = self.z;
        self.z -= remap(mouse_x, 0.0, viewport.w(), 0.0, MAX_SPEED);

        if self.z < 1.0 {
            // pz keeps the depth from before this update
            self.scatter(rng, viewport);
        }
    }

    /// Perspective divide, relative to the centre of the screen.
    pub fn projected_position(&self, viewport: Viewport) -> (f64, f64) {
        let sx = remap(self.x / self.z, 0.0, 1.0, 0.0, viewport.w());
        let sy = remap(self.y / self.z, 0.0, 1.0, 0.0, viewport.h());
        (sx, sy)
    }

    /// Projected position with the origin moved to the top-left corner.
    pub fn screen_position(&self, viewport: Viewport) -> (f64, f64) {
        let (sx, sy) = self.projected_position(viewport);
        (sx + viewport.w() / 2.0, sy + viewport.h() / 2.0)
    }

    /// Shrinks from [`MAX_RADIUS`] at depth 1 to zero at the far plane.
    /// Negative past the far plane.
    pub fn radius(&self, viewport: Viewport) -> f64 {
        remap(self.z, 1.0, viewport.w(), MAX_RADIUS, 0.0)
    }

    pub fn show<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Viewport) {
        let (left, top) = self.screen_position(viewport);
        let size = self.radius(viewport).max(0.0);
        surface.fill_ellipse(
            EllipseBounds {
                left,
                top,
                width: size,
                height: size,
            },
            theme::STAR,
        );
    }

    fn scatter<R: Rng>(&mut self, rng: &mut R, viewport: Viewport) {
        let w = i64::from(viewport.width);
        let h = i64::from(viewport.height);
        self.x = rng.gen_range(-w..=w) as f64;
        self.y = rng.gen_range(-h..=h) as f64;
        self.z = rng.gen_range(1..=w) as f64;
    }
}
