use crate::star::Star;
use crate::surface::Surface;
use crate::types::Viewport;
use crate::ui::theme;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fixed set of stars plus the random source that scatters them.
pub struct StarField<R: Rng = StdRng> {
    stars: Vec<Star>,
    viewport: Viewport,
    rng: R,
}

impl StarField<StdRng> {
    /// Reproducible field: the same seed always yields the same stars.
    pub fn with_seed(count: usize, viewport: Viewport, seed: u64) -> Self {
        Self::new(count, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(count: usize, viewport: Viewport) -> Self {
        Self::new(count, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> StarField<R> {
    pub fn new(count: usize, viewport: Viewport, mut rng: R) -> Self {
        let stars = (0..count).map(|_| Star::new(&mut rng, viewport)).collect();
        Self {
            stars,
            viewport,
            rng,
        }
    }

    /// Clear the surface, then advance and draw every star in order.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S, mouse_x: f64) {
        surface.fill(theme::BACKGROUND);
        for star in &mut self.stars {
            star.update(mouse_x, &mut self.rng, self.viewport);
            star.show(surface, self.viewport);
        }
    }

    #[cfg(test)]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
