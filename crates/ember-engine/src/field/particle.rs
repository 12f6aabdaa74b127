//! A single drifting ember.

use glam::Vec2;

use super::color::ParticleColor;
use crate::config::FieldConfig;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::renderer::traits::Surface;

/// One animated point. Size, color and velocity are fixed at construction;
/// only the position changes.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    size: f32,
    color: ParticleColor,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: ParticleColor) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
        }
    }

    /// Sample a particle at a uniform random spot inside the viewport.
    pub fn spawn(viewport: &Viewport, config: &FieldConfig, rng: &mut Rng) -> Self {
        let position = Vec2::new(
            rng.range(0.0, viewport.width()),
            rng.range(0.0, viewport.height()),
        );
        let size = rng.range(config.size_range.0, config.size_range.1);
        let velocity = Vec2::new(
            rng.range(config.speed_x_range.0, config.speed_x_range.1),
            rng.range(config.speed_y_range.0, config.speed_y_range.1),
        );
        let alpha = rng.range(config.alpha_range.0, config.alpha_range.1);
        Self::new(position, velocity, size, ParticleColor::new(config.rgb, alpha))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> &ParticleColor {
        &self.color
    }

    /// Advance one frame. A particle that left through the left, right or top
    /// edge is recycled in place just below the bottom edge.
    /// Returns true when it was recycled.
    pub fn update(&mut self, viewport: &Viewport, respawn_offset: f32, rng: &mut Rng) -> bool {
        self.position += self.velocity;

        if viewport.contains(self.position) {
            return false;
        }
        self.position = Vec2::new(
            rng.range(0.0, viewport.width()),
            viewport.height() + respawn_offset,
        );
        true
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.position, self.size, &self.color);
    }
}
