//! The ambient particle field: a density-scaled collection of embers that
//! drift upward forever, rebuilt whenever the viewport changes.

use super::particle::Particle;
use crate::config::FieldConfig;
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::renderer::traits::Surface;

/// Number of particles for a viewport: `floor(area / density)`.
/// Zero when `density` is not a positive finite number.
pub fn target_particle_count(viewport: &Viewport, density: f32) -> usize {
    if !(density.is_finite() && density > 0.0) {
        return 0;
    }
    (viewport.area() / density as f64).floor() as usize
}

/// Owns the particles and the surface they are drawn on.
pub struct ParticleField<S: Surface> {
    surface: S,
    particles: Vec<Particle>,
    viewport: Viewport,
    config: FieldConfig,
    rng: Rng,
}

impl<S: Surface> ParticleField<S> {
    /// Create an empty field. Call [`resize`](Self::resize) before the first frame.
    pub fn new(surface: S, config: FieldConfig, seed: u64) -> Self {
        Self {
            surface,
            particles: Vec::new(),
            viewport: Viewport::default(),
            config,
            rng: Rng::new(seed),
        }
    }

    /// Adopt a new viewport: reconfigure the surface and rebuild every particle.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.configure(&self.viewport);
        self.init_particles();
        log::debug!(
            "particle field resized to {}x{} @{}x: {} particles",
            viewport.width(),
            viewport.height(),
            viewport.pixel_ratio(),
            self.particles.len()
        );
    }

    /// Replace the whole collection with freshly sampled particles.
    pub fn init_particles(&mut self) {
        let count = target_particle_count(&self.viewport, self.config.density);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&self.viewport, &self.config, &mut self.rng));
        }
    }

    /// One frame: clear the logical area, then update and draw each particle.
    pub fn animate(&mut self) {
        let (w, h) = (self.viewport.width(), self.viewport.height());
        self.surface.clear(0.0, 0.0, w, h);
        for particle in &mut self.particles {
            particle.update(&self.viewport, self.config.respawn_offset, &mut self.rng);
            particle.draw(&mut self.surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
