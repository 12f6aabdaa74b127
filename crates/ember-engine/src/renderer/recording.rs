use glam::Vec2;

use super::traits::Surface;
use crate::core::viewport::Viewport;
use crate::field::color::ParticleColor;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceCall {
    Configure {
        backing: (u32, u32),
        css: (f32, f32),
        scale: f32,
    },
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: ParticleColor,
    },
}

/// Test surface that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Circle { .. }))
            .count()
    }

    pub fn last_configure(&self) -> Option<&SurfaceCall> {
        self.calls
            .iter()
            .rev()
            .find(|c| matches!(c, SurfaceCall::Configure { .. }))
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, viewport: &Viewport) {
        self.calls.push(SurfaceCall::Configure {
            backing: viewport.backing_size(),
            css: (viewport.width(), viewport.height()),
            scale: viewport.pixel_ratio(),
        });
    }

    fn clear(&mut self, _x: f32, _y: f32, width: f32, height: f32) {
        self.calls.push(SurfaceCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor) {
        self.calls.push(SurfaceCall::Circle {
            center,
            radius,
            color: *color,
        });
    }
}
