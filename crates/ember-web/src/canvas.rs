//! `Surface` over a `<canvas>` 2D context.

use std::f64::consts::TAU;

use ember_engine::{ParticleColor, Surface, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::MountError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `#id` and acquire its 2D context.
    pub fn from_document(document: &Document, id: &str) -> Result<Self, MountError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::MissingElement {
                selector: format!("#{}", id),
            })?;
        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| MountError::NotACanvas { id: id.to_string() })?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn configure(&mut self, viewport: &Viewport) {
        let (backing_w, backing_h) = viewport.backing_size();
        // Resizing the backing store also resets the context transform.
        self.canvas.set_width(backing_w);
        self.canvas.set_height(backing_h);

        let style = self.canvas.style();
        let css_w = format!("{}px", viewport.width());
        let css_h = format!("{}px", viewport.height());
        if let Err(e) = style
            .set_property("width", &css_w)
            .and_then(|_| style.set_property("height", &css_h))
        {
            log::error!("canvas: failed to set css size: {:?}", e);
        }

        let ratio = viewport.pixel_ratio() as f64;
        if let Err(e) = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
            log::error!("canvas: failed to set transform: {:?}", e);
        }
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
