use ember_engine::EmberConfig;
use web_sys::{Document, Window};

use crate::field::{self, FieldHandle};
use crate::slider::{self, SliderHandle};

/// Everything mounted on the page, held for the page lifetime.
///
/// The two components are mounted independently: either one may be absent
/// without affecting the other.
pub struct PageRunner {
    field: Option<FieldHandle>,
    slider: Option<SliderHandle>,
}

impl PageRunner {
    pub fn mount(window: &Window, document: &Document, config: &EmberConfig) -> Self {
        let field = match field::mount(window, document, &config.field) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("particle field disabled: {}", e);
                None
            }
        };
        let slider = match slider::mount(window, document, &config.slider) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::info!("comparison slider disabled: {}", e);
                None
            }
        };
        Self { field, slider }
    }

    /// Stop the particle animation. No-op when the field is not mounted.
    pub fn stop(&self) {
        if let Some(field) = &self.field {
            field.stop();
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.field
            .as_ref()
            .map_or(0, |f| f.particle_count() as u32)
    }

    pub fn reveal_percentage(&self) -> Option<f32> {
        self.slider.as_ref().and_then(|s| s.percentage())
    }
}
