pub mod config;
pub mod core;
pub mod field;
pub mod renderer;
pub mod slider;

// Re-export key types at crate root for convenience
pub use config::{EmberConfig, FieldConfig, SliderConfig};
pub use crate::core::frame_loop::{FrameLoop, LoopControl, StopHandle};
pub use crate::core::rng::Rng;
pub use crate::core::viewport::Viewport;
pub use field::color::ParticleColor;
pub use field::particle::Particle;
pub use field::particle_field::{target_particle_count, ParticleField};
pub use renderer::traits::Surface;
pub use slider::comparison::{ComparisonSlider, DragState};
pub use slider::geometry::{reveal_percentage, SliderRect};
pub use slider::input::{PointerInput, SliderEvent};
pub use slider::view::SliderView;
