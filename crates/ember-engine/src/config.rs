use serde::{Deserialize, Serialize};

/// Page-level configuration for the particle field and the slider.
/// Loaded from a JSON blob embedded in the host page; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmberConfig {
    /// `log` level name ("error", "warn", "info", "debug", "trace").
    pub log_level: String,
    pub field: FieldConfig,
    pub slider: SliderConfig,
}

impl Default for EmberConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            field: FieldConfig::default(),
            slider: SliderConfig::default(),
        }
    }
}

impl EmberConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured level, falling back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Tuning for the ambient particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Element id of the canvas.
    pub canvas_id: String,
    /// Square CSS pixels per particle.
    pub density: f32,
    /// Min/max radius.
    pub size_range: (f32, f32),
    /// Min/max horizontal speed per frame.
    pub speed_x_range: (f32, f32),
    /// Min/max vertical speed per frame. Negative is upward.
    pub speed_y_range: (f32, f32),
    /// Min/max fill alpha.
    pub alpha_range: (f32, f32),
    /// Fill color shared by all particles.
    pub rgb: [u8; 3],
    /// How far below the bottom edge recycled particles re-enter.
    pub respawn_offset: f32,
}

impl FieldConfig {
    pub const DEFAULT_DENSITY: f32 = 15000.0;
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: "particles".to_string(),
            density: Self::DEFAULT_DENSITY,
            size_range: (0.5, 2.5),
            speed_x_range: (-0.25, 0.25),
            speed_y_range: (-0.7, -0.2),
            alpha_range: (0.2, 0.7),
            rgb: [210, 161, 94],
            respawn_offset: 10.0,
        }
    }
}

/// CSS selectors for the comparison slider's three elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub container_selector: String,
    pub historic_selector: String,
    pub handle_selector: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container_selector: ".comparison-container".to_string(),
            historic_selector: ".image-wrapper.historic".to_string(),
            handle_selector: ".slider-handle".to_string(),
        }
    }
}
