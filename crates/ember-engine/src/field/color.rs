/// Fill color of a particle: shared RGB with a per-particle alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleColor {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl ParticleColor {
    pub fn new(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// CSS `rgba()` string for the canvas fill style.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {:.3})", r, g, b, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string() {
        let c = ParticleColor::new([210, 161, 94], 0.45);
        assert_eq!(c.to_css(), "rgba(210, 161, 94, 0.450)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(ParticleColor::new([0, 0, 0], 1.5).alpha, 1.0);
        assert_eq!(ParticleColor::new([0, 0, 0], -0.5).alpha, 0.0);
    }
}
