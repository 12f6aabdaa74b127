use glam::Vec2;

/// Logical viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    pixel_ratio: f32,
}

impl Viewport {
    /// Sizes that are negative or not finite become 0; a ratio that is not
    /// a positive finite number becomes 1.0.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sanitize(width),
            height: sanitize(height),
            pixel_ratio,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Logical area in square CSS pixels. Computed in `f64` so large
    /// viewports stay exact.
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    /// True while a particle at `point` is still on screen.
    /// The bottom edge is open: recycled particles start below it.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_size_scales_by_ratio() {
        let vp = Viewport::new(1500.0, 1000.0, 2.0);
        assert_eq!(vp.backing_size(), (3000, 2000));
    }

    #[test]
    fn fractional_ratio_rounds() {
        let vp = Viewport::new(333.0, 100.0, 1.5);
        assert_eq!(vp.backing_size(), (500, 150));
    }

    #[test]
    fn sanitizes_bad_input() {
        let vp = Viewport::new(-10.0, f32::NAN, 0.0);
        assert_eq!(vp.width(), 0.0);
        assert_eq!(vp.height(), 0.0);
        assert_eq!(vp.pixel_ratio(), 1.0);

        let vp = Viewport::new(10.0, 10.0, f32::INFINITY);
        assert_eq!(vp.pixel_ratio(), 1.0);
    }

    #[test]
    fn area_is_exact_past_f32_precision() {
        let vp = Viewport::new(6683.0, 2653.0, 1.0);
        assert_eq!(vp.area(), 17_729_999.0);
    }

    #[test]
    fn contains_leaves_bottom_open() {
        let vp = Viewport::new(100.0, 50.0, 1.0);
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(100.0, 60.0)));
        assert!(!vp.contains(Vec2::new(-0.1, 10.0)));
        assert!(!vp.contains(Vec2::new(100.1, 10.0)));
        assert!(!vp.contains(Vec2::new(50.0, -0.1)));
    }
}
