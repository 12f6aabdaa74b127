/// Horizontal extent of the slider container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRect {
    pub left: f32,
    pub width: f32,
}

impl SliderRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }
}

/// Map a client x to a reveal percentage in [0, 100].
/// `None` when the container has no usable width (hidden or not laid out)
/// or `x` is not finite.
pub fn reveal_percentage(x: f32, rect: SliderRect) -> Option<f32> {
    if !(rect.width.is_finite() && rect.width > 0.0) || !x.is_finite() || !rect.left.is_finite() {
        return None;
    }
    let position = (x - rect.left).clamp(0.0, rect.width);
    Some(position / rect.width * 100.0)
}
