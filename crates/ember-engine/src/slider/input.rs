/// Pointer input the slider understands, already reduced to a horizontal
/// client coordinate by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// A mouse event. Always carries a coordinate.
    Mouse { x: f32 },
    /// A touch event. `x` is the first active touch, `None` when the
    /// touch list is empty (e.g. a stray touchend).
    Touch { x: Option<f32> },
}

impl PointerInput {
    /// The primary horizontal coordinate, if the event has one.
    pub fn primary_x(&self) -> Option<f32> {
        match *self {
            PointerInput::Mouse { x } => Some(x),
            PointerInput::Touch { x } => x,
        }
    }
}

/// Slider-level events, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// mousedown / touchstart inside the container.
    Press(PointerInput),
    /// mousemove / touchmove anywhere on the page.
    Move(PointerInput),
    /// mouseup / touchend anywhere on the page.
    Release,
    /// A click on the container.
    Click(PointerInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_x_for_each_family() {
        assert_eq!(PointerInput::Mouse { x: 12.5 }.primary_x(), Some(12.5));
        assert_eq!(PointerInput::Touch { x: Some(40.0) }.primary_x(), Some(40.0));
        assert_eq!(PointerInput::Touch { x: None }.primary_x(), None);
    }
}
