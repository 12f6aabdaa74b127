//! Before/after comparison slider: a two-state drag machine that maps pointer
//! x onto a reveal percentage shared by the historic layer and the handle.

use super::geometry::reveal_percentage;
use super::input::{PointerInput, SliderEvent};
use super::view::SliderView;

/// Whether pointer moves currently drive the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

pub struct ComparisonSlider<V: SliderView> {
    view: V,
    state: DragState,
    percentage: Option<f32>,
}

impl<V: SliderView> ComparisonSlider<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: DragState::Idle,
            percentage: None,
        }
    }

    /// Dispatch one event. Returns the newly applied percentage, if any.
    pub fn handle(&mut self, event: SliderEvent) -> Option<f32> {
        match event {
            SliderEvent::Press(input) => self.start_drag(input),
            SliderEvent::Move(input) => self.move_drag(input),
            SliderEvent::Release => {
                self.stop_drag();
                None
            }
            SliderEvent::Click(input) => self.update_from(input),
        }
    }

    pub fn start_drag(&mut self, input: PointerInput) -> Option<f32> {
        self.state = DragState::Dragging;
        self.update_from(input)
    }

    /// Ignored while idle.
    pub fn move_drag(&mut self, input: PointerInput) -> Option<f32> {
        if self.state != DragState::Dragging {
            return None;
        }
        self.update_from(input)
    }

    pub fn stop_drag(&mut self) {
        self.state = DragState::Idle;
    }

    /// Apply the percentage for client `x` to both presentation targets.
    /// Skipped when the container has no usable width.
    pub fn update_slider(&mut self, x: f32) -> Option<f32> {
        let rect = self.view.container_rect();
        let Some(pct) = reveal_percentage(x, rect) else {
            log::trace!("slider update skipped: rect {:?}, x {}", rect, x);
            return None;
        };
        self.view.set_historic_width(pct);
        self.view.set_handle_offset(pct);
        self.percentage = Some(pct);
        Some(pct)
    }

    fn update_from(&mut self, input: PointerInput) -> Option<f32> {
        let x = input.primary_x()?;
        self.update_slider(x)
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Last applied percentage; `None` before the first successful update.
    pub fn percentage(&self) -> Option<f32> {
        self.percentage
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::view::testing::RecordingView;

    fn mouse(x: f32) -> PointerInput {
        PointerInput::Mouse { x }
    }

    fn slider() -> ComparisonSlider<RecordingView> {
        ComparisonSlider::new(RecordingView::new(100.0, 400.0))
    }

    fn assert_synced(s: &ComparisonSlider<RecordingView>, expected: f32) {
        assert_eq!(s.percentage(), Some(expected));
        assert_eq!(s.view().historic_width, Some(expected));
        assert_eq!(s.view().handle_offset, Some(expected));
    }

    #[test]
    fn drag_scenario() {
        let mut s = slider();
        assert_eq!(s.handle(SliderEvent::Press(mouse(300.0))), Some(50.0));
        assert!(s.is_dragging());
        assert_synced(&s, 50.0);

        assert_eq!(s.handle(SliderEvent::Move(mouse(100.0))), Some(0.0));
        assert_synced(&s, 0.0);

        assert_eq!(s.handle(SliderEvent::Move(mouse(600.0))), Some(100.0));
        assert_synced(&s, 100.0);

        assert_eq!(s.handle(SliderEvent::Release), None);
        assert_eq!(s.state(), DragState::Idle);

        assert_eq!(s.handle(SliderEvent::Move(mouse(300.0))), None);
        assert_synced(&s, 100.0);
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let mut s = slider();
        assert_eq!(s.handle(SliderEvent::Move(mouse(250.0))), None);
        assert_eq!(s.percentage(), None);
        assert_eq!(s.view().writes, 0);
    }

    #[test]
    fn click_jumps_without_changing_state() {
        let mut s = slider();
        assert_eq!(s.handle(SliderEvent::Click(mouse(200.0))), Some(25.0));
        assert_eq!(s.state(), DragState::Idle);
        assert_synced(&s, 25.0);
    }

    #[test]
    fn update_is_idempotent() {
        let mut once = slider();
        once.update_slider(321.0);
        let mut twice = slider();
        twice.update_slider(321.0);
        twice.update_slider(321.0);
        assert_eq!(once.percentage(), twice.percentage());
        assert_eq!(once.view().historic_width, twice.view().historic_width);
        assert_eq!(once.view().handle_offset, twice.view().handle_offset);
    }

    #[test]
    fn zero_width_container_is_a_no_op() {
        let mut s = ComparisonSlider::new(RecordingView::new(0.0, 0.0));
        assert_eq!(s.handle(SliderEvent::Press(mouse(10.0))), None);
        assert!(s.is_dragging());
        assert_eq!(s.percentage(), None);
        assert_eq!(s.view().writes, 0);
    }

    #[test]
    fn touch_without_touches_is_ignored() {
        let mut s = slider();
        assert_eq!(s.handle(SliderEvent::Press(PointerInput::Touch { x: None })), None);
        assert!(s.is_dragging());
        assert_eq!(s.view().writes, 0);

        assert_eq!(
            s.handle(SliderEvent::Move(PointerInput::Touch { x: Some(500.0) })),
            Some(100.0)
        );
        assert_eq!(s.handle(SliderEvent::Move(PointerInput::Touch { x: None })), None);
        assert_synced(&s, 100.0);
    }

    #[test]
    fn release_outside_container_still_ends_drag() {
        let mut s = slider();
        s.handle(SliderEvent::Press(PointerInput::Touch { x: Some(150.0) }));
        s.handle(SliderEvent::Move(PointerInput::Touch { x: Some(-900.0) }));
        assert_synced(&s, 0.0);
        s.handle(SliderEvent::Release);
        assert!(!s.is_dragging());
        s.handle(SliderEvent::Move(PointerInput::Touch { x: Some(400.0) }));
        assert_synced(&s, 0.0);
    }

    #[test]
    fn release_while_idle_is_harmless() {
        let mut s = slider();
        s.handle(SliderEvent::Release);
        s.handle(SliderEvent::Release);
        assert_eq!(s.state(), DragState::Idle);
    }
}
