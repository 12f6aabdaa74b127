use super::geometry::SliderRect;

/// The slider's presentation targets, implemented over the DOM by the host.
pub trait SliderView {
    /// Current bounding rect of the container.
    fn container_rect(&self) -> SliderRect;

    /// Visible width of the historic layer, as a percentage of the container.
    fn set_historic_width(&mut self, percent: f32);

    /// Horizontal offset of the handle, as a percentage of the container.
    fn set_handle_offset(&mut self, percent: f32);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Fixed-rect view that records every write.
    #[derive(Debug)]
    pub(crate) struct RecordingView {
        pub rect: SliderRect,
        pub historic_width: Option<f32>,
        pub handle_offset: Option<f32>,
        pub writes: usize,
    }

    impl RecordingView {
        pub fn new(left: f32, width: f32) -> Self {
            Self {
                rect: SliderRect::new(left, width),
                historic_width: None,
                handle_offset: None,
                writes: 0,
            }
        }
    }

    impl SliderView for RecordingView {
        fn container_rect(&self) -> SliderRect {
            self.rect
        }

        fn set_historic_width(&mut self, percent: f32) {
            self.historic_width = Some(percent);
            self.writes += 1;
        }

        fn set_handle_offset(&mut self, percent: f32) {
            self.handle_offset = Some(percent);
            self.writes += 1;
        }
    }
}
