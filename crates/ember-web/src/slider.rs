//! Binds the comparison slider to its three DOM elements and to page-wide
//! mouse and touch input.

use std::cell::RefCell;
use std::rc::Rc;

use ember_engine::{
    ComparisonSlider, PointerInput, SliderConfig, SliderEvent, SliderRect, SliderView,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, Window};

use crate::error::MountError;
use crate::listener::EventListener;

type SharedSlider = Rc<RefCell<ComparisonSlider<DomSliderView>>>;

/// CSS value for a percentage of the container width.
pub fn percent_style(percent: f32) -> String {
    format!("{}%", percent)
}

pub struct DomSliderView {
    container: HtmlElement,
    historic: HtmlElement,
    handle: HtmlElement,
}

impl DomSliderView {
    /// All three elements must be present.
    pub fn query(document: &Document, config: &SliderConfig) -> Result<Self, MountError> {
        Ok(Self {
            container: query_html(document, &config.container_selector)?,
            historic: query_html(document, &config.historic_selector)?,
            handle: query_html(document, &config.handle_selector)?,
        })
    }
}

fn query_html(document: &Document, selector: &str) -> Result<HtmlElement, MountError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| MountError::MissingElement {
            selector: selector.to_string(),
        })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::Dom(format!("`{}` is not an HTML element", selector)))
}

fn set_percent(element: &HtmlElement, property: &str, percent: f32) {
    if let Err(e) = element
        .style()
        .set_property(property, &percent_style(percent))
    {
        log::error!("slider: failed to set {}: {:?}", property, e);
    }
}

impl SliderView for DomSliderView {
    fn container_rect(&self) -> SliderRect {
        let rect = self.container.get_bounding_client_rect();
        SliderRect::new(rect.left() as f32, rect.width() as f32)
    }

    fn set_historic_width(&mut self, percent: f32) {
        set_percent(&self.historic, "width", percent);
    }

    fn set_handle_offset(&mut self, percent: f32) {
        set_percent(&self.handle, "left", percent);
    }
}

fn mouse_input(event: &Event) -> Option<PointerInput> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|m| PointerInput::Mouse { x: m.client_x() as f32 })
}

fn touch_input(event: &Event) -> Option<PointerInput> {
    event.dyn_ref::<TouchEvent>().map(|t| PointerInput::Touch {
        x: t.touches().get(0).map(|touch| touch.client_x() as f32),
    })
}

/// Keeps a mounted slider and its listeners alive.
pub struct SliderHandle {
    slider: SharedSlider,
    _listeners: Vec<EventListener>,
}

impl SliderHandle {
    pub fn percentage(&self) -> Option<f32> {
        self.slider.borrow().percentage()
    }
}

fn listen(
    slider: &SharedSlider,
    target: &EventTarget,
    kind: &'static str,
    passive: bool,
    translate: fn(&Event) -> Option<SliderEvent>,
) -> Result<EventListener, MountError> {
    let slider = slider.clone();
    let handler = move |event: Event| {
        if let Some(ev) = translate(&event) {
            slider.borrow_mut().handle(ev);
        }
    };
    if passive {
        EventListener::passive(target, kind, handler)
    } else {
        EventListener::new(target, kind, handler)
    }
}

pub fn mount(
    window: &Window,
    document: &Document,
    config: &SliderConfig,
) -> Result<SliderHandle, MountError> {
    let view = DomSliderView::query(document, config)?;
    let container: EventTarget = view.container.clone().into();
    let page: &EventTarget = window.as_ref();
    let slider: SharedSlider = Rc::new(RefCell::new(ComparisonSlider::new(view)));

    let listeners = vec![
        listen(&slider, &container, "mousedown", false, |e| {
            mouse_input(e).map(SliderEvent::Press)
        })?,
        listen(&slider, page, "mouseup", false, |_| Some(SliderEvent::Release))?,
        listen(&slider, page, "mousemove", false, |e| {
            mouse_input(e).map(SliderEvent::Move)
        })?,
        listen(&slider, &container, "touchstart", true, |e| {
            touch_input(e).map(SliderEvent::Press)
        })?,
        listen(&slider, page, "touchend", false, |_| Some(SliderEvent::Release))?,
        listen(&slider, page, "touchmove", true, |e| {
            touch_input(e).map(SliderEvent::Move)
        })?,
        listen(&slider, &container, "click", false, |e| {
            mouse_input(e).map(SliderEvent::Click)
        })?,
    ];

    log::info!("comparison slider: mounted on `{}`", config.container_selector);
    Ok(SliderHandle {
        slider,
        _listeners: listeners,
    })
}
