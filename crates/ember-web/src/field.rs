//! Mounts the particle field on its canvas and drives it from
//! `requestAnimationFrame` and window `resize`.

use std::cell::RefCell;
use std::rc::Rc;

use ember_engine::{FieldConfig, FrameLoop, LoopControl, ParticleField, StopHandle, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::canvas::CanvasSurface;
use crate::error::MountError;
use crate::listener::EventListener;

struct FieldRunner {
    field: ParticleField<CanvasSurface>,
    frame_loop: FrameLoop,
}

/// Keeps a mounted field alive: its state, the resize listener and the
/// loop's stop handle.
pub struct FieldHandle {
    runner: Rc<RefCell<FieldRunner>>,
    stop: StopHandle,
    _resize: EventListener,
}

impl FieldHandle {
    /// Stop the animation loop before its next frame.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn particle_count(&self) -> usize {
        self.runner.borrow().field.particle_count()
    }
}

/// Current viewport from `innerWidth`, `innerHeight` and `devicePixelRatio`.
pub fn read_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(
        dim(window.inner_width()) as f32,
        dim(window.inner_height()) as f32,
        window.device_pixel_ratio() as f32,
    )
}

fn seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}

pub fn mount(
    window: &Window,
    document: &Document,
    config: &FieldConfig,
) -> Result<FieldHandle, MountError> {
    let surface = CanvasSurface::from_document(document, &config.canvas_id)?;
    let mut field = ParticleField::new(surface, config.clone(), seed());
    field.resize(read_viewport(window));

    let runner = Rc::new(RefCell::new(FieldRunner {
        field,
        frame_loop: FrameLoop::new(),
    }));
    let stop = runner.borrow().frame_loop.stop_handle();

    let resize = {
        let runner = runner.clone();
        let win = window.clone();
        EventListener::new(window.as_ref(), "resize", move |_| {
            runner.borrow_mut().field.resize(read_viewport(&win));
        })?
    };

    start_loop(window, runner.clone())?;

    log::info!(
        "particle field: mounted on #{} with {} particles",
        config.canvas_id,
        runner.borrow().field.particle_count()
    );
    Ok(FieldHandle {
        runner,
        stop,
        _resize: resize,
    })
}

/// Each frame re-queues itself until the frame loop reports `Stop`.
fn start_loop(window: &Window, runner: Rc<RefCell<FieldRunner>>) -> Result<(), MountError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (control, frames) = {
            let mut guard = runner.borrow_mut();
            let FieldRunner { field, frame_loop } = &mut *guard;
            let control = frame_loop.run_frame(|| field.animate());
            (control, frame_loop.frames())
        };

        match control {
            LoopControl::Continue => {
                if let Some(cb) = f.borrow().as_ref() {
                    if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        log::error!("particle field: requestAnimationFrame failed: {:?}", e);
                    }
                }
            }
            LoopControl::Stop => {
                log::info!("particle field: animation stopped after {} frames", frames);
                // Drop our own closure; it is freed once this call returns.
                let _ = f.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
