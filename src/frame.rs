use crate::core::project::{project_particles, project_stars};
use crate::core::SnowglobeEngine;
use crate::render::{self, SkyParams};
use crate::{dom, overlay};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Engine time: elapsed since page start, shared by input callbacks and frames.
#[derive(Clone, Copy)]
pub struct PageClock {
    origin: Instant,
}

impl PageClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<SnowglobeEngine>>,
    pub clock: PageClock,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let viewport = dom::viewport(&self.canvas);

        let report = {
            let mut eng = self.engine.borrow_mut();
            eng.set_viewport_height(viewport.height);
            eng.tick(now)
        };
        if let Some(t) = report.transition {
            log::info!(
                "[scene] revealing message at {:.2}s ({} flakes frozen)",
                t.at.as_secs_f32(),
                report.live_particles
            );
            overlay::reveal_night(&self.document);
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        let (sky, sprites) = {
            let eng = self.engine.borrow();
            let night_mix = eng.night_mix(now);
            let t_sec = now.as_secs_f32();
            let mut sprites = project_stars(&eng.stars, viewport, t_sec, night_mix);
            sprites.extend(project_particles(&eng.field, viewport, 1.0 - night_mix));
            let sky = SkyParams {
                night_mix,
                shake: eng.shake_level(),
                time: t_sec,
            };
            (sky, sprites)
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&sky, &sprites) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop; `stop` cancels the pending frame and
/// releases the callback.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    FrameLoop { handle, tick }
}
