#![cfg(target_arch = "wasm32")]
use crate::core::{EngineParams, MotionConfig, PageHide, PageParams, SnowglobeEngine};
use frame::{FrameContext, FrameLoop, PageClock};
use listeners::ListenerSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod listeners;
mod overlay;
mod permission;
mod render;

/// Everything that has to be released when the page goes away.
struct Session {
    engine: Rc<RefCell<SnowglobeEngine>>,
    listeners: Rc<RefCell<ListenerSet>>,
    frame_loop: FrameLoop,
}

impl Session {
    fn teardown(self) {
        self.frame_loop.stop();
        let detached = self.listeners.borrow().len();
        self.listeners.borrow_mut().clear();
        self.engine.borrow_mut().teardown();
        log::info!("[page] torn down ({} listeners detached)", detached);
    }
}

fn engine_params(page: &PageParams) -> EngineParams {
    let mut params = EngineParams::default();
    if let Some(kind) = page.policy {
        params.motion = MotionConfig::for_policy(kind);
        log::info!("[params] shake policy {:?}", kind);
    }
    params
}

/// Tears the session down on a real unload. The listener owns the session,
/// so it stays alive as long as the page does.
fn wire_teardown(window: &web::Window, session: Session) {
    let listeners = session.listeners.clone();
    let slot = RefCell::new(Some(session));
    listeners
        .borrow_mut()
        .add(window, "pagehide", move |ev: web::PageTransitionEvent| {
            let hide = PageHide::from_persisted(ev.persisted());
            if !hide.releases_session() {
                log::info!("[page] kept in back/forward cache");
                return;
            }
            let session = slot.borrow_mut().take();
            if let Some(s) = session {
                s.teardown();
            }
        });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snowglobe starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let page = dom::page_params(&window);
    overlay::set_text(&document, constants::MESSAGE_ID, &page.message);

    let clock = PageClock::new();
    let engine = Rc::new(RefCell::new(SnowglobeEngine::new(
        engine_params(&page),
        page.message,
        permission::requires_consent(),
        rand::random(),
    )));

    let listeners = Rc::new(RefCell::new(ListenerSet::default()));
    {
        let mut l = listeners.borrow_mut();
        dom::wire_canvas_resize(&mut l, &canvas);
        events::wire_pointer_input(&mut l, engine.clone(), clock);
    }
    events::wire_motion_input(&document, &listeners, &engine, clock);
    engine.borrow_mut().start(clock.now());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine: engine.clone(),
        clock,
        canvas,
        document,
        gpu,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    wire_teardown(
        &window,
        Session {
            engine,
            listeners,
            frame_loop,
        },
    );
    Ok(())
}
