use crate::core::SnowglobeEngine;
use crate::frame::PageClock;
use crate::input;
use crate::listeners::ListenerSet;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drag-to-snow fallback; works next to device motion.
pub fn wire_pointer_input(
    listeners: &mut ListenerSet,
    engine: Rc<RefCell<SnowglobeEngine>>,
    clock: PageClock,
) {
    let Some(window) = web::window() else {
        return;
    };

    let engine_down = engine.clone();
    listeners.add(&window, "pointerdown", move |ev: web::PointerEvent| {
        engine_down
            .borrow_mut()
            .pointer_down(input::pointer_client_pos(&ev));
    });

    for kind in ["pointerup", "pointercancel"] {
        let engine_up = engine.clone();
        listeners.add(&window, kind, move |_: web::PointerEvent| {
            engine_up.borrow_mut().pointer_up();
        });
    }

    let engine_move = engine;
    listeners.add(&window, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_client_pos(&ev);
        if let Some(cmd) = engine_move.borrow_mut().pointer_move(pos, clock.now()) {
            log::debug!("[pointer] drag spawned {} flakes", cmd.count);
        }
    });
}
