use crate::core::SnowglobeEngine;
use crate::frame::PageClock;
use crate::listeners::ListenerSet;
use crate::{constants, input, overlay, permission};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn wire_device_motion(
    listeners: &mut ListenerSet,
    engine: Rc<RefCell<SnowglobeEngine>>,
    clock: PageClock,
) {
    let Some(window) = web::window() else {
        return;
    };
    listeners.add(&window, "devicemotion", move |ev: web::DeviceMotionEvent| {
        if let Some(sample) = input::accel_sample(&ev) {
            engine.borrow_mut().on_acceleration(sample, clock.now());
        }
    });
    log::info!("[motion] listening for device motion");
}

/// Attaches the device-motion path, asking for consent first where the
/// platform requires it. Any failure leaves pointer drag as the only input.
pub fn wire_motion_input(
    document: &web::Document,
    listeners: &Rc<RefCell<ListenerSet>>,
    engine: &Rc<RefCell<SnowglobeEngine>>,
    clock: PageClock,
) {
    if !permission::requires_consent() {
        if permission::motion_supported() {
            wire_device_motion(&mut listeners.borrow_mut(), engine.clone(), clock);
        } else {
            log::info!("[motion] no DeviceMotionEvent; pointer drag only");
        }
        return;
    }

    let Some(button) = document.get_element_by_id(constants::PERMISSION_BUTTON_ID) else {
        log::warn!("[permission] consent required but #{} is missing", constants::PERMISSION_BUTTON_ID);
        let notice = engine.borrow_mut().resolve_permission(
            Err(crate::core::PermissionError::Unsupported),
            clock.now(),
        );
        if let Some(text) = notice {
            overlay::show_notice(document, &text);
        }
        return;
    };
    overlay::show_permission_button(document);

    let doc = document.clone();
    let listeners_click = Rc::downgrade(listeners);
    let engine_click = engine.clone();
    listeners
        .borrow_mut()
        .add(&button, "click", move |_: web::MouseEvent| {
            if !engine_click.borrow_mut().begin_permission_request() {
                return;
            }
            let doc = doc.clone();
            let listeners = listeners_click.clone();
            let engine = engine_click.clone();
            spawn_local(async move {
                let outcome = permission::request_motion_permission().await;
                let notice = engine.borrow_mut().resolve_permission(outcome, clock.now());
                if engine.borrow().permission.samples_allowed() {
                    overlay::permission_granted(&doc);
                    // gone if the page was torn down while the prompt was open
                    if let Some(listeners) = listeners.upgrade() {
                        wire_device_motion(&mut listeners.borrow_mut(), engine.clone(), clock);
                    }
                }
                if let Some(text) = notice {
                    overlay::show_notice(&doc, &text);
                }
            });
        });
}
