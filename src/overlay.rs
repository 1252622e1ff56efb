use crate::constants::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inline `display` only; other inline styles set by the page are kept.
fn set_display(el: &web::Element, visible: bool) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        _ = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
    }
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        set_display(&el, true);
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        set_display(&el, false);
    }
}

/// Literal text only, never parsed as markup.
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    match document.get_element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => log::warn!("[dom] missing #{}", id),
    }
}

pub fn show_permission_button(document: &web::Document) {
    show(document, PERMISSION_BUTTON_ID);
}

pub fn permission_granted(document: &web::Document) {
    hide(document, PERMISSION_BUTTON_ID);
    if let Ok(Some(el)) = document.query_selector(INSTRUCTION_SUB_SELECTOR) {
        el.set_text_content(Some(DRAG_HINT));
    }
}

/// Non-blocking replacement for an alert box.
pub fn show_notice(document: &web::Document, text: &str) {
    hide(document, PERMISSION_BUTTON_ID);
    set_text(document, NOTICE_ID, text);
    show(document, NOTICE_ID);
}

/// One-time fade from the snowglobe to the night sky and message.
pub fn reveal_night(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SNOWGLOBE_SCENE_ID) {
        _ = el.class_list().add_1(FADE_OUT_CLASS);
    }
    if let Some(el) = document.get_element_by_id(NIGHT_SCENE_ID) {
        _ = el.class_list().add_1(FADE_IN_CLASS);
    }
    hide(document, NOTICE_ID);
}
