use crate::core::PermissionError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn device_motion_ctor() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("DeviceMotionEvent"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn request_permission_fn(ctor: &JsValue) -> Option<Function> {
    Reflect::get(ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

/// True where motion samples only arrive after an explicit user grant (iOS 13+).
pub fn requires_consent() -> bool {
    device_motion_ctor()
        .as_ref()
        .and_then(request_permission_fn)
        .is_some()
}

pub fn motion_supported() -> bool {
    device_motion_ctor().is_some()
}

/// Single request; must run inside a user gesture.
pub async fn request_motion_permission() -> Result<(), PermissionError> {
    let ctor = device_motion_ctor().ok_or(PermissionError::Unsupported)?;
    let request = request_permission_fn(&ctor).ok_or(PermissionError::Unsupported)?;
    let promise: Promise = request
        .call0(&ctor)
        .map_err(|e| PermissionError::Request(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| PermissionError::Request("requestPermission returned no promise".into()))?;
    let answer = JsFuture::from(promise)
        .await
        .map_err(|e| PermissionError::Request(format!("{:?}", e)))?;
    match answer.as_string().as_deref() {
        Some("granted") => Ok(()),
        _ => Err(PermissionError::Denied),
    }
}
