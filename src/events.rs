use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

use crate::config::Intensity;

/// Dispatched on the element just before the animation classes land.
pub const EVENT_START: &str = "tremorStart";
/// Dispatched on the element after the animation classes are removed.
pub const EVENT_END: &str = "tremorEnd";

/// Build the `{element, intensity, duration}` detail payload shared by both
/// events. `duration` is the effective (intensity-scaled) duration in ms.
fn detail(element: &HtmlElement, intensity: Intensity, duration_ms: f64) -> JsValue {
    let detail = Object::new();
    let _ = Reflect::set(
        &detail,
        &JsValue::from_str("element"),
        &JsValue::from(element.clone()),
    );
    let _ = Reflect::set(
        &detail,
        &JsValue::from_str("intensity"),
        &JsValue::from_str(intensity.label()),
    );
    let _ = Reflect::set(
        &detail,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(duration_ms),
    );
    detail.into()
}

fn dispatch(element: &HtmlElement, name: &str, intensity: Intensity, duration_ms: f64) {
    let init = CustomEventInit::new();
    init.set_detail(&detail(element, intensity, duration_ms));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(name, &init) {
        let _ = element.dispatch_event(&event);
    }
}

pub(crate) fn dispatch_start(element: &HtmlElement, intensity: Intensity, duration_ms: f64) {
    dispatch(element, EVENT_START, intensity, duration_ms);
}

pub(crate) fn dispatch_end(element: &HtmlElement, intensity: Intensity, duration_ms: f64) {
    dispatch(element, EVENT_END, intensity, duration_ms);
}
