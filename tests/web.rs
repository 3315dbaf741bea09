//! In-browser lifecycle tests. Run with `wasm-pack test --headless --chrome`
//! (or `--firefox`); on non-wasm targets this file compiles to nothing.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use tremor::{
    attach, hover_shake, reset_all, trigger_shake, Intensity, ShakeConfig, Trigger, EVENT_END,
    EVENT_START, STYLE_ELEMENT_ID,
};

wasm_bindgen_test_configure!(run_in_browser);

fn mounted_div() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    el.set_text_content(Some("shake me"));
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn has_class(el: &HtmlElement, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Counts dispatches of one event on one element and records the last
/// `duration` seen in the detail payload.
fn count_events(el: &HtmlElement, name: &str) -> (Rc<Cell<u32>>, Rc<Cell<f64>>) {
    let count = Rc::new(Cell::new(0u32));
    let last_duration = Rc::new(Cell::new(f64::NAN));
    let count_inner = Rc::clone(&count);
    let duration_inner = Rc::clone(&last_duration);
    let closure = Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
        count_inner.set(count_inner.get() + 1);
        if let Ok(value) = js_sys::Reflect::get(&event.detail(), &JsValue::from_str("duration")) {
            if let Some(ms) = value.as_f64() {
                duration_inner.set(ms);
            }
        }
    }) as Box<dyn FnMut(web_sys::CustomEvent)>);
    el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
    (count, last_duration)
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn immediate_attach_runs_full_lifecycle() {
    let el = mounted_div();
    let (starts, start_duration) = count_events(&el, EVENT_START);
    let (ends, end_duration) = count_events(&el, EVENT_END);

    let _handle = attach(
        &el,
        ShakeConfig {
            trigger: Trigger::Immediate,
            duration_ms: 300.0,
            delay_ms: 0.0,
            intensity: Intensity::Medium,
            once: true,
        },
    );

    // Zero delay fires synchronously
    assert_eq!(starts.get(), 1);
    assert!((start_duration.get() - 300.0).abs() < f64::EPSILON);
    assert!(has_class(&el, "tremor-active"));
    assert!(has_class(&el, "tremor-medium"));
    assert!(has_class(&el, "tremor-hero"));
    assert_eq!(
        el.style().get_property_value("--tremor-duration").unwrap(),
        "300ms"
    );
    assert_eq!(ends.get(), 0);

    sleep(450).await;
    assert_eq!(ends.get(), 1);
    assert!((end_duration.get() - 300.0).abs() < f64::EPSILON);
    assert!(!has_class(&el, "tremor-active"));
    assert!(!has_class(&el, "tremor-medium"));
    assert!(!has_class(&el, "tremor-hero"));
}

#[wasm_bindgen_test]
async fn high_intensity_scales_event_duration() {
    let el = mounted_div();
    let (starts, start_duration) = count_events(&el, EVENT_START);

    let _handle = trigger_shake(
        &el,
        ShakeConfig {
            duration_ms: 1000.0,
            intensity: Intensity::High,
            ..Default::default()
        },
    );

    assert_eq!(starts.get(), 1);
    assert!((start_duration.get() - 1200.0).abs() < f64::EPSILON);
    assert!(has_class(&el, "tremor-high"));
}

#[wasm_bindgen_test]
async fn scroll_trigger_fires_without_hero_class() {
    let el = mounted_div();
    let (starts, start_duration) = count_events(&el, EVENT_START);

    let _handle = attach(
        &el,
        ShakeConfig {
            trigger: Trigger::Scroll,
            duration_ms: 1000.0,
            intensity: Intensity::High,
            ..Default::default()
        },
    );

    // The element is in the viewport, so the observer fires on its first pass
    sleep(300).await;
    assert_eq!(starts.get(), 1);
    assert!((start_duration.get() - 1200.0).abs() < f64::EPSILON);
    assert!(has_class(&el, "tremor-active"));
    assert!(has_class(&el, "tremor-high"));
    assert!(!has_class(&el, "tremor-hero"));
}

#[wasm_bindgen_test]
async fn destroy_right_after_attach_disarms_everything() {
    let el = mounted_div();
    let (starts, _) = count_events(&el, EVENT_START);

    let handle = attach(&el, ShakeConfig::default());
    handle.destroy();

    assert_eq!(el.class_list().length(), 0);
    sleep(300).await;
    // Watcher was disconnected before it could fire
    assert_eq!(starts.get(), 0);
    assert_eq!(el.class_list().length(), 0);
}

#[wasm_bindgen_test]
async fn once_policy_yields_exactly_one_event_pair() {
    let el = mounted_div();
    let (starts, _) = count_events(&el, EVENT_START);
    let (ends, _) = count_events(&el, EVENT_END);

    let config = ShakeConfig {
        duration_ms: 200.0,
        once: true,
        ..Default::default()
    };
    let _first = trigger_shake(&el, config);
    let _second = trigger_shake(&el, config);

    assert_eq!(starts.get(), 1);
    sleep(400).await;
    assert_eq!(starts.get(), 1);
    assert_eq!(ends.get(), 1);
}

#[wasm_bindgen_test]
async fn repeat_policy_fires_every_time() {
    let el = mounted_div();
    let (starts, _) = count_events(&el, EVENT_START);
    let (ends, _) = count_events(&el, EVENT_END);

    let config = ShakeConfig {
        duration_ms: 100.0,
        once: false,
        ..Default::default()
    };
    let _first = trigger_shake(&el, config);
    sleep(250).await;
    let _second = trigger_shake(&el, config);
    sleep(250).await;

    assert_eq!(starts.get(), 2);
    assert_eq!(ends.get(), 2);
}

#[wasm_bindgen_test]
async fn reset_allows_a_once_element_to_animate_again() {
    let el = mounted_div();
    let (starts, _) = count_events(&el, EVENT_START);

    let config = ShakeConfig {
        duration_ms: 100.0,
        once: true,
        ..Default::default()
    };
    let _first = trigger_shake(&el, config);
    sleep(250).await;
    let _suppressed = trigger_shake(&el, config);
    assert_eq!(starts.get(), 1);

    reset_all();
    assert_eq!(el.class_list().length(), 0);

    let _again = trigger_shake(&el, config);
    assert_eq!(starts.get(), 2);
}

#[wasm_bindgen_test]
async fn update_does_not_restart_an_inflight_animation() {
    let el = mounted_div();
    let (ends, end_duration) = count_events(&el, EVENT_END);

    let handle = trigger_shake(
        &el,
        ShakeConfig {
            duration_ms: 200.0,
            ..Default::default()
        },
    );
    handle.update(tremor::ConfigPatch {
        duration_ms: Some(5000.0),
        ..Default::default()
    });

    // The in-flight end timer keeps the duration captured at fire time
    sleep(400).await;
    assert_eq!(ends.get(), 1);
    assert!((end_duration.get() - 200.0).abs() < f64::EPSILON);
}

#[wasm_bindgen_test]
fn stylesheet_registers_once_across_attachments() {
    let first = mounted_div();
    let second = mounted_div();
    let _a = trigger_shake(&first, ShakeConfig::default());
    let _b = trigger_shake(&second, ShakeConfig::default());

    let document = web_sys::window().unwrap().document().unwrap();
    let sheets = document
        .query_selector_all(&format!("style#{STYLE_ELEMENT_ID}"))
        .unwrap();
    assert_eq!(sheets.length(), 1);
}

#[wasm_bindgen_test]
fn hover_preset_toggles_class_only() {
    let el = mounted_div();
    let handle = hover_shake(&el);
    assert!(has_class(&el, "tremor-hover"));
    assert!(!has_class(&el, "tremor-active"));
    handle.destroy();
    assert!(!has_class(&el, "tremor-hover"));
}
