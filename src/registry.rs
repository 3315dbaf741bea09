use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::styles::{strip_animation_classes, ANIMATION_CLASSES};

thread_local! {
    // Elements that have completed a "once" animation. JS reference identity,
    // set semantics. Pages hold tens of attached elements at most, so a Vec
    // scan beats hashing JS handles.
    static ANIMATED: RefCell<Vec<Element>> = const { RefCell::new(Vec::new()) };
}

/// Record that an element completed a "once" animation. Idempotent.
pub(crate) fn mark_animated(element: &Element) {
    ANIMATED.with(|set| {
        let mut set = set.borrow_mut();
        if !set.iter().any(|e| e == element) {
            set.push(element.clone());
        }
    });
}

/// Whether the element has already completed a "once" animation.
pub(crate) fn is_animated(element: &Element) -> bool {
    ANIMATED.with(|set| set.borrow().iter().any(|e| e == element))
}

/// Drop an element from the animated-set, so a later re-attach can animate
/// again even under the "once" policy. Idempotent.
pub(crate) fn forget(element: &Element) {
    ANIMATED.with(|set| set.borrow_mut().retain(|e| e != element));
}

#[cfg(test)]
pub(crate) fn animated_count() -> usize {
    ANIMATED.with(|set| set.borrow().len())
}

/// Clear all shake bookkeeping on the page: empties the animated-set and
/// strips the animation classes from every element currently carrying one.
///
/// Development and testing aid; nothing in the normal attach/destroy
/// lifecycle calls this.
pub fn reset_all() {
    ANIMATED.with(|set| set.borrow_mut().clear());

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    let selector = ANIMATION_CLASSES
        .iter()
        .map(|class| format!(".{class}"))
        .collect::<Vec<_>>()
        .join(", ");
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            strip_animation_classes(&element);
        }
    }
}
