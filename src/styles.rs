/// Id of the registered `<style>` element. The version suffix changes whenever
/// the sheet's contents change, so a stale sheet from a previous bundle never
/// masks an updated one.
pub const STYLE_ELEMENT_ID: &str = "tremor-styles-v1";

/// Custom property carrying the per-element effective duration.
pub const DURATION_VAR: &str = "--tremor-duration";

/// Classes the controller may place on an element. `reset_all` and `destroy`
/// strip exactly this set.
pub const ANIMATION_CLASSES: [&str; 5] = [
    "tremor-active",
    "tremor-hero",
    "tremor-low",
    "tremor-medium",
    "tremor-high",
];

pub const CLASS_ACTIVE: &str = "tremor-active";
pub const CLASS_HERO: &str = "tremor-hero";
pub const CLASS_HOVER: &str = "tremor-hover";

/// The full stylesheet, registered once per page.
///
/// The two keyframe curves are a visual-fidelity contract: the percentage
/// keys and transform/blur steps must not drift between versions without
/// bumping `STYLE_ELEMENT_ID`.
pub const STYLE_SHEET: &str = r#"
@keyframes tremor-shake {
    0% {
        filter: blur(0);
        transform: translate(0) rotate(0deg);
    }
    5%, 15%, 25%, 35%, 55%, 65%, 75%, 95% {
        filter: blur(0.015em);
        transform: translateY(0.015em) rotate(0.1deg);
    }
    10%, 30%, 40%, 50%, 70%, 80%, 90% {
        filter: blur(0.008em);
        transform: translateY(-0.015em) rotate(-0.1deg);
    }
    20%, 60% {
        filter: blur(0.025em);
        transform: translate(-0.015em, 0.015em) rotate(0.2deg);
    }
    45%, 85% {
        filter: blur(0.025em);
        transform: translate(0.015em, -0.015em) rotate(-0.2deg);
    }
    100% {
        filter: blur(0);
        transform: translate(0) rotate(0deg);
    }
}

@keyframes tremor-intense {
    0%, 100% {
        transform: translate(0) rotate(0deg);
        filter: blur(0);
    }
    2% {
        transform: translate(0.5px, -1px) rotate(-0.5deg);
        filter: blur(0.01em);
    }
    4% {
        transform: translate(-1px, 0.5px) rotate(0.3deg);
        filter: blur(0.015em);
    }
    6% {
        transform: translate(-1.5px, -0.5px) rotate(-0.2deg);
        filter: blur(0.008em);
    }
    8% {
        transform: translate(1px, 1px) rotate(0.4deg);
        filter: blur(0.02em);
    }
    10% {
        transform: translate(-0.5px, -1.5px) rotate(-0.3deg);
        filter: blur(0.012em);
    }
    12% {
        transform: translate(1.5px, 0.5px) rotate(0.2deg);
        filter: blur(0.018em);
    }
    14% {
        transform: translate(-1px, -1px) rotate(-0.4deg);
        filter: blur(0.009em);
    }
    16% {
        transform: translate(0.5px, 1.5px) rotate(0.1deg);
        filter: blur(0.022em);
    }
    18% {
        transform: translate(-1.5px, 0px) rotate(-0.2deg);
        filter: blur(0.013em);
    }
    20% {
        transform: translate(1px, -0.5px) rotate(0.3deg);
        filter: blur(0.016em);
    }
    25% {
        transform: translate(-0.5px, 1px) rotate(-0.1deg);
        filter: blur(0.01em);
    }
    30% {
        transform: translate(0.5px, -0.5px) rotate(0.2deg);
        filter: blur(0.008em);
    }
    35% {
        transform: translate(-1px, 0.5px) rotate(-0.15deg);
        filter: blur(0.006em);
    }
    40% {
        transform: translate(0.5px, 0.5px) rotate(0.1deg);
        filter: blur(0.004em);
    }
    45% {
        transform: translate(-0.5px, -0.5px) rotate(-0.1deg);
        filter: blur(0.003em);
    }
    50% {
        transform: translate(0.3px, 0.3px) rotate(0.05deg);
        filter: blur(0.002em);
    }
    60% {
        transform: translate(-0.2px, 0.2px) rotate(-0.03deg);
        filter: blur(0.001em);
    }
    70% {
        transform: translate(0.1px, -0.1px) rotate(0.02deg);
        filter: blur(0.0005em);
    }
    80% {
        transform: translate(-0.1px, 0.1px) rotate(-0.01deg);
        filter: blur(0.0003em);
    }
    90% {
        transform: translate(0.05px, -0.05px) rotate(0.005deg);
        filter: blur(0.0001em);
    }
}

.tremor-active {
    position: relative;
    animation: tremor-shake var(--tremor-duration, 1.5s) ease-out;
}

.tremor-hero {
    animation: tremor-intense var(--tremor-duration, 2s) ease-out;
}

/* Intensity variations */
.tremor-low {
    --tremor-intensity: 0.5;
}

.tremor-medium {
    --tremor-intensity: 1;
}

.tremor-high {
    --tremor-intensity: 1.5;
}

/* Apply intensity scaling to shake effects */
.tremor-low.tremor-active {
    animation: tremor-shake var(--tremor-duration, 1.5s) ease-out;
    transform-origin: center;
}

.tremor-high.tremor-active {
    animation: tremor-intense var(--tremor-duration, 1.5s) ease-out;
    transform-origin: center;
}

.tremor-hover:hover {
    animation: tremor-shake 0.5s ease-out;
}
"#;

/// Log a warning message to the browser console.
pub(crate) fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Register the stylesheet in `<head>`, once per page.
///
/// Idempotent: keyed by `STYLE_ELEMENT_ID`, so any number of attachments share
/// the single sheet. Outside a browser (or with no `<head>`) this is a silent
/// no-op apart from a console warning.
pub fn register_styles() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let head = match document.head() {
        Some(h) => h,
        None => {
            log_warning("tremor: document has no <head>, styles not registered");
            return;
        }
    };
    let style = match document.create_element("style") {
        Ok(el) => el,
        Err(_) => {
            log_warning("tremor: could not create <style> element");
            return;
        }
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLE_SHEET));
    if head.append_child(&style).is_err() {
        log_warning("tremor: could not append tremor stylesheet to <head>");
    }
}

/// Remove the registered stylesheet, if present. Teardown counterpart of
/// [`register_styles`]; mainly useful in tests and hot-reload setups.
pub fn unregister_styles() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(style) = document.get_element_by_id(STYLE_ELEMENT_ID) {
            style.remove();
        }
    }
}

/// Remove every animation class the controller may have placed on an element.
/// The hover class is left alone; it belongs to the hover preset's lifecycle.
pub(crate) fn strip_animation_classes(element: &web_sys::Element) {
    let class_list = element.class_list();
    for class in ANIMATION_CLASSES {
        let _ = class_list.remove_1(class);
    }
}
