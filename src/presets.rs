//! Canned configurations for the usual page roles.

use web_sys::HtmlElement;

use crate::config::{Intensity, ShakeConfig, Trigger};
use crate::controller::{attach, ShakeHandle};
use crate::styles::CLASS_HOVER;

/// Strong shake on page load, for hero titles.
pub fn hero(element: &HtmlElement) -> ShakeHandle {
    attach(element, hero_config())
}

/// Medium shake when a section heading scrolls into view.
pub fn section(element: &HtmlElement) -> ShakeHandle {
    attach(element, section_config())
}

/// Subtle shake when a card title scrolls into view.
pub fn card(element: &HtmlElement) -> ShakeHandle {
    attach(element, card_config())
}

/// Very subtle shake for credits lines.
pub fn credits(element: &HtmlElement) -> ShakeHandle {
    attach(element, credits_config())
}

pub fn hero_config() -> ShakeConfig {
    ShakeConfig {
        trigger: Trigger::Immediate,
        duration_ms: 2000.0,
        delay_ms: 500.0,
        intensity: Intensity::High,
        once: true,
    }
}

pub fn section_config() -> ShakeConfig {
    ShakeConfig {
        trigger: Trigger::Scroll,
        duration_ms: 1500.0,
        delay_ms: 0.0,
        intensity: Intensity::Medium,
        once: true,
    }
}

pub fn card_config() -> ShakeConfig {
    ShakeConfig {
        trigger: Trigger::Scroll,
        duration_ms: 1200.0,
        delay_ms: 0.0,
        intensity: Intensity::Low,
        once: true,
    }
}

pub fn credits_config() -> ShakeConfig {
    ShakeConfig {
        trigger: Trigger::Scroll,
        duration_ms: 1000.0,
        delay_ms: 0.0,
        intensity: Intensity::Low,
        once: true,
    }
}

/// Quick shake on hover. No timed lifecycle: the attachment only toggles the
/// `tremor-hover` class and CSS `:hover` does the rest.
pub struct HoverHandle {
    element: HtmlElement,
}

impl HoverHandle {
    /// Equivalent to dropping the handle.
    pub fn destroy(self) {}
}

impl Drop for HoverHandle {
    fn drop(&mut self) {
        let _ = self.element.class_list().remove_1(CLASS_HOVER);
    }
}

/// Arm the hover-shake effect on an element.
pub fn hover_shake(element: &HtmlElement) -> HoverHandle {
    crate::styles::register_styles();
    let _ = element.class_list().add_1(CLASS_HOVER);
    HoverHandle {
        element: element.clone(),
    }
}
