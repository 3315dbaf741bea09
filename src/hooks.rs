//! Leptos bindings: attach on mount, tear down on cleanup.
//!
//! Each hook takes a `NodeRef`, waits for the node to mount, attaches the
//! effect, and destroys the attachment when the owning scope is disposed, so
//! components never leak timers or observers across navigations.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::AnyElement;
use leptos::{create_effect, on_cleanup, NodeRef};

use crate::config::ShakeConfig;
use crate::controller::{attach, ShakeHandle};
use crate::presets::{self, HoverHandle};

/// Attach a shake with an explicit config once `node_ref` mounts.
pub fn use_shake(node_ref: NodeRef<AnyElement>, config: ShakeConfig) {
    let handle: Rc<RefCell<Option<ShakeHandle>>> = Rc::new(RefCell::new(None));

    let attach_handle = Rc::clone(&handle);
    create_effect(move |_| {
        if attach_handle.borrow().is_some() {
            return;
        }
        if let Some(el) = node_ref.get() {
            *attach_handle.borrow_mut() = Some(attach(&el, config));
        }
    });

    on_cleanup(move || {
        handle.borrow_mut().take();
    });
}

/// Hero-title shake on mount.
pub fn use_hero_shake(node_ref: NodeRef<AnyElement>) {
    use_shake(node_ref, presets::hero_config());
}

/// Section-heading shake on scroll into view.
pub fn use_section_shake(node_ref: NodeRef<AnyElement>) {
    use_shake(node_ref, presets::section_config());
}

/// Card-title shake on scroll into view.
pub fn use_card_shake(node_ref: NodeRef<AnyElement>) {
    use_shake(node_ref, presets::card_config());
}

/// Credits-line shake on scroll into view.
pub fn use_credits_shake(node_ref: NodeRef<AnyElement>) {
    use_shake(node_ref, presets::credits_config());
}

/// Hover shake, armed while the component is alive.
pub fn use_hover_shake(node_ref: NodeRef<AnyElement>) {
    let handle: Rc<RefCell<Option<HoverHandle>>> = Rc::new(RefCell::new(None));

    let attach_handle = Rc::clone(&handle);
    create_effect(move |_| {
        if attach_handle.borrow().is_some() {
            return;
        }
        if let Some(el) = node_ref.get() {
            *attach_handle.borrow_mut() = Some(presets::hover_shake(&el));
        }
    });

    on_cleanup(move || {
        handle.borrow_mut().take();
    });
}
