use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{ConfigPatch, ShakeConfig, Trigger};
use crate::events;
use crate::registry;
use crate::styles::{self, CLASS_ACTIVE, CLASS_HERO, DURATION_VAR};

/// A scheduled `setTimeout`, owned by the session that created it.
///
/// Dropping the handle cancels the timer and releases the callback, so a
/// session that goes away mid-countdown leaves nothing behind. Cancelling an
/// already-fired timer is harmless.
struct TimerHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl TimerHandle {
    fn schedule(delay_ms: f64, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        ) {
            Ok(id) => Some(Self {
                id,
                _callback: callback,
            }),
            Err(_) => {
                styles::log_warning("tremor: could not schedule animation timer");
                None
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// An `IntersectionObserver` subscription on a single element.
///
/// Observes with a 10% visibility threshold and the viewport bottom pulled up
/// by 20%, so the shake starts slightly before the element would be fully
/// flush with the fold. Dropping the watcher disconnects the observer.
struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatcher {
    const THRESHOLD: f64 = 0.1;
    const ROOT_MARGIN: &'static str = "0px 0px -20% 0px";

    fn watch(element: &HtmlElement, mut on_enter: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        on_enter();
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(Self::THRESHOLD));
        options.set_root_margin(Self::ROOT_MARGIN);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(_) => {
                    styles::log_warning("tremor: IntersectionObserver unavailable");
                    return None;
                }
            };
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Per-element animation state. Timers and the watcher live here so that a
/// single drop cancels everything the attachment scheduled.
struct Session {
    element: HtmlElement,
    config: ShakeConfig,
    has_animated: bool,
    delay_timer: Option<TimerHandle>,
    end_timer: Option<TimerHandle>,
    watcher: Option<VisibilityWatcher>,
    detached: bool,
}

/// Live attachment returned by [`attach`].
///
/// Dropping the handle (or calling [`destroy`](Self::destroy)) cancels any
/// pending timers, disconnects the visibility watcher, strips the animation
/// classes and removes the element from the animated-set, so a later
/// re-attach can animate again even under the "once" policy.
pub struct ShakeHandle {
    session: Rc<RefCell<Session>>,
}

impl ShakeHandle {
    /// Merge the `Some` fields of the patch into the live configuration.
    ///
    /// Nothing in flight is cancelled or restarted, and a trigger that was
    /// already set up keeps its mode; only configuration read by later
    /// triggers observes the change.
    pub fn update(&self, patch: ConfigPatch) {
        self.session.borrow_mut().config.apply(patch);
    }

    /// The element this attachment animates.
    pub fn element(&self) -> HtmlElement {
        self.session.borrow().element.clone()
    }

    /// Tear the attachment down. Equivalent to dropping the handle.
    pub fn destroy(self) {}
}

impl Drop for ShakeHandle {
    fn drop(&mut self) {
        detach(&self.session);
    }
}

/// Attach a shake animation to an element.
///
/// Registers the shared stylesheet (once per page), then arms the configured
/// trigger: `Immediate` fires after `delay_ms` (synchronously for a zero
/// delay), `Scroll` fires when the element becomes sufficiently visible.
///
/// The returned handle owns the attachment; keep it alive for as long as the
/// element should stay armed.
pub fn attach(element: &HtmlElement, config: ShakeConfig) -> ShakeHandle {
    styles::register_styles();

    let session = Rc::new(RefCell::new(Session {
        element: element.clone(),
        config,
        has_animated: false,
        delay_timer: None,
        end_timer: None,
        watcher: None,
        detached: false,
    }));

    match config.trigger {
        Trigger::Immediate => trigger_after_delay(&session),
        Trigger::Scroll => {
            let weak = Rc::downgrade(&session);
            let watcher = VisibilityWatcher::watch(element, move || {
                if let Some(session) = weak.upgrade() {
                    trigger_after_delay(&session);
                    let once = session.borrow().config.once;
                    if once {
                        // Served its one trigger; no need to keep observing
                        session.borrow_mut().watcher = None;
                    }
                }
            });
            session.borrow_mut().watcher = watcher;
        }
    }

    ShakeHandle { session }
}

/// Start a shake right away, regardless of the configured trigger.
pub fn trigger_shake(element: &HtmlElement, config: ShakeConfig) -> ShakeHandle {
    attach(
        element,
        ShakeConfig {
            trigger: Trigger::Immediate,
            ..config
        },
    )
}

fn trigger_after_delay(session: &Rc<RefCell<Session>>) {
    let delay_ms = session.borrow().config.delay_ms;
    if delay_ms > 0.0 {
        let weak = Rc::downgrade(session);
        let timer = TimerHandle::schedule(delay_ms, move || {
            if let Some(session) = weak.upgrade() {
                session.borrow_mut().delay_timer = None;
                fire(&session);
            }
        });
        session.borrow_mut().delay_timer = timer;
    } else {
        fire(session);
    }
}

/// Run one shake on the session's element: set the duration variable, emit
/// `tremorStart`, apply the classes, and schedule removal plus `tremorEnd`
/// after the effective duration.
fn fire(session: &Rc<RefCell<Session>>) {
    let (element, intensity, duration_ms, hero, once) = {
        let s = session.borrow();
        if s.detached {
            return;
        }
        // "once" suppression: session-local flag or the page-wide set
        if s.config.once && (s.has_animated || registry::is_animated(&s.element)) {
            return;
        }
        (
            s.element.clone(),
            s.config.intensity,
            s.config.effective_duration_ms(),
            s.config.trigger == Trigger::Immediate,
            s.config.once,
        )
    };

    let _ = element
        .style()
        .set_property(DURATION_VAR, &format!("{duration_ms}ms"));

    // Start is observable before any class lands
    events::dispatch_start(&element, intensity, duration_ms);

    let class_list = element.class_list();
    let _ = class_list.add_2(CLASS_ACTIVE, intensity.class_name());
    if hero {
        // Immediate attachments get the stronger keyframe variant
        let _ = class_list.add_1(CLASS_HERO);
    }

    session.borrow_mut().has_animated = true;
    if once {
        registry::mark_animated(&element);
    }

    let end_element = element.clone();
    let weak = Rc::downgrade(session);
    let end_timer = TimerHandle::schedule(duration_ms, move || {
        let class_list = end_element.class_list();
        let _ = class_list.remove_2(CLASS_ACTIVE, CLASS_HERO);
        let _ = class_list.remove_1(intensity.class_name());
        // End follows class removal, with the payload captured at fire time
        events::dispatch_end(&end_element, intensity, duration_ms);
        if let Some(session) = weak.upgrade() {
            session.borrow_mut().end_timer = None;
        }
    });
    session.borrow_mut().end_timer = end_timer;
}

/// Idempotent teardown shared by `destroy` and the handle's `Drop`.
fn detach(session: &Rc<RefCell<Session>>) {
    let element = {
        let mut s = session.borrow_mut();
        if s.detached {
            return;
        }
        s.detached = true;
        s.delay_timer = None;
        s.end_timer = None;
        s.watcher = None;
        s.element.clone()
    };
    styles::strip_animation_classes(&element);
    registry::forget(&element);
}
