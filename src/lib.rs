//! Transient shake effects for DOM elements.
//!
//! An attachment binds one element to one shake lifecycle: the effect starts
//! either immediately or when the element scrolls into view, applies the
//! `tremor-*` classes and a per-element duration variable for the configured
//! duration, and dispatches `tremorStart` / `tremorEnd` CustomEvents on the
//! element. A "once" policy (per element, page-wide) keeps a shake from
//! re-firing until [`reset_all`] or a re-attach.
//!
//! ```ignore
//! use tremor::{attach, ShakeConfig};
//!
//! let handle = attach(&heading, ShakeConfig::default());
//! // ... later, on unmount:
//! handle.destroy();
//! ```
//!
//! [`presets`] covers the common page roles (hero, section, card, credits,
//! hover), and the `leptos` feature adds `NodeRef`-based hooks in `hooks`.

pub mod config;
pub mod controller;
pub mod events;
#[cfg(feature = "leptos")]
pub mod hooks;
pub mod presets;
pub mod registry;
pub mod styles;

pub use config::{ConfigPatch, Intensity, ShakeConfig, Trigger};
pub use controller::{attach, trigger_shake, ShakeHandle};
pub use events::{EVENT_END, EVENT_START};
pub use presets::{card, credits, hero, hover_shake, section, HoverHandle};
pub use registry::reset_all;
pub use styles::{register_styles, unregister_styles, DURATION_VAR, STYLE_ELEMENT_ID};
