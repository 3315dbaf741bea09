use serde::{Deserialize, Serialize};

/// What starts the shake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Start as soon as the element is attached (after any configured delay).
    Immediate,
    /// Start when the element scrolls into view.
    Scroll,
}

/// Named strength of the effect.
///
/// Intensity scales the effective duration and selects which keyframe curve
/// the stylesheet applies (high rides the `tremor-intense` curve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Multiplier applied to the base duration.
    pub fn duration_factor(self) -> f64 {
        match self {
            Intensity::Low => 0.8,
            Intensity::Medium => 1.0,
            Intensity::High => 1.2,
        }
    }

    /// Lowercase label used in event payloads.
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    /// CSS class applied to the element while shaking.
    pub fn class_name(self) -> &'static str {
        match self {
            Intensity::Low => "tremor-low",
            Intensity::Medium => "tremor-medium",
            Intensity::High => "tremor-high",
        }
    }
}

/// Per-attachment configuration.
///
/// Deserializes from partial JSON: any omitted field falls back to its
/// default, so hosts can keep short config fragments in markup or storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    #[serde(default = "default_trigger")]
    pub trigger: Trigger,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default = "default_intensity")]
    pub intensity: Intensity,
    #[serde(default = "default_once")]
    pub once: bool,
}

fn default_trigger() -> Trigger {
    Trigger::Scroll
}

fn default_duration_ms() -> f64 {
    1500.0
}

fn default_intensity() -> Intensity {
    Intensity::Medium
}

fn default_once() -> bool {
    true
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            duration_ms: default_duration_ms(),
            delay_ms: 0.0,
            intensity: default_intensity(),
            once: default_once(),
        }
    }
}

impl ShakeConfig {
    /// Base duration scaled by the intensity factor. This is the value written
    /// to `--tremor-duration` and carried in event payloads.
    pub fn effective_duration_ms(&self) -> f64 {
        self.duration_ms * self.intensity.duration_factor()
    }

    /// Parse a config from a JSON fragment, e.g. a `data-` attribute value.
    ///
    /// Returns `None` (rather than an error) on malformed input; missing
    /// fields take their defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Merge the `Some` fields of a patch into this config.
    ///
    /// Merging never touches an in-flight animation; only triggers evaluated
    /// after the merge observe the new values.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(trigger) = patch.trigger {
            self.trigger = trigger;
        }
        if let Some(duration_ms) = patch.duration_ms {
            self.duration_ms = duration_ms;
        }
        if let Some(delay_ms) = patch.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        if let Some(once) = patch.once {
            self.once = once;
        }
    }
}

/// Partial config used by [`ShakeHandle::update`](crate::ShakeHandle::update).
/// `None` fields leave the live value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ConfigPatch {
    pub trigger: Option<Trigger>,
    pub duration_ms: Option<f64>,
    pub delay_ms: Option<f64>,
    pub intensity: Option<Intensity>,
    pub once: Option<bool>,
}
