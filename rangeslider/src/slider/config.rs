//! Slider configuration.

use std::fmt;

/// Callback invoked with every accepted value.
pub type ChangeHandler = Box<dyn FnMut(f64) + Send>;

/// Construction options for a [`Slider`](super::Slider).
///
/// Setting [`value`](Self::value) makes the slider controlled: it displays
/// what the owner last pushed and only reports candidate values through
/// `on_value_change`. Otherwise the slider owns its value, starting from
/// [`default_value`](Self::default_value).
pub struct SliderConfig {
    /// Controlled value.
    pub value: Option<f64>,
    /// Initial value when uncontrolled. Defaults to `min`.
    pub default_value: Option<f64>,
    /// Called after every accepted pointer or keyboard input.
    pub on_value_change: Option<ChangeHandler>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Ignore all input when true.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            on_value_change: None,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the slider controlled by its owner.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn on_value_change(mut self, handler: impl FnMut(f64) + Send + 'static) -> Self {
        self.on_value_change = Some(Box::new(handler));
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set `min`, `max` and `step` at once.
    pub fn range(self, min: f64, max: f64, step: f64) -> Self {
        self.min(min).max(max).step(step)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("on_value_change", &self.on_value_change.is_some())
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("disabled", &self.disabled)
            .finish()
    }
}
