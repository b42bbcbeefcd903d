//! Value range and quantization.
//!
//! A [`Range`] owns the bounds and step of a slider. Every value a slider
//! reports goes through [`Range::snap`], regardless of input source.

use thiserror::Error;

/// Tolerance used when locating a value on the step grid.
///
/// Keeps `0.3 / 0.1` from landing just below grid index 3.
const GRID_EPSILON: f64 = 1e-9;

/// Errors produced when a range is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// One of the bounds or the step is NaN or infinite.
    #[error("range bounds and step must be finite")]
    NonFinite,

    /// `min` is not strictly below `max`.
    #[error("range minimum ({min}) must be below maximum ({max})")]
    EmptyRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The step is zero or negative.
    #[error("range step must be positive, got {0}")]
    InvalidStep(f64),

    /// `max - min` is not representable as a finite `f64`.
    #[error("range from {min} to {max} is too wide to map")]
    SpanOverflow {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Bounds and quantization step of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Range {
    /// Create a validated range.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(RangeError::NonFinite);
        }
        if min >= max {
            return Err(RangeError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(RangeError::InvalidStep(step));
        }
        if !(max - min).is_finite() {
            return Err(RangeError::SpanOverflow { min, max });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Distance between the bounds. Always finite.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into `[min, max]`. NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp and quantize a raw value.
    ///
    /// The allowed values are `min + k * step` that do not exceed `max`,
    /// plus `max` itself. The nearest one wins; ties go to the upper
    /// neighbour.
    pub fn snap(&self, raw: f64) -> f64 {
        let clamped = self.clamp(raw);
        let index = ((clamped - self.min) / self.step + GRID_EPSILON).floor();
        let lower = self.min + index * self.step;
        let upper = (self.min + (index + 1.0) * self.step).min(self.max);

        let snapped = if clamped - lower >= upper - clamped {
            upper
        } else {
            lower
        };
        self.clamp(snapped)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    pub fn fraction_of(&self, value: f64) -> f64 {
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }

    /// Value at `fraction` of the range, before quantization.
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        if fraction >= 1.0 {
            return self.max;
        }
        self.min + fraction.max(0.0) * self.span()
    }

    /// Whether `value` is one of the values [`Range::snap`] can produce.
    pub fn is_allowed(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if (value - self.max).abs() <= GRID_EPSILON * self.span().max(1.0) {
            return true;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() <= 1e-6
    }
}
