//! Slider widget state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use super::config::{ChangeHandler, SliderConfig};
use crate::layout::Rect;
use crate::listener::{ListenerGuard, ListenerRegistry};
use crate::mapper::TrackBounds;
use crate::range::{Range, RangeError};

/// Unique identifier for a Slider widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliderId(usize);

impl SliderId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__slider_{}", self.0)
    }
}

/// Who owns the slider's value. Chosen once, at construction.
pub(crate) enum ValueSource {
    /// Uncontrolled: the slider stores accepted values itself.
    Owned {
        value: f64,
        on_change: Option<ChangeHandler>,
    },
    /// Controlled: `value` mirrors the owner and changes only via `sync_value`.
    Delegated { value: f64, on_change: ChangeHandler },
}

impl ValueSource {
    fn value(&self) -> f64 {
        match self {
            ValueSource::Owned { value, .. } | ValueSource::Delegated { value, .. } => *value,
        }
    }
}

/// Drag lifecycle. The session owns the global listener subscription.
pub(crate) enum DragState {
    Idle,
    Dragging(DragSession),
}

pub(crate) struct DragSession {
    listeners: ListenerGuard,
}

impl DragSession {
    pub(crate) fn new(listeners: ListenerGuard) -> Self {
        Self { listeners }
    }

    /// Slider holding the listeners.
    pub(crate) fn owner(&self) -> SliderId {
        self.listeners.owner()
    }
}

/// A single-thumb range slider.
///
/// Pointer input arrives through [`on_pointer_down`](Slider::on_pointer_down)
/// and, while a drag is live, through the move/up handlers the host routes
/// via the shared [`ListenerRegistry`]. Keyboard input applies when focused.
/// Every accepted input is snapped by the slider's [`Range`] and reported
/// to the owner.
///
/// # Example
///
/// ```
/// use rangeslider::{ListenerRegistry, Slider, SliderConfig, TrackBounds};
///
/// let registry = ListenerRegistry::new();
/// let mut volume = Slider::new(SliderConfig::new().default_value(40.0), &registry).unwrap();
/// volume.set_track(TrackBounds::new(0.0, 200.0));
///
/// volume.on_pointer_down(150.0);
/// volume.on_pointer_up();
/// assert_eq!(volume.value(), 75.0);
/// assert!(registry.is_empty());
/// ```
pub struct Slider {
    id: SliderId,
    range: Range,
    source: ValueSource,
    pub(crate) drag: DragState,
    disabled: bool,
    focused: bool,
    /// Track extent from the last layout, used for pointer mapping.
    pub(crate) track: TrackBounds,
    /// Cells that accept pointer-down, from the last render.
    pub(crate) hit_area: Option<Rect>,
    pub(crate) registry: ListenerRegistry,
    dirty: bool,
}

impl Slider {
    /// Create a slider from its configuration.
    ///
    /// Out-of-range initial values are clamped and quantized rather than
    /// rejected; only a malformed range is an error.
    pub fn new(config: SliderConfig, registry: &ListenerRegistry) -> Result<Self, RangeError> {
        let range = Range::new(config.min, config.max, config.step)?;

        let source = match config.value {
            Some(value) => ValueSource::Delegated {
                value: range.snap(value),
                on_change: config.on_value_change.unwrap_or_else(|| Box::new(|_| {})),
            },
            None => ValueSource::Owned {
                value: range.snap(config.default_value.unwrap_or(range.min())),
                on_change: config.on_value_change,
            },
        };

        Ok(Self {
            id: SliderId::new(),
            range,
            source,
            drag: DragState::Idle,
            disabled: config.disabled,
            focused: false,
            track: TrackBounds::default(),
            hit_area: None,
            registry: registry.clone(),
            dirty: true,
        })
    }

    /// Get the unique ID for this slider
    pub fn id(&self) -> SliderId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current displayed value.
    pub fn value(&self) -> f64 {
        self.source.value()
    }

    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether the owner controls the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Delegated { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Disabled sliders drop out of the focus order.
    pub fn is_focusable(&self) -> bool {
        !self.disabled
    }

    pub fn track(&self) -> TrackBounds {
        self.track
    }

    pub fn hit_area(&self) -> Option<Rect> {
        self.hit_area
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Record the laid-out track used to map pointer positions.
    pub fn set_track(&mut self, track: TrackBounds) {
        self.track = track;
    }

    /// Push the owner's value into a controlled slider.
    ///
    /// Has no effect on uncontrolled sliders; use [`set_value`](Self::set_value).
    pub fn sync_value(&mut self, value: f64) {
        let snapped = self.range.snap(value);
        match &mut self.source {
            ValueSource::Delegated { value: current, .. } => {
                if *current != snapped {
                    *current = snapped;
                    self.dirty = true;
                }
            }
            ValueSource::Owned { .. } => {
                debug!("Ignoring sync_value on uncontrolled {}", self.id);
            }
        }
    }

    /// Programmatically set an uncontrolled slider's value without notifying.
    ///
    /// Has no effect on controlled sliders; their owner uses
    /// [`sync_value`](Self::sync_value).
    pub fn set_value(&mut self, value: f64) {
        let snapped = self.range.snap(value);
        match &mut self.source {
            ValueSource::Owned { value: current, .. } => {
                if *current != snapped {
                    *current = snapped;
                    self.dirty = true;
                }
            }
            ValueSource::Delegated { .. } => {
                debug!("Ignoring set_value on controlled {}", self.id);
            }
        }
    }

    /// Enable or disable input. Disabling mid-drag ends the drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.focused = false;
            if self.end_drag().is_some() {
                debug!("{} disabled mid-drag", self.id);
            }
        }
        self.dirty = true;
    }

    /// Give the slider keyboard focus. Returns false if it cannot take focus.
    pub fn focus(&mut self) -> bool {
        if !self.is_focusable() {
            return false;
        }
        if !self.focused {
            self.focused = true;
            self.dirty = true;
        }
        true
    }

    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.dirty = true;
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Drop the drag session, releasing its listeners.
    ///
    /// Returns the session owner, or `None` when no drag was live.
    pub(crate) fn end_drag(&mut self) -> Option<SliderId> {
        let DragState::Dragging(session) = std::mem::replace(&mut self.drag, DragState::Idle)
        else {
            return None;
        };
        let owner = session.owner();
        drop(session);
        trace!("Drag session of {} closed", owner);
        Some(owner)
    }

    /// Accept a snapped value: store it when owned, then notify the owner.
    pub(crate) fn report(&mut self, value: f64) {
        trace!("{} reporting {}", self.id, value);
        match &mut self.source {
            ValueSource::Owned {
                value: current,
                on_change,
            } => {
                if *current != value {
                    *current = value;
                    self.dirty = true;
                }
                if let Some(handler) = on_change {
                    handler(value);
                }
            }
            ValueSource::Delegated { on_change, .. } => on_change(value),
        }
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        if self.is_dragging() {
            debug!("{} dropped mid-drag, releasing listeners", self.id);
        }
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("id", &self.id)
            .field("range", &self.range)
            .field("value", &self.value())
            .field("controlled", &self.is_controlled())
            .field("dragging", &self.is_dragging())
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("track", &self.track)
            .finish()
    }
}
