//! Draggable range slider widget for terminal interfaces.
//!
//! The crate is split the way the slider's data flows: input arrives as
//! [`Event`]s, the [`Slider`] turns pointer positions and keys into
//! candidate values, [`Range::snap`] clamps and quantizes them, and the
//! render module draws the result into a [`Buffer`].

pub mod buffer;
pub mod event;
pub mod layout;
pub mod listener;
pub mod mapper;
pub mod range;
pub mod slider;
pub mod theme;

pub use buffer::{Buffer, Cell};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use listener::{ListenerGuard, ListenerKind, ListenerRegistry};
pub use mapper::{TrackBounds, value_at};
pub use range::{Range, RangeError};
pub use slider::{Accessibility, KeyAction, Slider, SliderConfig, SliderId, SliderView};
pub use theme::{Rgb, SliderTheme};
