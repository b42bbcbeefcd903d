//! Slider widget - a draggable, keyboard-operable range control.
//!
//! - `state.rs` - the widget state and value ownership
//! - `events.rs` - pointer drag lifecycle and key handling
//! - `keyboard.rs` - key bindings
//! - `render.rs` - view model and terminal rendering

mod config;
mod events;
pub mod keyboard;
pub mod render;
mod state;

pub use config::{ChangeHandler, SliderConfig};
pub use keyboard::KeyAction;
pub use render::{Accessibility, SliderView, format_value, render_slider};
pub use state::{Slider, SliderId};
