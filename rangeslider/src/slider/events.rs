//! Event handling for the Slider widget.

use log::debug;

use super::keyboard::KeyAction;
use super::state::{DragSession, DragState, Slider};
use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::listener::ListenerKind;
use crate::mapper;

impl Slider {
    /// Start a drag at `pointer_x` and report the value under the pointer.
    ///
    /// Ignored while disabled or already dragging.
    pub fn on_pointer_down(&mut self, pointer_x: f64) -> EventResult {
        if self.is_disabled() || self.is_dragging() {
            return EventResult::Ignored;
        }

        let listeners = self.registry.acquire(self.id());
        self.drag = DragState::Dragging(DragSession::new(listeners));
        self.mark_dirty();
        debug!("Drag started on {} at x={}", self.id(), pointer_x);

        let value = mapper::value_at(pointer_x, self.track, &self.range());
        self.report(value);
        EventResult::StartDrag
    }

    /// Follow the pointer during a drag.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> EventResult {
        if !self.is_dragging() {
            return EventResult::Ignored;
        }
        let value = mapper::value_at(pointer_x, self.track, &self.range());
        self.report(value);
        EventResult::Consumed
    }

    /// End the drag. Releases the global listeners.
    pub fn on_pointer_up(&mut self) -> EventResult {
        let Some(owner) = self.end_drag() else {
            return EventResult::Ignored;
        };
        self.mark_dirty();
        debug!("Drag ended on {} at {}", owner, self.value());
        EventResult::Consumed
    }

    /// Handle a key while focused.
    ///
    /// Bound keys are consumed so the host skips its default handling;
    /// everything else is ignored without side effects.
    pub fn on_key(&mut self, key: Key, _modifiers: Modifiers) -> EventResult {
        if self.is_disabled() || !self.is_focused() {
            return EventResult::Ignored;
        }
        let Some(action) = KeyAction::from_key(key) else {
            return EventResult::Ignored;
        };

        let value = action.apply(self.value(), &self.range());
        self.report(value);
        EventResult::Consumed
    }

    /// Route a host event to the matching handler.
    ///
    /// Pointer-down must land on the last rendered track. Move and up are
    /// delivered while this slider holds the global listeners, wherever the
    /// pointer is.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::PointerDown { x, y, button } => {
                if button != MouseButton::Left {
                    return EventResult::Ignored;
                }
                match self.hit_area {
                    Some(area) if area.contains(x, y) => self.on_pointer_down(f64::from(x)),
                    _ => EventResult::Ignored,
                }
            }
            Event::PointerMove { x, .. } => {
                if self.registry.is_subscribed(self.id(), ListenerKind::PointerMove) {
                    self.on_pointer_move(f64::from(x))
                } else {
                    EventResult::Ignored
                }
            }
            Event::PointerUp { .. } => {
                if self.registry.is_subscribed(self.id(), ListenerKind::PointerUp) {
                    self.on_pointer_up()
                } else {
                    EventResult::Ignored
                }
            }
            Event::Key { key, modifiers } => self.on_key(key, modifiers),
        }
    }
}
