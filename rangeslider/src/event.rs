//! Input events delivered to sliders.

/// Input event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer button pressed.
    PointerDown { x: u16, y: u16, button: MouseButton },
    /// Pointer moved, with or without a button held.
    PointerMove { x: u16, y: u16 },
    /// Pointer button released.
    PointerUp { x: u16, y: u16, button: MouseButton },
    /// Key press, targeted at the focused widget.
    Key { key: Key, modifiers: Modifiers },
}

impl Event {
    /// Translate a crossterm event. Events sliders never react to map to `None`.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: Key::from(key.code),
                modifiers: Modifiers::from(key.modifiers),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::PointerDown {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::PointerUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Event::PointerMove { x, y })
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Result of offering an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers. Host defaults still apply.
    Ignored,
    /// Event was consumed, suppress host default handling.
    Consumed,
    /// Event started a drag session on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Any key without a dedicated variant.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
