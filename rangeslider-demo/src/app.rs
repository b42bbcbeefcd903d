//! Alert review control panel hosting several sliders.

use std::sync::mpsc::{self, Receiver, Sender};

use log::{debug, info};
use rangeslider::slider::format_value;
use rangeslider::{
    Buffer, Cell, Event, EventResult, Key, ListenerRegistry, RangeError, Rect, Slider,
    SliderConfig, SliderTheme,
};

const LABEL_WIDTH: u16 = 24;
const VALUE_WIDTH: u16 = 10;
const FIRST_ROW: u16 = 3;

/// Index of the controlled volume slider.
pub const VOLUME: usize = 0;

/// A value reported by one of the sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub index: usize,
    pub value: f64,
}

struct Row {
    label: &'static str,
    unit: &'static str,
    slider: Slider,
}

pub struct DemoApp {
    registry: ListenerRegistry,
    rows: Vec<Row>,
    focus: Option<usize>,
    /// Owner-side state of the controlled volume slider.
    volume: f64,
    status: String,
    changes: Receiver<Change>,
    theme: SliderTheme,
    running: bool,
}

impl DemoApp {
    pub fn new() -> Result<Self, RangeError> {
        let registry = ListenerRegistry::new();
        let (tx, changes) = mpsc::channel();
        let volume = 40.0;

        let controls = [
            (
                "Alert video volume",
                "%",
                SliderConfig::new().range(0.0, 100.0, 1.0).value(volume),
            ),
            (
                "Fall-risk threshold",
                "",
                SliderConfig::new().range(0.0, 10.0, 0.5).default_value(3.0),
            ),
            (
                "Vitals refresh",
                "s",
                SliderConfig::new().range(5.0, 60.0, 7.0).default_value(12.0),
            ),
            (
                "Night mode dimming",
                "%",
                SliderConfig::new().default_value(30.0).disabled(true),
            ),
        ];

        let mut rows = Vec::with_capacity(controls.len());
        for (index, (label, unit, config)) in controls.into_iter().enumerate() {
            let config = config.on_value_change(notify(tx.clone(), index));
            rows.push(Row {
                label,
                unit,
                slider: Slider::new(config, &registry)?,
            });
        }

        Ok(Self {
            registry,
            rows,
            focus: None,
            volume,
            status: "Click or drag a slider, Tab to focus one".to_string(),
            changes,
            theme: SliderTheme::default(),
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Dispatch one input event, then apply whatever the sliders reported.
    pub fn handle(&mut self, event: &Event) {
        match *event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => {
                info!("Quit requested");
                self.running = false;
            }
            Event::Key { key: Key::Tab, .. } => self.cycle_focus(true),
            Event::Key {
                key: Key::BackTab, ..
            } => self.cycle_focus(false),
            Event::Key { key, .. } => {
                if let Some(index) = self.focus {
                    let result = self.rows[index].slider.handle_event(event);
                    if !result.is_handled() {
                        debug!("Unhandled key {:?}", key);
                    }
                }
            }
            _ => {
                let mut started = None;
                for (index, row) in self.rows.iter_mut().enumerate() {
                    if row.slider.handle_event(event) == EventResult::StartDrag {
                        started = Some(index);
                    }
                }
                if let Some(index) = started {
                    self.set_focus(Some(index));
                }
            }
        }
        self.apply_changes();
    }

    fn apply_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            let Some(row) = self.rows.get_mut(change.index) else {
                continue;
            };
            if change.index == VOLUME {
                self.volume = change.value;
                row.slider.sync_value(change.value);
            }
            let step = row.slider.range().step();
            self.status = format!(
                "{} set to {}{}",
                row.label,
                format_value(change.value, step),
                row.unit
            );
        }
    }

    fn set_focus(&mut self, index: Option<usize>) {
        if self.focus == index {
            return;
        }
        if let Some(old) = self.focus.take() {
            self.rows[old].slider.blur();
        }
        if let Some(new) = index
            && self.rows[new].slider.focus()
        {
            self.focus = Some(new);
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let focusable: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.slider.is_focusable())
            .map(|(index, _)| index)
            .collect();
        if focusable.is_empty() {
            return;
        }

        let position = self
            .focus
            .and_then(|current| focusable.iter().position(|&i| i == current));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => focusable.len() - 1,
            (Some(p), true) => (p + 1) % focusable.len(),
            (Some(p), false) => (p + focusable.len() - 1) % focusable.len(),
        };
        self.set_focus(Some(focusable[next]));
    }

    pub fn draw(&mut self, buf: &mut Buffer) {
        let area = buf.area();
        let background = Cell::default().with_bg(self.theme.background);
        let text = background.with_fg(self.theme.label);
        buf.fill(area, background);

        let inner_width = area.width.saturating_sub(4);
        buf.put_str(2, 1, "Alert review controls", inner_width, text.bold());

        for (index, row) in self.rows.iter_mut().enumerate() {
            let y = FIRST_ROW + index as u16 * 2;
            if y + 2 >= area.height {
                break;
            }
            let line = Rect::new(2, y, inner_width, 1);
            let (label_area, rest) = line.split_left(LABEL_WIDTH);
            let (track, value_area) = rest.split_right(VALUE_WIDTH);

            let marker = if row.slider.is_focused() { "> " } else { "  " };
            let label = format!("{marker}{}", row.label);
            let label_cell = text.dim(row.slider.is_disabled());
            buf.put_str(label_area.x, y, &label, label_area.width, label_cell);

            row.slider.render(buf, track, &self.theme);

            let value = format!(
                " {}{}",
                format_value(row.slider.value(), row.slider.range().step()),
                row.unit
            );
            buf.put_str(value_area.x, y, &value, value_area.width, text);
            row.slider.clear_dirty();
        }

        if area.height >= 2 {
            buf.put_str(2, area.height - 2, &self.status, inner_width, text);
            let help = "Tab/Shift-Tab focus  Arrows step  Home/End bounds  q quit";
            buf.put_str(2, area.height - 1, help, inner_width, text.dim(true));
        }
    }
}

fn notify(tx: Sender<Change>, index: usize) -> impl FnMut(f64) + Send + 'static {
    move |value| {
        // The receiver lives as long as the app; a send error means shutdown.
        let _ = tx.send(Change { index, value });
    }
}
