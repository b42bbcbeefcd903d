//! Rendering for the Slider widget.

use super::state::Slider;
use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::mapper::TrackBounds;
use crate::range::Range;
use crate::theme::SliderTheme;

const FILL_CHAR: char = '━';
const TRACK_CHAR: char = '─';
const THUMB_CHAR: char = '●';
const THUMB_DRAGGING_CHAR: char = '◉';

/// Assistive-technology description of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accessibility {
    pub role: &'static str,
    pub value_min: f64,
    pub value_max: f64,
    pub value_now: f64,
    pub disabled: bool,
    /// False when the slider is skipped by focus traversal.
    pub focusable: bool,
}

/// Everything needed to draw a slider, derived from its value and range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    pub value: f64,
    /// Position of the value within the range, `0..=100`.
    pub percent: f64,
    pub disabled: bool,
    pub dragging: bool,
    pub focused: bool,
}

impl SliderView {
    pub fn new(value: f64, range: &Range) -> Self {
        Self {
            value,
            percent: range.fraction_of(value) * 100.0,
            disabled: false,
            dragging: false,
            focused: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width of the filled track, in percent.
    pub fn fill_percent(&self) -> f64 {
        self.percent
    }

    /// Horizontal offset of the thumb, in percent.
    pub fn thumb_offset_percent(&self) -> f64 {
        self.percent
    }

    /// Column of the thumb on a track drawn over `track`.
    pub fn thumb_column(&self, track: Rect) -> Option<u16> {
        if track.width == 0 {
            return None;
        }
        let span = f64::from(track.width - 1);
        let offset = (self.percent / 100.0 * span).round() as u16;
        Some(track.x + offset.min(track.width - 1))
    }
}

impl Slider {
    /// Snapshot of the slider for drawing.
    pub fn view(&self) -> SliderView {
        SliderView::new(self.value(), &self.range())
            .disabled(self.is_disabled())
            .dragging(self.is_dragging())
            .focused(self.is_focused())
    }

    pub fn accessibility(&self) -> Accessibility {
        let range = self.range();
        Accessibility {
            role: "slider",
            value_min: range.min(),
            value_max: range.max(),
            value_now: self.value(),
            disabled: self.is_disabled(),
            focusable: self.is_focusable(),
        }
    }

    /// Draw the slider on the first row of `area` and remember where the
    /// track landed for pointer mapping and hit testing.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &SliderTheme) {
        let track = area.row(0);
        render_slider(buf, track, &self.view(), theme);

        if track.is_empty() {
            self.hit_area = None;
            self.set_track(TrackBounds::default());
        } else {
            self.hit_area = Some(track);
            self.set_track(TrackBounds::from_cells(track));
        }
    }
}

/// Draw the track, fill and thumb for `view` on a single row.
pub fn render_slider(buf: &mut Buffer, track: Rect, view: &SliderView, theme: &SliderTheme) {
    let Some(thumb) = view.thumb_column(track) else {
        return;
    };
    if track.height == 0 {
        return;
    }

    let base = Cell::default().with_bg(theme.background).dim(view.disabled);
    for x in track.x..track.right() {
        let cell = if x < thumb {
            Cell {
                symbol: FILL_CHAR,
                fg: theme.fill,
                ..base
            }
        } else if x == thumb {
            let symbol = if view.dragging {
                THUMB_DRAGGING_CHAR
            } else {
                THUMB_CHAR
            };
            let fg = if view.focused {
                theme.thumb_focused
            } else {
                theme.thumb
            };
            Cell { symbol, fg, ..base }
        } else {
            Cell {
                symbol: TRACK_CHAR,
                fg: theme.track,
                ..base
            }
        };
        buf.set(x, track.y, cell);
    }
}

/// Format a value with as many decimals as the step needs.
pub fn format_value(value: f64, step: f64) -> String {
    let decimals = decimals_of(step);
    format!("{value:.decimals$}")
}

fn decimals_of(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
