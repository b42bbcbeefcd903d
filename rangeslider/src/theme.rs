//! Slider colors.

/// Terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an OKLCH color (lightness 0..1, chroma, hue in degrees).
    pub fn from_oklch(l: f32, c: f32, h: f32) -> Self {
        use palette::{IntoColor, Oklch, Srgb};

        let oklch = Oklch::new(l, c, h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();

        Rgb::new(r, g, b)
    }
}

/// Colors used to draw a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderTheme {
    pub background: Rgb,
    /// Unfilled portion of the track.
    pub track: Rgb,
    /// Filled portion of the track.
    pub fill: Rgb,
    pub thumb: Rgb,
    /// Thumb color while the slider has keyboard focus.
    pub thumb_focused: Rgb,
    pub label: Rgb,
}

impl SliderTheme {
    /// Medical-blue palette matching the dashboard's primary color.
    pub fn clinical() -> Self {
        Self {
            background: Rgb::from_oklch(0.18, 0.01, 250.0),
            track: Rgb::from_oklch(0.4, 0.02, 250.0),
            fill: Rgb::from_oklch(0.62, 0.17, 250.0),
            thumb: Rgb::from_oklch(0.95, 0.0, 0.0),
            thumb_focused: Rgb::from_oklch(0.8, 0.15, 200.0),
            label: Rgb::from_oklch(0.85, 0.01, 250.0),
        }
    }
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self::clinical()
    }
}
