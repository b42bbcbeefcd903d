/// Cell-space rectangle a widget is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split off `width` columns from the left, returning `(left, rest)`.
    pub fn split_left(self, width: u16) -> (Self, Self) {
        let width = width.min(self.width);
        let left = Self { width, ..self };
        let rest = Self {
            x: self.x + width,
            width: self.width - width,
            ..self
        };
        (left, rest)
    }

    /// Split off `width` columns from the right, returning `(rest, right)`.
    pub fn split_right(self, width: u16) -> (Self, Self) {
        let width = width.min(self.width);
        let rest = Self {
            width: self.width - width,
            ..self
        };
        let right = Self {
            x: self.x + self.width - width,
            width,
            ..self
        };
        (rest, right)
    }

    /// Row `offset` of this rectangle as a one-line rectangle.
    pub fn row(self, offset: u16) -> Self {
        Self {
            y: self.y.saturating_add(offset),
            height: if offset < self.height { 1 } else { 0 },
            ..self
        }
    }
}
