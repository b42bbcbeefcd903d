use unicode_width::UnicodeWidthChar;

use super::Cell;
use crate::layout::Rect;

/// Grid of cells the presentation layer draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a cell, silently dropping writes outside the buffer.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_width` columns.
    ///
    /// Returns the number of columns written. Wide characters take two
    /// columns; a wide character that would straddle the clip edge is
    /// dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, template: Cell) -> u16 {
        let mut written: u16 = 0;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if written + width > max_width {
                break;
            }
            self.set(
                x + written,
                y,
                Cell {
                    symbol: ch,
                    ..template
                },
            );
            for pad in 1..width {
                self.set(
                    x + written + pad,
                    y,
                    Cell {
                        symbol: ' ',
                        ..template
                    },
                );
            }
            written += width;
        }
        written
    }

    /// Fill `rect` with copies of `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Symbols of row `y`, for inspection and tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.symbol)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells that differ from `other`, with their coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
