//! Full-screen crossterm terminal with mouse capture.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use rangeslider::{Buffer, Cell, Rgb};

/// Owns raw mode and the alternate screen until dropped.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    /// Force a full repaint on the next draw (first frame, after resize).
    full_redraw: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            full_redraw: true,
        })
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Draw a frame and write only the cells that changed.
    pub fn draw(&mut self, frame: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            self.full_redraw = true;
        }

        self.current.clear();
        frame(&mut self.current);

        if self.full_redraw {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            // A sentinel previous frame makes every cell differ.
            self.previous = Buffer::new(width, height);
            let area = self.previous.area();
            self.previous.fill(area, Cell::new('\u{0}'));
            self.full_redraw = false;
        }
        self.flush_diff()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_dim = false;
        let mut last_bold = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.bold != last_bold || cell.dim != last_dim {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                last_bold = cell.bold;
                last_dim = cell.dim;
            }

            write!(self.stdout, "{}", cell.symbol)?;
            cursor_at = Some((x + 1, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
