//! Terminal setup, teardown and diffed drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use autocomplete::{Element, Rgb, TextStyle};
use crossterm::cursor::{self, MoveTo};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::buffer::{Buffer, DEFAULT_BG, DEFAULT_FG, char_width};
use crate::paint::{Frame, Rect, paint};

/// Owns the terminal while the app runs and restores it on drop or panic.
pub struct TerminalGuard {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::invalid(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Paint `root` and write the cells that changed since the last draw.
    pub fn draw(&mut self, root: &Element) -> io::Result<Frame> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::invalid(width, height);
        }

        self.current.clear();
        let frame = paint(root, Rect::new(0, 0, width, height), &mut self.current);
        self.flush_diff()?;

        match frame.cursor {
            Some((x, y)) => queue!(self.stdout, MoveTo(x, y), cursor::Show)?,
            None => queue!(self.stdout, cursor::Hide)?,
        }
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(frame)
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last = None;
        let mut fg = DEFAULT_FG;
        let mut bg = DEFAULT_BG;
        let mut style = TextStyle::new();

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(ct_color(fg)),
            SetBackgroundColor(ct_color(bg))
        )?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if last != Some((x, y)) {
                queue!(self.stdout, MoveTo(x, y))?;
            }
            if cell.style != style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                apply_style(&mut self.stdout, cell.style)?;
                // Reset clears colors too.
                fg = DEFAULT_FG;
                bg = DEFAULT_BG;
                queue!(
                    self.stdout,
                    SetForegroundColor(ct_color(fg)),
                    SetBackgroundColor(ct_color(bg))
                )?;
                style = cell.style;
            }
            if cell.fg != fg {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                bg = cell.bg;
            }
            queue!(self.stdout, Print(cell.char))?;
            last = Some((x + char_width(cell.char).max(1), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn apply_style(out: &mut Stdout, style: TextStyle) -> io::Result<()> {
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
