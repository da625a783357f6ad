use std::io::Write;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor},
};
use rainbow_bar_core::{Color, Renderer, Result};

/// Paints each row in place on one terminal line using truecolor cells.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Moves past the animated line so the shell prompt does not overwrite it.
    pub fn finish(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, row: &[Color]) -> Result<()> {
        queue!(self.out, MoveToColumn(0))?;
        for cell in row {
            queue!(
                self.out,
                SetBackgroundColor(style::Color::Rgb {
                    r: cell.r,
                    g: cell.g,
                    b: cell.b,
                }),
                Print(' ')
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
