//! TerminalCanvas: flushes the arena to a real terminal.
//!
//! Each grid cell maps to two terminal columns and one row, which keeps the
//! arena roughly square under typical glyph aspect ratios. The whole arena is
//! rewritten every frame, so `clear` repaints the background and frame rather
//! than wiping the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::canvas::{Canvas, Rgb};
use crate::types::Point;

/// Glyphs for a cell that carries an inset (food).
const INSET_GLYPHS: &str = "▪▪";

pub struct TerminalCanvas {
    stdout: io::Stdout,
    tile_count: i8,
    background: Rgb,
    frame_color: Rgb,
}

impl TerminalCanvas {
    pub fn new(tile_count: i8, background: Rgb) -> Self {
        Self {
            stdout: io::stdout(),
            tile_count,
            background,
            frame_color: Rgb::new(120, 120, 130),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Arena width in terminal columns, border excluded.
    fn arena_cols(&self) -> u16 {
        (self.tile_count as u16) * 2
    }

    /// Top-left terminal position of a grid cell (inside the frame).
    fn cell_origin(&self, cell: Point) -> (u16, u16) {
        (1 + (cell.x as u16) * 2, 1 + cell.y as u16)
    }

    /// Draw the HUD lines under the arena and flush the frame.
    pub fn present(&mut self, status: &str, hints: &str) -> Result<()> {
        let rows = self.tile_count as u16;
        let width = self.arena_cols() as usize + 2;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(0, rows + 2))?;
        self.stdout.queue(Print(format!("{status:<width$}")))?;
        self.stdout.queue(cursor::MoveTo(0, rows + 3))?;
        self.stdout.queue(SetAttribute(Attribute::Dim))?;
        self.stdout.queue(Print(format!("{hints:<width$}")))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;

        self.stdout.flush()?;
        Ok(())
    }

    /// Draw the end-of-game text centered over the arena.
    pub fn draw_overlay(&mut self, lines: &[String]) -> Result<()> {
        let rows = self.tile_count as u16;
        let cols = self.arena_cols();
        let top = 1 + rows.saturating_sub(lines.len() as u16) / 2;

        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(SetBackgroundColor(Color::Black))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        for (i, line) in lines.iter().enumerate() {
            let text = format!(" {line} ");
            let x = 1 + cols.saturating_sub(text.len() as u16) / 2;
            self.stdout.queue(cursor::MoveTo(x, top + i as u16))?;
            self.stdout.queue(Print(text))?;
        }
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        let cols = self.arena_cols();
        let rows = self.tile_count as u16;

        self.stdout
            .queue(SetForegroundColor(rgb_to_color(self.frame_color)))?;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(cols as usize))))?;
        for y in 0..rows {
            self.stdout.queue(cursor::MoveTo(0, y + 1))?;
            self.stdout.queue(Print("│"))?;
            self.stdout.queue(cursor::MoveTo(cols + 1, y + 1))?;
            self.stdout.queue(Print("│"))?;
        }
        self.stdout.queue(cursor::MoveTo(0, rows + 1))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(cols as usize))))?;

        self.stdout.queue(ResetColor)?;
        Ok(())
    }
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self) -> Result<()> {
        self.draw_frame()?;

        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(self.background)))?;
        let blank = " ".repeat(self.arena_cols() as usize);
        for y in 0..self.tile_count as u16 {
            self.stdout.queue(cursor::MoveTo(1, y + 1))?;
            self.stdout.queue(Print(&blank))?;
        }
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn fill_cell(&mut self, cell: Point, primary: Rgb, secondary: Option<Rgb>) -> Result<()> {
        if !cell.in_bounds(self.tile_count) {
            return Ok(());
        }

        let (x, y) = self.cell_origin(cell);
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(primary)))?;
        match secondary {
            Some(inset) => {
                self.stdout
                    .queue(SetForegroundColor(rgb_to_color(inset)))?;
                self.stdout.queue(Print(INSET_GLYPHS))?;
            }
            None => {
                self.stdout.queue(Print("  "))?;
            }
        }
        self.stdout.queue(ResetColor)?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
