//! Canvas abstraction: the drawing surface the game view targets.
//!
//! A canvas knows how to wipe the arena and fill one grid cell. The terminal
//! implementation lives in `renderer`; `RecordingCanvas` captures draw calls
//! so view output can be asserted on without a terminal.

use anyhow::Result;

use crate::types::Point;

/// 24-bit RGB color.
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
}

/// Grid-cell drawing surface.
///
/// `fill_cell` paints one arena cell in `primary`; when `secondary` is given
/// the cell additionally carries a smaller centered inset in that color
/// (used for food).
pub trait Canvas {
    fn clear(&mut self) -> Result<()>;
    fn fill_cell(&mut self, cell: Point, primary: Rgb, secondary: Option<Rgb>) -> Result<()>;
}

/// One captured draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Fill {
        cell: Point,
        primary: Rgb,
        secondary: Option<Rgb>,
    },
}

/// Canvas that records draw calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill ops only, in draw order.
    pub fn fills(&self) -> impl Iterator<Item = (Point, Rgb, Option<Rgb>)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Fill {
                cell,
                primary,
                secondary,
            } => Some((cell, primary, secondary)),
            DrawOp::Clear => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> Result<()> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_cell(&mut self, cell: Point, primary: Rgb, secondary: Option<Rgb>) -> Result<()> {
        self.ops.push(DrawOp::Fill {
            cell,
            primary,
            secondary,
        });
        Ok(())
    }
}
