//! Framebuffer-backed [`Canvas`].

use tui_debris_engine::{Canvas, RenderError};
use tui_debris_types::{Brightness, ShapeId};

use crate::fb::FrameBuffer;
use crate::frames::SpriteSheet;

/// Floor a fractional coordinate; `None` for NaN or infinities.
fn cell(coord: f64) -> Option<i32> {
    let floored = coord.floor();
    if floored.is_finite() {
        Some(floored as i32)
    } else {
        None
    }
}

fn to_u16(value: i32) -> Option<u16> {
    u16::try_from(value).ok()
}

/// Draws sprite sheet frames into a [`FrameBuffer`] the size of the playfield.
#[derive(Debug, Clone)]
pub struct FrameCanvas {
    fb: FrameBuffer,
    sheet: SpriteSheet,
}

impl FrameCanvas {
    /// A canvas `cols` wide and `rows` tall with the border already drawn.
    pub fn new(rows: u16, cols: u16, border: u16, sheet: SpriteSheet) -> Self {
        let mut fb = FrameBuffer::new(cols, rows);
        fb.draw_border(border);
        Self { fb, sheet }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Draw a frame centred on the canvas.
    pub fn draw_centered(&mut self, shape: ShapeId) -> Result<(), RenderError> {
        let (height, width) = self.frame_size(shape)?;
        let row = (f64::from(self.fb.height()) - f64::from(height)) / 2.0;
        let col = (f64::from(self.fb.width()) - f64::from(width)) / 2.0;
        self.draw(shape, row, col, false)
    }

    /// Text of one row, for tests and diagnostics.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.fb.width())
            .filter_map(|x| self.fb.get(x, row))
            .map(|c| c.ch)
            .collect()
    }
}

impl Canvas for FrameCanvas {
    fn draw(&mut self, shape: ShapeId, row: f64, col: f64, erase: bool) -> Result<(), RenderError> {
        let frame = self.sheet.frame(shape).ok_or(RenderError::UnknownShape(shape))?;
        let (Some(top), Some(left)) = (cell(row), cell(col)) else {
            return Ok(());
        };

        for (dy, dx, ch) in frame.glyphs() {
            let (Some(y), Some(x)) = (to_u16(top + i32::from(dy)), to_u16(left + i32::from(dx))) else {
                continue;
            };
            let glyph = if erase { ' ' } else { ch };
            self.fb.put_char(x, y, glyph, Brightness::Normal);
        }
        Ok(())
    }

    fn frame_size(&self, shape: ShapeId) -> Result<(u16, u16), RenderError> {
        self.sheet
            .frame(shape)
            .map(|f| f.size())
            .ok_or(RenderError::UnknownShape(shape))
    }

    fn put_glyph(&mut self, row: f64, col: f64, glyph: char, brightness: Brightness) {
        let (Some(y), Some(x)) = (cell(row).and_then(to_u16), cell(col).and_then(to_u16)) else {
            return;
        };
        self.fb.put_char(x, y, glyph, brightness);
    }

    fn put_text(&mut self, row: u16, col: u16, text: &str) {
        self.fb.put_str(col, row, text);
    }
}
