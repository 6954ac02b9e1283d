//! Rendering and input collaborators.
//!
//! The engine never touches a terminal. It draws through [`Canvas`] and reads
//! the player through [`ControlSource`]; the terminal crates implement both,
//! and the headless implementations below drive tests and benches.

use std::collections::VecDeque;

use tui_debris_types::{Brightness, Controls, ShapeId};

use crate::error::RenderError;
use crate::world::Sprites;

/// Glyph surface the tasks draw on.
///
/// Fractional coordinates are floored before use.
pub trait Canvas {
    /// Draw (or erase, when `erase` is set) a pre-loaded glyph block with its
    /// top-left corner at `(row, col)`. Cells outside the surface are skipped.
    fn draw(&mut self, shape: ShapeId, row: f64, col: f64, erase: bool) -> Result<(), RenderError>;

    /// Size of a glyph block as `(height, width)`.
    fn frame_size(&self, shape: ShapeId) -> Result<(u16, u16), RenderError>;

    /// Put a single glyph; `' '` clears the cell.
    fn put_glyph(&mut self, row: f64, col: f64, glyph: char, brightness: Brightness);

    /// Put a line of text starting at `(row, col)`.
    fn put_text(&mut self, row: u16, col: u16, text: &str);
}

/// Player input, sampled without blocking once per ship control cycle.
pub trait ControlSource {
    fn read_controls(&mut self) -> Controls;
}

/// A fixed sample: the same controls every cycle.
impl ControlSource for Controls {
    fn read_controls(&mut self) -> Controls {
        *self
    }
}

/// Replays a queue of samples, then reports idle controls.
#[derive(Debug, Clone, Default)]
pub struct ScriptedControls {
    queue: VecDeque<Controls>,
}

impl ScriptedControls {
    pub fn new(samples: impl IntoIterator<Item = Controls>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ControlSource for ScriptedControls {
    fn read_controls(&mut self) -> Controls {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// Canvas that only knows shape sizes and counts what is drawn on it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessCanvas {
    sizes: Vec<(u16, u16)>,
    draws: u64,
    erases: u64,
    glyphs: u64,
    texts: u64,
    last_text: Option<String>,
}

impl HeadlessCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shape of the given size and return its handle.
    pub fn add_shape(&mut self, height: u16, width: u16) -> ShapeId {
        self.sizes.push((height, width));
        ShapeId((self.sizes.len() - 1) as u16)
    }

    /// A canvas with a typical sprite set: a 9x5 two-frame ship, three debris
    /// sizes, a four-frame explosion and a banner.
    pub fn with_default_sprites() -> (Self, Sprites) {
        let mut canvas = Self::new();
        let ship = [canvas.add_shape(9, 5), canvas.add_shape(9, 5)];
        let debris = vec![
            canvas.add_shape(3, 5),
            canvas.add_shape(4, 9),
            canvas.add_shape(6, 12),
        ];
        let explosion = (0..4).map(|_| canvas.add_shape(4, 11)).collect();
        let game_over = canvas.add_shape(7, 48);
        let sprites = Sprites {
            ship,
            debris,
            explosion,
            game_over,
        };
        (canvas, sprites)
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn erases(&self) -> u64 {
        self.erases
    }

    pub fn glyphs(&self) -> u64 {
        self.glyphs
    }

    pub fn texts(&self) -> u64 {
        self.texts
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }
}

impl Canvas for HeadlessCanvas {
    fn draw(&mut self, shape: ShapeId, _row: f64, _col: f64, erase: bool) -> Result<(), RenderError> {
        self.frame_size(shape)?;
        if erase {
            self.erases += 1;
        } else {
            self.draws += 1;
        }
        Ok(())
    }

    fn frame_size(&self, shape: ShapeId) -> Result<(u16, u16), RenderError> {
        self.sizes
            .get(shape.0 as usize)
            .copied()
            .ok_or(RenderError::UnknownShape(shape))
    }

    fn put_glyph(&mut self, _row: f64, _col: f64, _glyph: char, _brightness: Brightness) {
        self.glyphs += 1;
    }

    fn put_text(&mut self, _row: u16, _col: u16, text: &str) {
        self.texts += 1;
        self.last_text = Some(text.to_string());
    }
}
