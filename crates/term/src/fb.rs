//! Framebuffer of monochrome glyph cells.

use tui_debris_types::Brightness;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub brightness: Brightness,
}

impl Cell {
    pub const fn new(ch: char, brightness: Brightness) -> Self {
        Self { ch, brightness }
    }

    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            brightness: Brightness::Normal,
        }
    }
}

/// 2D framebuffer of glyph cells, addressed as `(x, y)` = `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, brightness: Brightness) {
        self.set(x, y, Cell::new(ch, brightness));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, Brightness::Normal);
            cx += 1;
        }
    }

    /// Draw a box around the outermost `thickness` rings of cells.
    pub fn draw_border(&mut self, thickness: u16) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for ring in 0..thickness.min(self.width / 2).min(self.height / 2) {
            let (left, top) = (ring, ring);
            let (right, bottom) = (self.width - 1 - ring, self.height - 1 - ring);
            for x in left..=right {
                self.put_char(x, top, '-', Brightness::Normal);
                self.put_char(x, bottom, '-', Brightness::Normal);
            }
            for y in top..=bottom {
                self.put_char(left, y, '|', Brightness::Normal);
                self.put_char(right, y, '|', Brightness::Normal);
            }
            for (x, y) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
                self.put_char(x, y, '+', Brightness::Normal);
            }
        }
    }
}
