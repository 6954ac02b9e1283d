use tui_debris_types::{ShapeId, Step};

use crate::error::TaskError;
use crate::scheduler::{Lane, Task, TaskCx};

/// Plays an explosion sequence centred on a point, one frame per tick.
#[derive(Debug, Clone)]
pub struct Explosion {
    center: (f64, f64),
    frames: Vec<ShapeId>,
    next: usize,
    drawn: Option<(ShapeId, f64, f64)>,
}

impl Explosion {
    pub fn new(frames: Vec<ShapeId>, center: (f64, f64)) -> Self {
        Self {
            center,
            frames,
            next: 0,
            drawn: None,
        }
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn lane(&self) -> Lane {
        Lane::Debris
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if let Some((shape, row, col)) = self.drawn.take() {
            cx.canvas.draw(shape, row, col, true)?;
        }

        let Some(&shape) = self.frames.get(self.next) else {
            return Ok(Step::Done);
        };
        self.next += 1;

        let (height, width) = cx.canvas.frame_size(shape)?;
        let row = self.center.0 - f64::from(height) / 2.0;
        let col = self.center.1 - f64::from(width) / 2.0;
        cx.canvas.draw(shape, row, col, false)?;
        self.drawn = Some((shape, row, col));
        Ok(Step::yield_once())
    }
}
