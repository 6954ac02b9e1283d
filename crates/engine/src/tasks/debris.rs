//! Falling debris.
//!
//! States: FALLING -> EXPLODING -> DONE when struck by a projectile,
//! FALLING -> DONE when it drops past the bottom edge. The obstacle is always
//! removed from the collision index before the task leaves FALLING.

use tui_debris_core::ObstacleId;
use tui_debris_types::{Rect, ShapeId, Step};

use crate::canvas::Canvas;
use crate::error::TaskError;
use crate::scheduler::{Lane, Task, TaskCx};
use crate::tasks::Explosion;
use crate::world::World;

#[derive(Debug, Clone)]
enum DebrisState {
    Falling,
    Exploding(Explosion),
    Done,
}

#[derive(Debug, Clone)]
pub struct Debris {
    shape: ShapeId,
    row: f64,
    col: f64,
    height: f64,
    width: f64,
    speed: f64,
    obstacle: ObstacleId,
    drawn: Option<f64>,
    state: DebrisState,
}

impl Debris {
    /// Register the obstacle at row 0 and build the task.
    ///
    /// The column is clamped into the playfield.
    pub fn launch(
        world: &mut World,
        canvas: &dyn Canvas,
        column: u16,
        shape: ShapeId,
    ) -> Result<Self, TaskError> {
        let (height, width) = canvas.frame_size(shape)?;
        let col = f64::from(column.min(world.playfield.cols.saturating_sub(1)));
        let (height, width) = (f64::from(height), f64::from(width));
        let obstacle = world.obstacles.insert(Rect::new(0.0, col, height, width));

        Ok(Self {
            shape,
            row: 0.0,
            col,
            height,
            width,
            speed: world.config.debris.fall_speed,
            obstacle,
            drawn: None,
            state: DebrisState::Falling,
        })
    }

    pub fn obstacle(&self) -> ObstacleId {
        self.obstacle
    }

    pub fn row(&self) -> f64 {
        self.row
    }

    pub fn col(&self) -> f64 {
        self.col
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, DebrisState::Falling)
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, DebrisState::Exploding(_))
    }

    fn erase(&mut self, canvas: &mut dyn Canvas) -> Result<(), TaskError> {
        if let Some(row) = self.drawn.take() {
            canvas.draw(self.shape, row, self.col, true)?;
        }
        Ok(())
    }

    fn fall(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if cx.world.obstacles.take_hit(self.obstacle)? {
            self.erase(cx.canvas)?;
            cx.world.obstacles.remove(self.obstacle)?;
            let center = Rect::new(self.row, self.col, self.height, self.width).center();
            log::debug!("{} struck at row {:.1}", self.obstacle, self.row);
            let explosion = Explosion::new(cx.world.sprites.explosion.clone(), center);
            self.state = DebrisState::Exploding(explosion);
            return self.step(cx);
        }

        // The first step renders at the launch row; later ones move first.
        if self.drawn.is_some() {
            self.erase(cx.canvas)?;
            self.row += self.speed;
            if self.row >= f64::from(cx.world.playfield.rows) {
                cx.world.obstacles.remove(self.obstacle)?;
                self.state = DebrisState::Done;
                return Ok(Step::Done);
            }
            cx.world.obstacles.update_top(self.obstacle, self.row)?;
        }

        cx.canvas.draw(self.shape, self.row, self.col, false)?;
        self.drawn = Some(self.row);
        Ok(Step::yield_once())
    }
}

impl Task for Debris {
    fn name(&self) -> &'static str {
        "debris"
    }

    fn lane(&self) -> Lane {
        Lane::Debris
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        match &mut self.state {
            DebrisState::Falling => self.fall(cx),
            DebrisState::Exploding(explosion) => {
                let step = explosion.step(cx)?;
                if step.is_done() {
                    self.state = DebrisState::Done;
                }
                Ok(step)
            }
            DebrisState::Done => Ok(Step::Done),
        }
    }
}
