use tui_debris_types::{Brightness, Rect, Step, HIT_SHRINK};

use crate::error::TaskError;
use crate::scheduler::{Lane, Task, TaskCx};

const MUZZLE_FLASH: [char; 2] = ['*', 'O'];
const TRAIL: char = '|';

/// A plasma shot flying straight up from the ship.
#[derive(Debug, Clone)]
pub struct Projectile {
    row: f64,
    col: f64,
    speed: f64,
    flash: usize,
    drawn: Option<f64>,
}

impl Projectile {
    pub fn new(row: f64, col: f64, speed: f64) -> Self {
        Self {
            row,
            col,
            speed,
            flash: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    fn glyph(&self) -> char {
        MUZZLE_FLASH.get(self.flash).copied().unwrap_or(TRAIL)
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn lane(&self) -> Lane {
        Lane::Projectile
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if let Some(row) = self.drawn.take() {
            cx.canvas.put_glyph(row, self.col, ' ', Brightness::Normal);
        }

        self.row -= self.speed;
        if self.row < f64::from(cx.world.playfield.border) {
            return Ok(Step::Done);
        }

        let point = Rect::point(self.row, self.col);
        if let Some(hit) = cx.world.obstacles.first_overlapping(&point, HIT_SHRINK) {
            log::debug!("projectile hit {} at ({:.1}, {:.1})", hit, self.row, self.col);
            cx.world.obstacles.mark_hit(hit)?;
            return Ok(Step::Done);
        }

        cx.canvas
            .put_glyph(self.row, self.col, self.glyph(), Brightness::Normal);
        self.flash += 1;
        self.drawn = Some(self.row);
        Ok(Step::yield_once())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step_once, test_world};
    use tui_debris_types::Controls;

    #[test]
    fn flies_until_the_top_border() {
        let (mut world, mut canvas) = test_world(20, 40);
        let mut shot = Projectile::new(5.0, 10.0, 1.0);
        let mut yields = 0;
        loop {
            let (step, _) = step_once(&mut shot, &mut world, &mut canvas, &mut Controls::default());
            if step.unwrap().is_done() {
                break;
            }
            yields += 1;
        }
        // rows 4, 3, 2, 1 are drawn; row 0 is the border
        assert_eq!(yields, 4);
        assert!(world.obstacles.drain_hits().is_empty());
    }

    #[test]
    fn marks_the_obstacle_it_enters() {
        let (mut world, mut canvas) = test_world(20, 40);
        let target = world.obstacles.insert(Rect::new(2.0, 8.0, 3.0, 5.0));
        let mut shot = Projectile::new(6.0, 10.0, 1.0);

        let mut steps = 0;
        loop {
            steps += 1;
            let (step, _) = step_once(&mut shot, &mut world, &mut canvas, &mut Controls::default());
            if step.unwrap().is_done() {
                break;
            }
        }
        // Shrunk obstacle covers rows 3..=4, so the hit lands at row 4.
        assert_eq!(steps, 2);
        assert_eq!(shot.position().0, 4.0);
        assert!(world.obstacles.take_hit(target).unwrap());
    }

    #[test]
    fn grazing_the_edge_is_not_a_hit() {
        let (mut world, mut canvas) = test_world(20, 40);
        world.obstacles.insert(Rect::new(2.0, 8.0, 3.0, 5.0));
        // Column 8 is the obstacle's left edge, removed by the shrink.
        let mut shot = Projectile::new(6.0, 8.0, 1.0);
        loop {
            let (step, _) = step_once(&mut shot, &mut world, &mut canvas, &mut Controls::default());
            if step.unwrap().is_done() {
                break;
            }
        }
        assert_eq!(world.obstacles.pending_hits(), 0);
    }
}
