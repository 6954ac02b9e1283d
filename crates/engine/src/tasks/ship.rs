//! The player's ship: a control loop and an independent frame cycler.

use tui_debris_core::update_velocity;
use tui_debris_types::{Rect, Step, HIT_SHRINK};

use crate::error::TaskError;
use crate::scheduler::{Lane, Task, TaskCx};
use crate::tasks::{Explosion, Projectile};

/// Clamp one axis into `[lo, hi]`, stopping the ship when it hits a wall.
fn clamp_axis(position: f64, speed: f64, lo: f64, hi: f64) -> (f64, f64) {
    let hi = hi.max(lo);
    let clamped = position.clamp(lo, hi);
    if clamped != position {
        (clamped, 0.0)
    } else {
        (position, speed)
    }
}

/// Reads the controls, moves the ship, fires and checks for impact.
#[derive(Debug, Clone, Default)]
pub struct ShipControl;

impl ShipControl {
    pub fn new() -> Self {
        Self
    }
}

impl Task for ShipControl {
    fn name(&self) -> &'static str {
        "ship"
    }

    fn lane(&self) -> Lane {
        Lane::Ship
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if !cx.world.ship.alive {
            return Ok(Step::Done);
        }

        let controls = cx.controls.read_controls();
        let ship_cfg = cx.world.config.ship.clone();
        let field = cx.world.playfield;
        let (height, width) = cx.canvas.frame_size(cx.world.ship.shape(&cx.world.sprites))?;
        let (height, width) = (f64::from(height), f64::from(width));

        let acceleration = (
            f64::from(controls.row_delta) * ship_cfg.acceleration,
            f64::from(controls.col_delta) * ship_cfg.acceleration,
        );
        let (row_speed, col_speed) = update_velocity(
            cx.world.ship.velocity(),
            acceleration,
            ship_cfg.max_speed,
            ship_cfg.damping,
        );

        let border = f64::from(field.border);
        let (row, row_speed) = clamp_axis(
            cx.world.ship.row + row_speed,
            row_speed,
            border,
            f64::from(field.rows) - border - height,
        );
        let (col, col_speed) = clamp_axis(
            cx.world.ship.col + col_speed,
            col_speed,
            border,
            f64::from(field.cols) - border - width,
        );

        let ship = &mut cx.world.ship;
        ship.row = row;
        ship.col = col;
        ship.row_speed = row_speed;
        ship.col_speed = col_speed;

        if controls.fire && cx.world.weapons_enabled() {
            let speed = cx.world.config.projectile.speed;
            cx.spawn(Projectile::new(row, col + (width / 2.0).floor(), speed));
        }

        let hull = Rect::new(row, col, height, width);
        if let Some(obstacle) = cx.world.obstacles.first_overlapping(&hull, HIT_SHRINK) {
            log::info!("ship struck by {} in year {}", obstacle, cx.world.year());
            cx.world.ship.erase(cx.canvas, &cx.world.sprites)?;
            cx.world.end_game();
            let frames = cx.world.sprites.explosion.clone();
            cx.spawn(Explosion::new(frames, hull.center()));
            return Ok(Step::Done);
        }

        cx.world.ship.redraw(cx.canvas, &cx.world.sprites)?;
        Ok(Step::sleep(ship_cfg.control_secs))
    }
}

/// Flips between the two ship frames on its own timer.
#[derive(Debug, Clone, Default)]
pub struct ShipAnimator;

impl ShipAnimator {
    pub fn new() -> Self {
        Self
    }
}

impl Task for ShipAnimator {
    fn name(&self) -> &'static str {
        "ship-frames"
    }

    fn lane(&self) -> Lane {
        Lane::Ship
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        if !cx.world.ship.alive {
            return Ok(Step::Done);
        }
        let ship = &mut cx.world.ship;
        ship.frame = (ship.frame + 1) % 2;
        ship.redraw(cx.canvas, &cx.world.sprites)?;
        Ok(Step::sleep(cx.world.config.ship.frame_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step_once, test_world};
    use tui_debris_types::Controls;

    #[test]
    fn accelerates_with_controls() {
        let (mut world, mut canvas) = test_world(30, 80);
        let start = world.ship.col;
        let mut ship = ShipControl::new();
        let mut right = Controls::new(0, 1, false);

        let (step, _) = step_once(&mut ship, &mut world, &mut canvas, &mut right);
        assert_eq!(step.unwrap(), Step::sleep(0.1));
        assert!((world.ship.col_speed - 0.3).abs() < 1e-9);
        assert!((world.ship.col - (start + 0.3)).abs() < 1e-9);
        assert_eq!(world.ship.row_speed, 0.0);
        assert!(world.ship.is_drawn());
    }

    #[test]
    fn stops_at_the_wall() {
        let (mut world, mut canvas) = test_world(30, 80);
        let mut ship = ShipControl::new();
        let mut up = Controls::new(-1, 0, false);
        for _ in 0..100 {
            step_once(&mut ship, &mut world, &mut canvas, &mut up).0.unwrap();
        }
        assert_eq!(world.ship.row, 1.0);
        assert_eq!(world.ship.row_speed, 0.0);

        let mut down = Controls::new(1, 0, false);
        for _ in 0..100 {
            step_once(&mut ship, &mut world, &mut canvas, &mut down).0.unwrap();
        }
        // 30 rows, border 1, ship 9 tall
        assert_eq!(world.ship.row, 20.0);
    }

    #[test]
    fn fires_only_once_weapons_unlock() {
        let (mut world, mut canvas) = test_world(30, 80);
        let mut ship = ShipControl::new();
        let mut fire = Controls::new(0, 0, true);

        let (_, spawned) = step_once(&mut ship, &mut world, &mut canvas, &mut fire);
        assert_eq!(spawned.pending(), 0);

        let epochs = u64::from(world.config.years.plasma_gun_year - world.config.years.start_year);
        world.clock.fast_forward(epochs * world.clock.epoch_ticks());
        let (_, spawned) = step_once(&mut ship, &mut world, &mut canvas, &mut fire);
        assert_eq!(spawned.pending_names(), vec!["projectile"]);
    }

    #[test]
    fn collision_ends_the_game() {
        let (mut world, mut canvas) = test_world(30, 80);
        let (row, col) = (world.ship.row, world.ship.col);
        world.obstacles.insert(Rect::new(row, col, 5.0, 5.0));
        let mut ship = ShipControl::new();

        let (step, spawned) = step_once(&mut ship, &mut world, &mut canvas, &mut Controls::default());
        assert!(step.unwrap().is_done());
        assert!(world.is_game_over());
        assert!(!world.ship.is_drawn());
        assert_eq!(spawned.pending_names(), vec!["explosion"]);
    }

    #[test]
    fn animator_toggles_frames_until_death() {
        let (mut world, mut canvas) = test_world(30, 80);
        let mut frames = ShipAnimator::new();
        let mut idle = Controls::default();

        let (step, _) = step_once(&mut frames, &mut world, &mut canvas, &mut idle);
        assert_eq!(step.unwrap(), Step::sleep(0.2));
        assert_eq!(world.ship.frame, 1);
        step_once(&mut frames, &mut world, &mut canvas, &mut idle).0.unwrap();
        assert_eq!(world.ship.frame, 0);

        world.end_game();
        let (step, _) = step_once(&mut frames, &mut world, &mut canvas, &mut idle);
        assert!(step.unwrap().is_done());
    }
}
