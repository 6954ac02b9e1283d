use tui_debris_core::{ConfigError, GameConfig};

use crate::canvas::{Canvas, ControlSource};
use crate::error::TaskFault;
use crate::scheduler::{PassReport, Scheduler};
use crate::tasks::{scatter_stars, ShipAnimator, ShipControl, SpawnDirector, YearClock};
use crate::world::{Playfield, Sprites, World};

/// The scheduler together with the world its tasks share.
pub struct Game {
    scheduler: Scheduler,
    world: World,
}

impl Game {
    pub fn new(config: GameConfig, playfield: Playfield, sprites: Sprites) -> Result<Self, ConfigError> {
        let scheduler = Scheduler::new(config.timing.tick_secs);
        let world = World::new(config, playfield, sprites)?;
        Ok(Self { scheduler, world })
    }

    /// Register the standing cast: stars, the ship, its frame cycler, the
    /// spawn directors and the year caption.
    pub fn populate(&mut self) {
        for star in scatter_stars(&mut self.world) {
            self.scheduler.register(star);
        }
        self.scheduler.register(ShipControl::new());
        self.scheduler.register(ShipAnimator::new());
        for _ in 0..self.world.config.debris.directors {
            self.scheduler.register(SpawnDirector::new());
        }
        self.scheduler.register(YearClock::new());
        log::info!(
            "populated {} tasks on a {}x{} playfield (seed {})",
            self.scheduler.len(),
            self.world.playfield.rows,
            self.world.playfield.cols,
            self.world.rng.seed()
        );
    }

    /// Advance the clock one tick and run one scheduler pass.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        controls: &mut dyn ControlSource,
    ) -> Result<PassReport, TaskFault> {
        if self.world.clock.advance() {
            log::info!("year {}", self.world.year());
        }

        let report = self
            .scheduler
            .advance_all(&mut self.world, canvas, controls)?;

        let stray = self.world.obstacles.pending_hits();
        if stray > 0 {
            log::warn!("{stray} hit marks left unclaimed after the pass");
        }
        Ok(report)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn is_over(&self) -> bool {
        self.world.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::HeadlessCanvas;
    use tui_debris_types::Controls;

    fn game(rows: u16, cols: u16) -> (Game, HeadlessCanvas) {
        let (canvas, sprites) = HeadlessCanvas::with_default_sprites();
        let mut config = GameConfig::default();
        config.seed = Some(7);
        let game = Game::new(config, Playfield::new(rows, cols, 1), sprites).unwrap();
        (game, canvas)
    }

    #[test]
    fn populate_registers_the_cast() {
        let (mut game, _) = game(30, 80);
        game.populate();
        let sched = game.scheduler();
        assert_eq!(sched.count_named("star"), 100);
        assert_eq!(sched.count_named("ship"), 1);
        assert_eq!(sched.count_named("ship-frames"), 1);
        assert_eq!(sched.count_named("spawn-director"), 1);
        assert_eq!(sched.count_named("year-clock"), 1);
    }

    #[test]
    fn ticks_advance_the_year() {
        let (mut game, mut canvas) = game(30, 80);
        game.populate();
        let mut idle = Controls::default();
        for _ in 0..15 {
            game.tick(&mut canvas, &mut idle).unwrap();
        }
        assert_eq!(game.world().year(), 1958);
        assert_eq!(canvas.last_text(), Some("Year 1958: First Sputnik"));
        assert!(!game.is_over());
    }
}
