//! Shared game state passed to every task.

use tui_debris_core::{Clock, CollisionIndex, ConfigError, DifficultySchedule, GameConfig, GameRng};
use tui_debris_types::{Rect, ShapeId};

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Playfield size in cells, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub rows: u16,
    pub cols: u16,
    pub border: u16,
}

impl Playfield {
    pub fn new(rows: u16, cols: u16, border: u16) -> Self {
        Self { rows, cols, border }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.rows), f64::from(self.cols))
    }

    /// Last row inside the border
    pub fn last_row(&self) -> u16 {
        self.rows.saturating_sub(self.border + 1)
    }

    /// Last column inside the border
    pub fn last_col(&self) -> u16 {
        self.cols.saturating_sub(self.border + 1)
    }
}

/// Handles of every pre-loaded glyph block the tasks use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    pub ship: [ShapeId; 2],
    pub debris: Vec<ShapeId>,
    pub explosion: Vec<ShapeId>,
    pub game_over: ShapeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipState {
    pub row: f64,
    pub col: f64,
    pub row_speed: f64,
    pub col_speed: f64,
    /// Index into [`Sprites::ship`]
    pub frame: usize,
    pub alive: bool,
    drawn: Option<(f64, f64, usize)>,
}

impl ShipState {
    pub fn new(row: f64, col: f64) -> Self {
        Self {
            row,
            col,
            row_speed: 0.0,
            col_speed: 0.0,
            frame: 0,
            alive: true,
            drawn: None,
        }
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.col_speed)
    }

    pub fn shape(&self, sprites: &Sprites) -> ShapeId {
        sprites.ship[self.frame % 2]
    }

    /// Erase the last drawn pose and draw the current one.
    pub fn redraw(&mut self, canvas: &mut dyn Canvas, sprites: &Sprites) -> Result<(), RenderError> {
        self.erase(canvas, sprites)?;
        if self.alive {
            canvas.draw(self.shape(sprites), self.row, self.col, false)?;
            self.drawn = Some((self.row, self.col, self.frame % 2));
        }
        Ok(())
    }

    pub fn erase(&mut self, canvas: &mut dyn Canvas, sprites: &Sprites) -> Result<(), RenderError> {
        if let Some((row, col, frame)) = self.drawn.take() {
            canvas.draw(sprites.ship[frame], row, col, true)?;
        }
        Ok(())
    }

    pub fn is_drawn(&self) -> bool {
        self.drawn.is_some()
    }
}

pub struct World {
    pub config: GameConfig,
    pub playfield: Playfield,
    pub sprites: Sprites,
    pub clock: Clock,
    pub obstacles: CollisionIndex,
    pub ship: ShipState,
    pub rng: GameRng,
    schedule: DifficultySchedule,
    game_over: bool,
}

impl World {
    pub fn new(config: GameConfig, playfield: Playfield, sprites: Sprites) -> Result<Self, ConfigError> {
        config.validate()?;
        let schedule = config.schedule()?;
        let clock = Clock::new(config.timing.tick_secs, config.timing.year_secs);
        let rng = GameRng::new(config.seed.unwrap_or(0));
        let ship = ShipState::new(f64::from(playfield.rows) / 2.0, f64::from(playfield.cols) / 2.0);

        Ok(Self {
            obstacles: CollisionIndex::new(playfield.bounds()),
            config,
            playfield,
            sprites,
            clock,
            ship,
            rng,
            schedule,
            game_over: false,
        })
    }

    pub fn year(&self) -> u32 {
        let year = u64::from(self.config.years.start_year) + self.clock.epoch();
        u32::try_from(year).unwrap_or(u32::MAX)
    }

    pub fn weapons_enabled(&self) -> bool {
        self.year() >= self.config.years.plasma_gun_year
    }

    pub fn schedule(&self) -> &DifficultySchedule {
        &self.schedule
    }

    /// Delay before the next debris, or `None` while spawning is off
    pub fn spawn_delay(&self) -> Option<f64> {
        self.schedule.delay_for_year(self.year())
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn end_game(&mut self) {
        self.game_over = true;
        self.ship.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(GameConfig::default(), Playfield::new(30, 80, 1), Sprites::default()).unwrap()
    }

    #[test]
    fn year_follows_epochs() {
        let mut w = world();
        assert_eq!(w.year(), 1957);
        assert_eq!(w.spawn_delay(), None);
        w.clock.fast_forward(4 * w.clock.epoch_ticks());
        assert_eq!(w.year(), 1961);
        assert_eq!(w.spawn_delay(), Some(2.0));
        assert!(!w.weapons_enabled());
        w.clock.fast_forward(59 * w.clock.epoch_ticks());
        assert_eq!(w.year(), 2020);
        assert!(w.weapons_enabled());
    }

    #[test]
    fn playfield_interior() {
        let p = Playfield::new(30, 80, 1);
        assert_eq!(p.last_row(), 28);
        assert_eq!(p.last_col(), 78);
        assert_eq!(p.bounds(), Rect::new(0.0, 0.0, 30.0, 80.0));
    }

    #[test]
    fn end_game_kills_ship() {
        let mut w = world();
        w.end_game();
        assert!(w.is_game_over());
        assert!(!w.ship.alive);
    }
}
