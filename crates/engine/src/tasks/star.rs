use tui_debris_types::{Step, BLINK_PHASES};

use crate::error::TaskError;
use crate::scheduler::{Task, TaskCx};
use crate::world::World;

/// A blinking background star. Never completes.
#[derive(Debug, Clone)]
pub struct Star {
    row: u16,
    col: u16,
    symbol: char,
    phase: usize,
}

impl Star {
    pub fn new(row: u16, col: u16, symbol: char, phase: usize) -> Self {
        Self {
            row,
            col,
            symbol,
            phase: phase % BLINK_PHASES.len(),
        }
    }

    pub fn position(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    pub fn phase(&self) -> usize {
        self.phase
    }
}

impl Task for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        let (brightness, hold) = BLINK_PHASES[self.phase];
        cx.canvas
            .put_glyph(f64::from(self.row), f64::from(self.col), self.symbol, brightness);
        self.phase = (self.phase + 1) % BLINK_PHASES.len();
        Ok(Step::sleep(hold))
    }
}

/// Place the configured number of stars at random interior cells, keeping
/// the caption row clear.
pub fn scatter_stars(world: &mut World) -> Vec<Star> {
    let field = world.playfield;
    let symbols: Vec<char> = world.config.stars.symbols.chars().collect();
    if symbols.is_empty() {
        return Vec::new();
    }

    let top = field.border;
    let bottom = field.last_row().saturating_sub(1);
    let right = field.last_col();
    if bottom < top || right < field.border {
        return Vec::new();
    }

    (0..world.config.stars.count)
        .map(|_| {
            let row = world.rng.between(top, bottom);
            let col = world.rng.between(field.border, right);
            let symbol = world.rng.pick(&symbols).copied().unwrap_or('.');
            let phase = world.rng.index(BLINK_PHASES.len()).unwrap_or(0);
            Star::new(row, col, symbol, phase)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step_once, test_world};
    use tui_debris_types::Controls;

    #[test]
    fn cycles_through_phases() {
        let (mut world, mut canvas) = test_world(20, 40);
        let mut star = Star::new(3, 4, '*', 0);
        let mut holds = Vec::new();
        for _ in 0..5 {
            let (step, _) = step_once(&mut star, &mut world, &mut canvas, &mut Controls::default());
            holds.push(step.unwrap());
        }
        assert_eq!(
            holds,
            vec![
                Step::sleep(2.0),
                Step::sleep(0.3),
                Step::sleep(0.5),
                Step::sleep(0.3),
                Step::sleep(2.0)
            ]
        );
        assert_eq!(canvas.glyphs(), 5);
    }

    #[test]
    fn stars_stay_off_border_and_caption() {
        let (mut world, _) = test_world(20, 40);
        let stars = scatter_stars(&mut world);
        assert_eq!(stars.len(), world.config.stars.count);
        for star in &stars {
            let (row, col) = star.position();
            assert!((1..=17).contains(&row), "row {row}");
            assert!((1..=38).contains(&col), "col {col}");
        }
    }

    #[test]
    fn phase_wraps() {
        assert_eq!(Star::new(0, 0, '.', 6).phase(), 2);
    }
}
