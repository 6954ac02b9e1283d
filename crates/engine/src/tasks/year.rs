use tui_debris_types::{milestone_for, Step};

use crate::error::TaskError;
use crate::scheduler::{Task, TaskCx};

/// Keeps the year caption on the bottom interior row up to date.
///
/// The caption is repainted every pass since falling debris erases the cells
/// it crosses.
#[derive(Debug, Clone, Default)]
pub struct YearClock {
    shown: Option<u32>,
    width: usize,
}

impl YearClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caption text for a year, e.g. `Year 1961: Gagarin flew!`
    pub fn caption(year: u32) -> String {
        match milestone_for(year) {
            Some(event) => format!("Year {year}: {event}"),
            None => format!("Year {year}"),
        }
    }
}

impl Task for YearClock {
    fn name(&self) -> &'static str {
        "year-clock"
    }

    fn step(&mut self, cx: &mut TaskCx<'_>) -> Result<Step, TaskError> {
        let year = cx.world.year();
        if self.shown != Some(year) {
            log::trace!("caption now shows {year}");
            self.shown = Some(year);
        }
        let field = cx.world.playfield;
        let caption = Self::caption(year);
        // Pad over whatever longer caption was there before.
        let padded = format!("{caption:<width$}", width = self.width);
        self.width = caption.chars().count();
        cx.canvas
            .put_text(field.last_row(), field.border + 1, &padded);
        Ok(Step::yield_once())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{step_once, test_world};
    use tui_debris_types::Controls;

    #[test]
    fn captions() {
        assert_eq!(YearClock::caption(1957), "Year 1957: First Sputnik");
        assert_eq!(YearClock::caption(1958), "Year 1958: First Sputnik");
        assert_eq!(YearClock::caption(1900), "Year 1900");
    }

    #[test]
    fn redraws_when_the_year_turns() {
        let (mut world, mut canvas) = test_world(30, 80);
        let mut clock = YearClock::new();
        let mut idle = Controls::default();

        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        assert_eq!(canvas.last_text(), Some("Year 1957: First Sputnik"));

        world.clock.fast_forward(24 * world.clock.epoch_ticks());
        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        let long = "Year 1981: Flight of the Shuttle Columbia";
        assert_eq!(canvas.last_text(), Some(long));

        world.clock.fast_forward(17 * world.clock.epoch_ticks());
        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        let text = canvas.last_text().unwrap();
        assert_eq!(text.trim_end(), "Year 1998: ISS start building");
        assert_eq!(text.len(), long.len());

        // Same year again: repainted, padding no longer needed.
        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        assert_eq!(canvas.last_text(), Some("Year 1998: ISS start building"));
    }

    #[test]
    fn repaints_within_a_year() {
        let (mut world, mut canvas) = test_world(30, 80);
        let mut clock = YearClock::new();
        let mut idle = Controls::default();

        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        let painted = canvas.texts();
        world.clock.advance();
        step_once(&mut clock, &mut world, &mut canvas, &mut idle).0.unwrap();
        assert_eq!(world.year(), 1957);
        assert_eq!(canvas.texts(), painted + 1);
    }
}
