//! Difficulty schedule - spawn cadence keyed by year
//!
//! The table maps a year to the delay between two debris spawns. Years before
//! the first entry do not spawn at all. Delays never grow as years pass and
//! never drop below the configured minimum.

use tui_debris_types::{DIFFICULTY_STEPS, MIN_SPAWN_DELAY_SECS};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultySchedule {
    steps: Vec<(u32, f64)>,
    min_delay_secs: f64,
}

impl DifficultySchedule {
    /// Build a schedule from `(from_year, delay_secs)` steps.
    ///
    /// Steps must be non-empty, sorted by strictly increasing year, with
    /// positive non-increasing delays.
    pub fn new(steps: Vec<(u32, f64)>, min_delay_secs: f64) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::invalid(
                "difficulty.steps",
                "at least one step is required",
            ));
        }
        if !(min_delay_secs >= 0.0) {
            return Err(ConfigError::invalid(
                "difficulty.min_delay_secs",
                format!("{min_delay_secs} is negative"),
            ));
        }
        for &(year, delay) in &steps {
            if !(delay > 0.0) || !delay.is_finite() {
                return Err(ConfigError::invalid(
                    "difficulty.steps",
                    format!("delay {delay} for {year} must be positive"),
                ));
            }
        }
        for pair in steps.windows(2) {
            let ((y0, d0), (y1, d1)) = (pair[0], pair[1]);
            if y1 <= y0 {
                return Err(ConfigError::invalid(
                    "difficulty.steps",
                    format!("years must increase ({y0} then {y1})"),
                ));
            }
            if d1 > d0 {
                return Err(ConfigError::invalid(
                    "difficulty.steps",
                    format!("delay grows from {d0}s to {d1}s at {y1}"),
                ));
            }
        }

        Ok(Self {
            steps,
            min_delay_secs,
        })
    }

    /// First year that spawns debris
    pub fn start_year(&self) -> u32 {
        self.steps[0].0
    }

    /// Spawn delay for `year`, or `None` while spawning has not started.
    pub fn delay_for_year(&self, year: u32) -> Option<f64> {
        self.steps
            .iter()
            .rev()
            .find(|&&(from, _)| year >= from)
            .map(|&(_, delay)| delay.max(self.min_delay_secs))
    }

    /// Spawn delay for an epoch counted from `start_year`.
    pub fn delay_for_epoch(&self, epoch: u64, start_year: u32) -> Option<f64> {
        let year = u64::from(start_year).saturating_add(epoch);
        self.delay_for_year(u32::try_from(year).unwrap_or(u32::MAX))
    }
}

impl Default for DifficultySchedule {
    fn default() -> Self {
        Self {
            steps: DIFFICULTY_STEPS.to_vec(),
            min_delay_secs: MIN_SPAWN_DELAY_SECS,
        }
    }
}
