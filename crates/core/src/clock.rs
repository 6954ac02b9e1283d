//! Fixed-tick clock.
//!
//! The tick interval is the only time base of the engine. There is no
//! wall-clock drift correction: a run is fully described by its tick count.

/// Ratios closer than this to an integer count as that integer, so that
/// `0.3 / 0.1 == 2.9999999999999996` still means three ticks.
const TICK_EPSILON: f64 = 1e-6;

/// Number of whole ticks covering `secs` at `tick_secs` per tick.
///
/// Rounds up, except for ratios within floating noise of an integer.
/// Zero, negative and NaN durations give zero ticks.
pub fn ticks_for(secs: f64, tick_secs: f64) -> u32 {
    if !(secs > 0.0) || !(tick_secs > 0.0) {
        return 0;
    }
    let ratio = secs / tick_secs;
    let nearest = ratio.round();
    let ticks = if (ratio - nearest).abs() < TICK_EPSILON {
        nearest
    } else {
        ratio.ceil()
    };
    // `as` saturates for out-of-range floats.
    ticks as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    tick_secs: f64,
    epoch_ticks: u64,
    tick: u64,
}

impl Clock {
    /// Create a clock ticking every `tick_secs` whose epoch lasts `epoch_secs`.
    pub fn new(tick_secs: f64, epoch_secs: f64) -> Self {
        let epoch_ticks = u64::from(ticks_for(epoch_secs, tick_secs)).max(1);
        Self {
            tick_secs,
            epoch_ticks,
            tick: 0,
        }
    }

    /// Advance one tick. Returns `true` when this tick starts a new epoch.
    pub fn advance(&mut self) -> bool {
        self.tick += 1;
        self.tick % self.epoch_ticks == 0
    }

    /// Jump forward without running anything in between.
    pub fn fast_forward(&mut self, ticks: u64) {
        self.tick += ticks;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn epoch(&self) -> u64 {
        self.tick / self.epoch_ticks
    }

    pub fn epoch_ticks(&self) -> u64 {
        self.epoch_ticks
    }

    pub fn tick_secs(&self) -> f64 {
        self.tick_secs
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.tick as f64 * self.tick_secs
    }

    pub fn ticks_for(&self, secs: f64) -> u32 {
        ticks_for(secs, self.tick_secs)
    }
}
