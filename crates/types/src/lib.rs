//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scheduler, task library, terminal rendering, tests).
//!
//! # Timing Constants
//!
//! Time is measured in seconds and quantised to fixed ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_SECS` | 0.1 | Fixed tick interval of the host loop |
//! | `YEAR_SECS` | 1.5 | Length of one epoch ("year") |
//! | `SHIP_CONTROL_SECS` | 0.1 | Pause between ship control cycles |
//! | `SHIP_FRAME_SECS` | 0.2 | Ship animation frame hold |
//! | `IDLE_RECHECK_SECS` | 0.1 | Spawn director recheck while spawning is off |
//!
//! # Star Blinking
//!
//! Stars cycle through four illumination phases:
//!
//! | Phase | Brightness | Hold |
//! |-------|------------|------|
//! | 0 | Dim | 2.0s |
//! | 1 | Normal | 0.3s |
//! | 2 | Bold | 0.5s |
//! | 3 | Normal | 0.3s |
//!
//! # Examples
//!
//! ```
//! use tui_debris_types::{Rect, Step, SuspensionRequest, milestone_for};
//!
//! let debris = Rect::new(0.0, 10.0, 3.0, 5.0);
//! assert!(debris.contains_point(1.0, 12.0));
//!
//! let step = Step::sleep(0.5);
//! assert_eq!(step, Step::Suspend(SuspensionRequest::SleepFor(0.5)));
//!
//! assert_eq!(milestone_for(1962), Some("Gagarin flew!"));
//! ```

/// Fixed tick interval in seconds (10 ticks per second)
pub const TICK_SECS: f64 = 0.1;

/// Length of one epoch in seconds; the displayed year advances once per epoch
pub const YEAR_SECS: f64 = 1.5;

/// First displayed year (epoch 0)
pub const START_YEAR: u32 = 1957;

/// Year from which the ship may fire its plasma gun
pub const PLASMA_GUN_YEAR: u32 = 2020;

/// Playfield border thickness in cells
pub const BORDER: u16 = 1;

/// Number of blinking stars placed on startup
pub const STAR_COUNT: usize = 100;

/// Glyphs a star is drawn with
pub const STAR_SYMBOLS: &str = "+*.:";

/// Star illumination phases, in blink order
pub const BLINK_PHASES: [(Brightness, f64); 4] = [
    (Brightness::Dim, 2.0),
    (Brightness::Normal, 0.3),
    (Brightness::Bold, 0.5),
    (Brightness::Normal, 0.3),
];

/// Debris fall speed in rows per tick
pub const DEBRIS_FALL_SPEED: f64 = 0.5;

/// Projectile speed in rows per tick
pub const PROJECTILE_SPEED: f64 = 1.0;

/// Ship acceleration per unit of control input
pub const SHIP_ACCELERATION: f64 = 0.3;

/// Ship speed limit per axis, in cells per control cycle
pub const SHIP_MAX_SPEED: f64 = 1.5;

/// Ship velocity damping factor applied every control cycle
pub const SHIP_DAMPING: f64 = 0.7;

/// Pause between ship control cycles
pub const SHIP_CONTROL_SECS: f64 = 0.1;

/// Hold time of each ship animation frame
pub const SHIP_FRAME_SECS: f64 = 0.2;

/// Spawn director recheck interval while the schedule has no spawning
pub const IDLE_RECHECK_SECS: f64 = 0.1;

/// Lower bound for any scheduled spawn delay
pub const MIN_SPAWN_DELAY_SECS: f64 = 0.2;

/// Default difficulty table: `(from_year, spawn_delay_secs)`
///
/// Years before the first entry do not spawn debris at all.
pub const DIFFICULTY_STEPS: [(u32, f64); 6] = [
    (1961, 2.0),
    (1969, 1.4),
    (1981, 1.0),
    (1995, 0.8),
    (2010, 0.6),
    (2020, 0.2),
];

/// Shrink applied to obstacle boxes before hit tests (cells per side)
pub const HIT_SHRINK: f64 = 1.0;

/// Notable years shown next to the year counter
pub const MILESTONES: [(u32, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];

/// Latest milestone reached by `year`
pub fn milestone_for(year: u32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .rev()
        .find(|&&(from, _)| year >= from)
        .map(|&(_, text)| text)
}

/// Axis-aligned rectangle in grid coordinates.
///
/// Bounds are treated as closed intervals: `[top, top + height]` by
/// `[left, left + width]`. A rectangle with zero height or width is a
/// segment or a point and still takes part in overlap tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

impl Rect {
    pub const fn new(top: f64, left: f64, height: f64, width: f64) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// Zero-area rectangle at a single point
    pub const fn point(row: f64, col: f64) -> Self {
        Self::new(row, col, 0.0, 0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Centre point as `(row, col)`
    pub fn center(&self) -> (f64, f64) {
        (self.top + self.height / 2.0, self.left + self.width / 2.0)
    }

    /// Contract every side by `by` cells.
    ///
    /// Returns `None` when the contraction would give a negative size.
    /// Negative `by` is treated as zero.
    pub fn shrink(&self, by: f64) -> Option<Rect> {
        let by = by.max(0.0);
        let height = self.height - 2.0 * by;
        let width = self.width - 2.0 * by;
        if height < 0.0 || width < 0.0 {
            return None;
        }
        Some(Rect::new(self.top + by, self.left + by, height, width))
    }

    /// Closed-interval intersection on both axes
    pub fn intersects(&self, other: &Rect) -> bool {
        self.top <= other.bottom()
            && other.top <= self.bottom()
            && self.left <= other.right()
            && other.left <= self.right()
    }

    pub fn contains_point(&self, row: f64, col: f64) -> bool {
        self.intersects(&Rect::point(row, col))
    }

    /// Clip this rectangle to `bounds`, keeping the top-left corner inside.
    pub fn clipped_to(&self, bounds: &Rect) -> Rect {
        let top = self.top.clamp(bounds.top, bounds.bottom());
        let left = self.left.clamp(bounds.left, bounds.right());
        let bottom = self.bottom().clamp(top, bounds.bottom());
        let right = self.right().clamp(left, bounds.right());
        Rect::new(top, left, bottom - top, right - left)
    }
}

/// Glyph brightness, the only styling a monochrome canvas supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Opaque handle of a pre-loaded glyph block (ship frame, debris, explosion...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShapeId(pub u16);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// One sample of the player's controls.
///
/// Deltas are always in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub row_delta: i8,
    pub col_delta: i8,
    pub fire: bool,
}

impl Controls {
    pub fn new(row_delta: i8, col_delta: i8, fire: bool) -> Self {
        Self {
            row_delta: row_delta.signum(),
            col_delta: col_delta.signum(),
            fire,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.row_delta == 0 && self.col_delta == 0 && !self.fire
    }
}

/// What a task asks of the scheduler when it gives up control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SuspensionRequest {
    /// Resume on the next tick
    YieldOnce,
    /// Resume only after the given number of seconds worth of ticks
    SleepFor(f64),
}

/// Outcome of resuming a task once
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Suspend(SuspensionRequest),
    Done,
}

impl Step {
    pub const fn yield_once() -> Self {
        Step::Suspend(SuspensionRequest::YieldOnce)
    }

    pub const fn sleep(secs: f64) -> Self {
        Step::Suspend(SuspensionRequest::SleepFor(secs))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_SECS, 0.1);
        assert_eq!(YEAR_SECS, 1.5);
        assert_eq!(BLINK_PHASES.len(), 4);
        assert_eq!(BLINK_PHASES[0], (Brightness::Dim, 2.0));
    }

    #[test]
    fn difficulty_table_is_monotone() {
        for pair in DIFFICULTY_STEPS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(DIFFICULTY_STEPS
            .iter()
            .all(|&(_, delay)| delay >= MIN_SPAWN_DELAY_SECS));
    }

    #[test]
    fn milestones() {
        assert_eq!(milestone_for(1900), None);
        assert_eq!(milestone_for(1957), Some("First Sputnik"));
        assert_eq!(milestone_for(1970), Some("Armstrong got on the moon!"));
        assert_eq!(
            milestone_for(2100),
            Some("Take the plasma gun! Shoot the garbage!")
        );
    }

    #[test]
    fn rect_shrink_never_inverts() {
        let r = Rect::new(0.0, 0.0, 2.0, 4.0);
        assert_eq!(r.shrink(1.0), Some(Rect::new(1.0, 1.0, 0.0, 2.0)));
        assert_eq!(r.shrink(1.5), None);
        assert_eq!(r.shrink(-3.0), Some(r));
    }

    #[test]
    fn rect_clip_keeps_inside() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let r = Rect::new(8.0, 9.0, 4.0, 4.0).clipped_to(&bounds);
        assert_eq!(r, Rect::new(8.0, 9.0, 2.0, 1.0));
    }

    #[test]
    fn controls_are_normalised() {
        let c = Controls::new(-5, 3, false);
        assert_eq!((c.row_delta, c.col_delta), (-1, 1));
        assert!(Controls::default().is_idle());
    }
}
