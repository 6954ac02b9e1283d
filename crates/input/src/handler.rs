//! Latches key presses into one control sample per ship cycle.
//!
//! Terminals without key-release events send a press (and maybe repeats) per
//! tap. Every press is latched until the ship takes the sample, then cleared,
//! so a tap thrusts for one cycle and a held key keeps thrusting through the
//! terminal's auto-repeat.

use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_debris_engine::ControlSource;

use crate::map::{handle_key_event, should_quit, Intent};
use crate::types::Controls;

/// Key events drained per pump; anything beyond waits for the next tick.
const MAX_EVENTS_PER_PUMP: usize = 32;

/// Controls requested since the last sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlLatch {
    row_delta: i8,
    col_delta: i8,
    fire: bool,
}

impl ControlLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intent. On each axis the latest non-zero thrust wins.
    pub fn press(&mut self, intent: Intent) {
        match intent {
            Intent::Thrust {
                row_delta,
                col_delta,
            } => {
                if row_delta != 0 {
                    self.row_delta = row_delta.signum();
                }
                if col_delta != 0 {
                    self.col_delta = col_delta.signum();
                }
            }
            Intent::Fire => self.fire = true,
        }
    }

    /// Return the latched sample and clear the latch.
    pub fn take(&mut self) -> Controls {
        let sample = Controls::new(self.row_delta, self.col_delta, self.fire);
        *self = Self::default();
        sample
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Non-blocking keyboard reader for the terminal host.
#[derive(Debug, Clone, Default)]
pub struct KeyboardControls {
    latch: ControlLatch,
    quit: bool,
}

impl KeyboardControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain pending terminal events without waiting.
    ///
    /// Returns the number of key events handled.
    pub fn pump(&mut self) -> std::io::Result<usize> {
        let mut keys = ArrayVec::<KeyEvent, MAX_EVENTS_PER_PUMP>::new();
        while !keys.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    keys.push(key);
                }
            }
        }

        for &key in &keys {
            self.handle_key(key);
        }
        Ok(keys.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            log::info!("quit requested");
            self.quit = true;
            return;
        }
        if let Some(intent) = handle_key_event(key) {
            self.latch.press(intent);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn latch(&self) -> &ControlLatch {
        &self.latch
    }
}

impl ControlSource for KeyboardControls {
    fn read_controls(&mut self) -> Controls {
        self.latch.take()
    }
}
