//! Core engine components - pure, deterministic, and testable
//!
//! This crate contains the leaf components the scheduler and the task library
//! are built from. It has **no dependencies** on terminals or I/O beyond
//! reading a config file, making it:
//!
//! - **Deterministic**: Same seed and tick count produce identical runs
//! - **Testable**: Each component is exercised in isolation
//! - **Portable**: Runs headless just as well as behind a terminal
//!
//! # Module Structure
//!
//! - [`clock`]: Fixed tick counter, epoch derivation and seconds-to-ticks conversion
//! - [`motion`]: Damped, clamped velocity update used by the ship
//! - [`collision`]: Obstacle arena with stable handles plus the per-pass hit set
//! - [`difficulty`]: Year-keyed spawn delay table
//! - [`rng`]: Seeded random source for columns, shapes and star placement
//! - [`config`]: `GameConfig` loaded from TOML
//! - [`error`]: Error types shared by the components above
//!
//! # Example
//!
//! ```
//! use tui_debris_core::{Clock, CollisionIndex};
//! use tui_debris_types::Rect;
//!
//! let mut clock = Clock::new(0.1, 1.5);
//! for _ in 0..15 {
//!     clock.advance();
//! }
//! assert_eq!(clock.epoch(), 1);
//!
//! let mut index = CollisionIndex::new(Rect::new(0.0, 0.0, 24.0, 80.0));
//! let id = index.insert(Rect::new(0.0, 10.0, 3.0, 5.0));
//! assert!(index.overlaps(id, &Rect::point(1.5, 12.0), 1.0).unwrap());
//! ```

pub mod clock;
pub mod collision;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod motion;
pub mod rng;

pub use tui_debris_types as types;

// Re-export commonly used types for convenience
pub use clock::{ticks_for, Clock};
pub use collision::{CollisionIndex, ObstacleId};
pub use config::GameConfig;
pub use difficulty::DifficultySchedule;
pub use error::{CollisionError, ConfigError};
pub use motion::update_velocity;
pub use rng::GameRng;
