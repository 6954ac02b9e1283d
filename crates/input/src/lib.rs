//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`Intent`]s and latches them into the
//! [`Controls`](tui_debris_types::Controls) sample the ship reads once per
//! control cycle. Terminals that never report key releases are fine: a tap
//! counts for exactly one sample.

pub mod handler;
pub mod map;

pub use tui_debris_types as types;

pub use handler::{ControlLatch, KeyboardControls};
pub use map::{handle_key_event, should_quit, Intent};
