//! Fixed-tick cooperative engine for the debris arcade.
//!
//! [`Game`] owns a [`Scheduler`] and the shared [`World`]. Each call to
//! [`Game::tick`] advances the clock by one tick and resumes every task that
//! is due. Tasks draw through a [`Canvas`] and read the player through a
//! [`ControlSource`], so the engine runs the same headless or on a terminal.

pub mod canvas;
pub mod error;
pub mod game;
pub mod scheduler;
pub mod tasks;
pub mod world;

pub use canvas::{Canvas, ControlSource, HeadlessCanvas, ScriptedControls};
pub use error::{RenderError, TaskError, TaskFault};
pub use game::Game;
pub use scheduler::{Lane, PassReport, Scheduler, Spawner, Task, TaskCx, TaskId};
pub use world::{Playfield, ShipState, Sprites, World};
