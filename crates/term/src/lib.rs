//! Terminal rendering for the debris arcade.
//!
//! Tasks draw into a [`FrameCanvas`], a framebuffer the size of the
//! playfield. Once per tick the host hands that framebuffer to the
//! [`TerminalRenderer`], which writes only the cells that changed.

pub mod canvas;
pub mod error;
pub mod fb;
pub mod frames;
pub mod renderer;

pub use tui_debris_types as types;

pub use canvas::FrameCanvas;
pub use error::AssetError;
pub use fb::{Cell, FrameBuffer};
pub use frames::{Frame, SpriteSheet};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
