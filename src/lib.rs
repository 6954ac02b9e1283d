//! TUI Debris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches can use `tui_debris::{core, engine, ..}`.

pub use tui_debris_core as core;
pub use tui_debris_engine as engine;
pub use tui_debris_input as input;
pub use tui_debris_term as term;
pub use tui_debris_types as types;
