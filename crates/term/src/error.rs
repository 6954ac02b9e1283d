use std::path::PathBuf;

use thiserror::Error;

/// Problems with the glyph frames, reported before the engine starts
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame {name} is empty")]
    EmptyFrame { name: String },

    #[error("ship frames differ in size: {first:?} vs {second:?}")]
    MismatchedShipFrames { first: (u16, u16), second: (u16, u16) },

    #[error("no {kind} frames found")]
    EmptyPool { kind: &'static str },
}
