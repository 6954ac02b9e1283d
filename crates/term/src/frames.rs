//! Glyph frames and the sprite sheet the canvas draws from.
//!
//! A frame is plain text. Spaces are transparent: drawing a frame only
//! touches its non-space cells, and erasing blanks exactly those cells.

use std::fs;
use std::path::{Path, PathBuf};

use tui_debris_engine::Sprites;
use tui_debris_types::ShapeId;

use crate::error::AssetError;

const ROCKET_FRAMES: [&str; 2] = [
    include_str!("../assets/rocket/rocket_frame_1.txt"),
    include_str!("../assets/rocket/rocket_frame_2.txt"),
];

const DEBRIS_FRAMES: [(&str, &str); 5] = [
    ("duck", include_str!("../assets/debris/duck.txt")),
    ("hubble", include_str!("../assets/debris/hubble.txt")),
    ("lamp", include_str!("../assets/debris/lamp.txt")),
    ("trash_large", include_str!("../assets/debris/trash_large.txt")),
    ("trash_small", include_str!("../assets/debris/trash_small.txt")),
];

const EXPLOSION_FRAMES: [&str; 4] = [
    include_str!("../assets/explosion/explosion_1.txt"),
    include_str!("../assets/explosion/explosion_2.txt"),
    include_str!("../assets/explosion/explosion_3.txt"),
    include_str!("../assets/explosion/explosion_4.txt"),
];

const GAME_OVER: &str = include_str!("../assets/game_over.txt");

/// One multi-line glyph block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<Vec<char>>,
    width: u16,
}

impl Frame {
    pub fn parse(name: &str, text: &str) -> Result<Self, AssetError> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(AssetError::EmptyFrame { name: name.to_string() });
        }
        Ok(Self {
            width: u16::try_from(width).unwrap_or(u16::MAX),
            rows,
        })
    }

    /// `(height, width)` in cells
    pub fn size(&self) -> (u16, u16) {
        (u16::try_from(self.rows.len()).unwrap_or(u16::MAX), self.width)
    }

    /// Non-space cells as `(row offset, col offset, glyph)`.
    pub fn glyphs(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, ch)| **ch != ' ')
                .map(move |(dx, &ch)| (dy as u16, dx as u16, ch))
        })
    }
}

/// Every loaded frame, indexed by [`ShapeId`].
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    frames: Vec<Frame>,
}

impl SpriteSheet {
    /// The frames compiled into the binary.
    pub fn builtin() -> Result<(Self, Sprites), AssetError> {
        let ship = ROCKET_FRAMES
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("rocket_frame_{}", i + 1), text.to_string()))
            .collect();
        let debris = DEBRIS_FRAMES
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        let explosion = EXPLOSION_FRAMES
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("explosion_{}", i + 1), text.to_string()))
            .collect();
        Self::assemble(ship, debris, explosion, GAME_OVER.to_string())
    }

    /// Load frames from `dir`: `rocket/`, `debris/`, `explosion/` and
    /// `game_over.txt`. Files in each directory are taken in name order.
    pub fn load_dir(dir: &Path) -> Result<(Self, Sprites), AssetError> {
        let ship = read_frames(&dir.join("rocket"))?;
        let debris = read_frames(&dir.join("debris"))?;
        let explosion = read_frames(&dir.join("explosion"))?;
        let game_over_path = dir.join("game_over.txt");
        let game_over = read_text(&game_over_path)?;
        log::info!(
            "loaded {} debris and {} explosion frames from {}",
            debris.len(),
            explosion.len(),
            dir.display()
        );
        Self::assemble(ship, debris, explosion, game_over)
    }

    fn assemble(
        ship: Vec<(String, String)>,
        debris: Vec<(String, String)>,
        explosion: Vec<(String, String)>,
        game_over: String,
    ) -> Result<(Self, Sprites), AssetError> {
        if ship.len() < 2 {
            return Err(AssetError::EmptyPool { kind: "rocket" });
        }
        if debris.is_empty() {
            return Err(AssetError::EmptyPool { kind: "debris" });
        }
        if explosion.is_empty() {
            return Err(AssetError::EmptyPool { kind: "explosion" });
        }

        let mut sheet = Self::default();
        let first = sheet.push(&ship[0].0, &ship[0].1)?;
        let second = sheet.push(&ship[1].0, &ship[1].1)?;
        let (a, b) = (sheet.frames[first.0 as usize].size(), sheet.frames[second.0 as usize].size());
        if a != b {
            return Err(AssetError::MismatchedShipFrames { first: a, second: b });
        }

        let debris = debris
            .iter()
            .map(|(name, text)| sheet.push(name, text))
            .collect::<Result<Vec<_>, _>>()?;
        let explosion = explosion
            .iter()
            .map(|(name, text)| sheet.push(name, text))
            .collect::<Result<Vec<_>, _>>()?;
        let game_over = sheet.push("game_over", &game_over)?;

        let sprites = Sprites {
            ship: [first, second],
            debris,
            explosion,
            game_over,
        };
        Ok((sheet, sprites))
    }

    fn push(&mut self, name: &str, text: &str) -> Result<ShapeId, AssetError> {
        self.frames.push(Frame::parse(name, text)?);
        Ok(ShapeId((self.frames.len() - 1) as u16))
    }

    pub fn frame(&self, shape: ShapeId) -> Option<&Frame> {
        self.frames.get(shape.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn read_text(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_frames(dir: &Path) -> Result<Vec<(String, String)>, AssetError> {
    let io_err = |source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(io_err)?;
    paths.retain(|p| p.is_file());
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok((name, read_text(path)?))
        })
        .collect()
}
