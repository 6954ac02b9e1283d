//! Game configuration.
//!
//! Every section and field is optional in the TOML file; missing values fall
//! back to the constants in `tui_debris_types`.
//!
//! ```toml
//! seed = 42
//!
//! [timing]
//! tick_secs = 0.1
//!
//! [[difficulty.steps]]
//! from_year = 1961
//! delay_secs = 2.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tui_debris_types::*;

use crate::difficulty::DifficultySchedule;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub playfield: PlayfieldConfig,
    #[serde(default)]
    pub stars: StarConfig,
    #[serde(default)]
    pub ship: ShipConfig,
    #[serde(default)]
    pub debris: DebrisConfig,
    #[serde(default)]
    pub projectile: ProjectileConfig,
    #[serde(default)]
    pub years: YearConfig,
    #[serde(default)]
    pub difficulty: DifficultyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: f64,
    #[serde(default = "default_year_secs")]
    pub year_secs: f64,
}

fn default_tick_secs() -> f64 { TICK_SECS }
fn default_year_secs() -> f64 { YEAR_SECS }

impl Default for TimingConfig {
    fn default() -> Self {
        Self { tick_secs: default_tick_secs(), year_secs: default_year_secs() }
    }
}

/// Playfield size. `None` means "use the terminal size".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayfieldConfig {
    #[serde(default)]
    pub rows: Option<u16>,
    #[serde(default)]
    pub cols: Option<u16>,
    #[serde(default = "default_border")]
    pub border: u16,
}

fn default_border() -> u16 { BORDER }

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self { rows: None, cols: None, border: default_border() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarConfig {
    #[serde(default = "default_star_count")]
    pub count: usize,
    #[serde(default = "default_star_symbols")]
    pub symbols: String,
}

fn default_star_count() -> usize { STAR_COUNT }
fn default_star_symbols() -> String { STAR_SYMBOLS.to_string() }

impl Default for StarConfig {
    fn default() -> Self {
        Self { count: default_star_count(), symbols: default_star_symbols() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipConfig {
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_control_secs")]
    pub control_secs: f64,
    #[serde(default = "default_frame_secs")]
    pub frame_secs: f64,
}

fn default_acceleration() -> f64 { SHIP_ACCELERATION }
fn default_max_speed() -> f64 { SHIP_MAX_SPEED }
fn default_damping() -> f64 { SHIP_DAMPING }
fn default_control_secs() -> f64 { SHIP_CONTROL_SECS }
fn default_frame_secs() -> f64 { SHIP_FRAME_SECS }

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            acceleration: default_acceleration(),
            max_speed: default_max_speed(),
            damping: default_damping(),
            control_secs: default_control_secs(),
            frame_secs: default_frame_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisConfig {
    #[serde(default = "default_fall_speed")]
    pub fall_speed: f64,
    /// Number of independent spawn directors
    #[serde(default = "default_directors")]
    pub directors: usize,
    #[serde(default = "default_idle_recheck_secs")]
    pub idle_recheck_secs: f64,
}

fn default_fall_speed() -> f64 { DEBRIS_FALL_SPEED }
fn default_directors() -> usize { 1 }
fn default_idle_recheck_secs() -> f64 { IDLE_RECHECK_SECS }

impl Default for DebrisConfig {
    fn default() -> Self {
        Self {
            fall_speed: default_fall_speed(),
            directors: default_directors(),
            idle_recheck_secs: default_idle_recheck_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileConfig {
    #[serde(default = "default_projectile_speed")]
    pub speed: f64,
}

fn default_projectile_speed() -> f64 { PROJECTILE_SPEED }

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self { speed: default_projectile_speed() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearConfig {
    #[serde(default = "default_start_year")]
    pub start_year: u32,
    #[serde(default = "default_plasma_gun_year")]
    pub plasma_gun_year: u32,
}

fn default_start_year() -> u32 { START_YEAR }
fn default_plasma_gun_year() -> u32 { PLASMA_GUN_YEAR }

impl Default for YearConfig {
    fn default() -> Self {
        Self { start_year: default_start_year(), plasma_gun_year: default_plasma_gun_year() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyStep {
    pub from_year: u32,
    pub delay_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyConfig {
    #[serde(default = "default_steps")]
    pub steps: Vec<DifficultyStep>,
    #[serde(default = "default_min_delay_secs")]
    pub min_delay_secs: f64,
}

fn default_steps() -> Vec<DifficultyStep> {
    DIFFICULTY_STEPS
        .iter()
        .map(|&(from_year, delay_secs)| DifficultyStep { from_year, delay_secs })
        .collect()
}
fn default_min_delay_secs() -> f64 { MIN_SPAWN_DELAY_SECS }

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self { steps: default_steps(), min_delay_secs: default_min_delay_secs() }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `TUI_DEBRIS_SEED` and `TUI_DEBRIS_ASSETS` style overrides.
    ///
    /// `lookup` is `std::env::var(..).ok()` in the binary and a map in tests.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(seed) = lookup("TUI_DEBRIS_SEED") {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid("TUI_DEBRIS_SEED", e.to_string()))?;
            self.seed = Some(seed);
        }
        if let Some(dir) = lookup("TUI_DEBRIS_ASSETS") {
            if !dir.trim().is_empty() {
                self.assets_dir = Some(PathBuf::from(dir));
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.timing.tick_secs;
        if !(tick > 0.0 && tick.is_finite()) {
            return Err(ConfigError::invalid("timing.tick_secs", "must be positive and finite"));
        }
        let year = self.timing.year_secs;
        if !(year > 0.0 && year.is_finite()) {
            return Err(ConfigError::invalid("timing.year_secs", "must be positive and finite"));
        }
        if !(0.0..1.0).contains(&self.ship.damping) {
            return Err(ConfigError::invalid("ship.damping", "must be in [0, 1)"));
        }
        if !(self.ship.max_speed > 0.0) {
            return Err(ConfigError::invalid("ship.max_speed", "must be positive"));
        }
        if !(self.debris.fall_speed > 0.0) {
            return Err(ConfigError::invalid("debris.fall_speed", "must be positive"));
        }
        if !(self.projectile.speed > 0.0) {
            return Err(ConfigError::invalid("projectile.speed", "must be positive"));
        }
        if self.stars.count > 0 && self.stars.symbols.is_empty() {
            return Err(ConfigError::invalid("stars.symbols", "no glyphs to draw stars with"));
        }
        self.schedule()?;
        Ok(())
    }

    pub fn schedule(&self) -> Result<DifficultySchedule, ConfigError> {
        DifficultySchedule::new(
            self.difficulty
                .steps
                .iter()
                .map(|s| (s.from_year, s.delay_secs))
                .collect(),
            self.difficulty.min_delay_secs,
        )
    }
}
