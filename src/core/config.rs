//! Game configuration
//!
//! Collects the tunable setup parameters in one place. Values can come from
//! a TOML file, CLI flags, or the defaults, which match the classic game
//! (10 by 12 arena, 50 zurts).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GameError, Result};
use crate::core::types::{MAX_COLS, MAX_ROWS, MAX_ZURTS, WALL_DENSITY};

/// Configuration for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena height in cells (1 to 20)
    pub rows: u32,

    /// Arena width in cells (1 to 20)
    pub cols: u32,

    /// Number of zurts to spawn (0 to 100)
    pub zurts: usize,

    /// Fraction of empty cells turned into walls at setup (0.0 to 1.0)
    ///
    /// At the default 0.13, a 10x12 arena with 50 zurts gets 8 walls,
    /// enough to create choke points without boxing the player in.
    pub wall_density: f64,

    /// Random seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 12,
            zurts: 50,
            wall_density: WALL_DENSITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file. Missing fields fall back to
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.rows > MAX_ROWS || self.cols < 1 || self.cols > MAX_COLS {
            return Err(GameError::InvalidConfig(format!(
                "arena size {} by {} is outside 1..={} by 1..={}",
                self.rows, self.cols, MAX_ROWS, MAX_COLS
            )));
        }
        if self.zurts > MAX_ZURTS {
            return Err(GameError::InvalidConfig(format!(
                "zurt count {} exceeds the maximum of {}",
                self.zurts, MAX_ZURTS
            )));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(GameError::InvalidConfig(format!(
                "wall density {} must be within [0, 1]",
                self.wall_density
            )));
        }
        // One cell is reserved for the player
        if ((self.rows * self.cols) as usize) < self.zurts + 1 {
            return Err(GameError::InvalidConfig(format!(
                "a {} by {} arena is too small to hold a player and {} zurts",
                self.rows, self.cols, self.zurts
            )));
        }
        Ok(())
    }
}
