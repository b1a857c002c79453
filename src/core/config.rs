//! Grid configuration with documented constants
//!
//! Raw user input is validated here, before it reaches a session. Everything
//! past this boundary assumes a sane grid size and blocked count.

use serde::Deserialize;
use std::path::Path;

use super::error::{ConfigError, Result};

/// Edge length of one cell in screen pixels at zoom 1.0
pub const CELL_SIZE: f32 = 40.0;

/// Physical edge length of one cell, in meters
///
/// Used by exporters to turn cell coordinates into ceiling positions.
pub const METERS_PER_CELL: f32 = 0.6;

/// Largest accepted grid edge, in cells
pub const MAX_GRID_SIZE: u32 = 200;

/// Zoom factor applied per wheel notch toward the viewer
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Zoom factor applied per wheel notch away from the viewer
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

/// Configuration for a grid session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of the square board, in cells
    pub grid_size: u32,

    /// Number of blocked cells requested on the next generation
    ///
    /// Clamped to `grid_size²` when the board is generated, so asking for more
    /// cells than exist simply blocks the whole board.
    pub blocked_count: u32,

    /// Smallest allowed zoom factor
    pub zoom_min: f32,

    /// Largest allowed zoom factor
    pub zoom_max: f32,

    /// Seed for blocked-cell generation
    ///
    /// `None` seeds from OS entropy. A fixed seed makes every generated board
    /// reproducible, which tests rely on.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            blocked_count: 5,
            zoom_min: 0.1,
            zoom_max: 5.0,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidGridSize(self.grid_size.to_string()));
        }

        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max && self.zoom_max.is_finite()) {
            return Err(ConfigError::InvalidZoomBounds {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Blocked count actually used for generation
    pub fn effective_blocked_count(&self) -> u32 {
        clamp_blocked_count(self.blocked_count, self.grid_size)
    }
}

/// Clamp a blocked count to the number of cells on the board
pub fn clamp_blocked_count(count: u32, grid_size: u32) -> u32 {
    let cells = u64::from(grid_size) * u64::from(grid_size);
    u64::from(count).min(cells) as u32
}

/// Parse a grid size typed by the user
pub fn parse_grid_size(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(size) if size > 0 && size <= i64::from(MAX_GRID_SIZE) => Ok(size as u32),
        _ => Err(ConfigError::InvalidGridSize(trimmed.to_string())),
    }
}

/// Parse a blocked-cell count typed by the user
///
/// Negative values are rejected. Large values are accepted and clamped later.
pub fn parse_blocked_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(count) if count >= 0 => Ok(count.min(i64::from(u32::MAX)) as u32),
        _ => Err(ConfigError::InvalidBlockedCount(trimmed.to_string())),
    }
}
