//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A discrete grid cell, addressed by column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// True if the cell lies inside `[0, grid_size)` on both axes
    #[inline]
    pub fn in_bounds(&self, grid_size: u32) -> bool {
        self.x < grid_size && self.y < grid_size
    }

    /// Build a cell from signed coordinates, rejecting anything off the board
    pub fn from_signed(x: i64, y: i64, grid_size: u32) -> Option<Self> {
        let size = i64::from(grid_size);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self::new(x as u32, y as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Light,
    AirSupply,
    AirReturn,
    SmokeDetector,
    /// Obstacle generated with the board; never user-placeable
    Blocked,
}

impl EntityKind {
    /// Palette kinds, in palette order
    pub const PLACEABLE: [EntityKind; 4] = [
        EntityKind::Light,
        EntityKind::AirSupply,
        EntityKind::AirReturn,
        EntityKind::SmokeDetector,
    ];

    pub fn is_placeable(&self) -> bool {
        !matches!(self, EntityKind::Blocked)
    }

    /// Wire name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Light => "light",
            EntityKind::AirSupply => "air_supply",
            EntityKind::AirReturn => "air_return",
            EntityKind::SmokeDetector => "smoke_detector",
            EntityKind::Blocked => "blocked",
        }
    }

    /// Human-readable name shown in the palette
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Light => "Light",
            EntityKind::AirSupply => "Air Supply",
            EntityKind::AirReturn => "Air Return",
            EntityKind::SmokeDetector => "Smoke Detector",
            EntityKind::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(EntityKind::Light),
            "air_supply" => Ok(EntityKind::AirSupply),
            "air_return" => Ok(EntityKind::AirReturn),
            "smoke_detector" => Ok(EntityKind::SmokeDetector),
            "blocked" => Ok(EntityKind::Blocked),
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

/// Opaque identifier for a placed entity, stable across moves
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Fresh id for a user-placed entity
    pub fn fresh(kind: EntityKind) -> Self {
        Self(format!("{}-{}", kind.as_str(), Uuid::new_v4()))
    }

    /// Deterministic id for a generated blocked cell
    pub fn blocked(cell: Cell) -> Self {
        Self(format!("blocked-{}-{}", cell.x, cell.y))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An entity occupying exactly one cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: EntityId,
    kind: EntityKind,
    pub position: Cell,
}

impl PlacedEntity {
    pub fn new(id: EntityId, kind: EntityKind, position: Cell) -> Self {
        Self { id, kind, position }
    }

    /// Kind is fixed at creation
    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}
