//! Export layout for placed fixtures
//!
//! A flat record per entity with both cell and physical coordinates, suitable
//! for writing out as JSON. Derived 1:1 from session state.

use serde::{Deserialize, Serialize};

use crate::core::config::METERS_PER_CELL;
use crate::core::error::ExportError;
use crate::core::types::{EntityKind, PlacedEntity};
use crate::world::occupancy::OccupancyMap;

/// One exported entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub id: String,
    pub kind: EntityKind,
    pub cell_x: u32,
    pub cell_y: u32,
    pub meters_x: f32,
    pub meters_y: f32,
}

impl From<&PlacedEntity> for ExportRecord {
    fn from(entity: &PlacedEntity) -> Self {
        Self {
            id: entity.id.to_string(),
            kind: entity.kind(),
            cell_x: entity.position.x,
            cell_y: entity.position.y,
            meters_x: entity.position.x as f32 * METERS_PER_CELL,
            meters_y: entity.position.y as f32 * METERS_PER_CELL,
        }
    }
}

/// Whole-board export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLayout {
    pub grid_size: u32,
    pub meters_per_cell: f32,
    pub entities: Vec<ExportRecord>,
}

impl ExportLayout {
    /// Placed fixtures only, in row-major order
    pub fn placeable(grid_size: u32, occupancy: &OccupancyMap) -> Self {
        Self::build(grid_size, occupancy, |e| e.kind().is_placeable())
    }

    /// Fixtures and blocked cells, in row-major order
    pub fn with_blocked(grid_size: u32, occupancy: &OccupancyMap) -> Self {
        Self::build(grid_size, occupancy, |_| true)
    }

    fn build(grid_size: u32, occupancy: &OccupancyMap, keep: impl Fn(&PlacedEntity) -> bool) -> Self {
        let mut placed: Vec<&PlacedEntity> = occupancy.iter().filter(|e| keep(*e)).collect();
        placed.sort_by_key(|e| (e.position.y, e.position.x));

        Self {
            grid_size,
            meters_per_cell: METERS_PER_CELL,
            entities: placed.into_iter().map(ExportRecord::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
