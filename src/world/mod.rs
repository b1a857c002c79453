//! Board state: occupancy, obstacle generation and export

pub mod export;
pub mod generation;
pub mod occupancy;

pub use export::{ExportLayout, ExportRecord};
pub use generation::{generate_blocked, sample_blocked_cells};
pub use occupancy::OccupancyMap;
