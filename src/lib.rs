//! Fixture Grid - grid state and interaction engine for fixture layout

pub mod core;
pub mod render;
pub mod session;
pub mod ui;
pub mod world;

pub use crate::core::{Cell, ConfigError, EntityId, EntityKind, GridConfig, PlacedEntity};
pub use render::{Viewport, ZoomBounds};
pub use session::GridSession;
pub use ui::{InputEvent, Interaction, KeyCommand};
pub use world::{ExportLayout, OccupancyMap};
