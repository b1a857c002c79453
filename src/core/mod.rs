pub mod config;
pub mod error;
pub mod types;

pub use config::GridConfig;
pub use error::{ConfigError, ExportError};
pub use types::{Cell, EntityId, EntityKind, PlacedEntity};
