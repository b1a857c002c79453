//! Authoritative cell occupancy
//!
//! One entity per cell, keyed by position for O(1) lookup. The map does not
//! reject overwrites: callers check `get` before a user-initiated `put`.

use ahash::AHashMap;

use crate::core::types::{Cell, EntityId, EntityKind, PlacedEntity};

/// Sparse mapping from cell to the entity occupying it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyMap {
    cells: AHashMap<Cell, PlacedEntity>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self {
            cells: AHashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&PlacedEntity> {
        self.cells.get(&cell)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Insert at `entity.position`, replacing whatever was there
    pub fn put(&mut self, entity: PlacedEntity) -> Option<PlacedEntity> {
        self.cells.insert(entity.position, entity)
    }

    /// Find an entity by id (linear scan)
    pub fn find(&self, id: &EntityId) -> Option<&PlacedEntity> {
        self.cells.values().find(|e| &e.id == id)
    }

    /// Remove the entity with this id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &EntityId) -> Option<PlacedEntity> {
        let cell = self.find(id)?.position;
        self.cells.remove(&cell)
    }

    /// Move an entity to `target`, keeping its id and kind.
    ///
    /// Overwrites anything at `target`; returns false for unknown ids.
    pub fn move_to(&mut self, id: &EntityId, target: Cell) -> bool {
        match self.remove(id) {
            Some(mut entity) => {
                entity.position = target;
                self.put(entity);
                true
            }
            None => false,
        }
    }

    /// Remove every placeable entity, leaving blocked cells in place
    pub fn clear_placeable(&mut self) {
        self.cells.retain(|_, e| !e.kind().is_placeable());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedEntity> {
        self.cells.values()
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.cells.values().filter(|e| e.kind() == kind).count()
    }

    pub fn blocked_count(&self) -> usize {
        self.count_kind(EntityKind::Blocked)
    }

    pub fn placeable_count(&self) -> usize {
        self.len() - self.blocked_count()
    }
}

impl FromIterator<PlacedEntity> for OccupancyMap {
    fn from_iter<I: IntoIterator<Item = PlacedEntity>>(iter: I) -> Self {
        let mut map = Self::new();
        for entity in iter {
            map.put(entity);
        }
        map
    }
}
