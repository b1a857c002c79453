//! Render-facing view of a grid session
//!
//! Provides screen-space snapshots of session state for a renderer.
//! This module is READ-ONLY - it never modifies session state.

pub mod viewport;

use glam::Vec2;

use crate::core::types::{Cell, EntityKind};
use crate::session::GridSession;

pub use viewport::{Viewport, ZoomBounds};

/// Screen-space snapshot of one occupied cell
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCell {
    pub cell: Cell,
    pub kind: EntityKind,
    /// Top-left corner on screen
    pub origin: Vec2,
    /// Edge length on screen
    pub size: f32,
    pub selected: bool,
}

/// Translucent preview of the fixture being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPreview {
    pub cell: Cell,
    pub kind: EntityKind,
    pub origin: Vec2,
    pub size: f32,
}

/// Collects all occupied cells into a reusable buffer, row-major.
/// Call this once per frame, passing the same buffer to avoid allocations.
pub fn collect_render_cells(session: &GridSession, buffer: &mut Vec<RenderCell>) {
    buffer.clear();

    let viewport = session.viewport();
    let selected = session.selection();

    for entity in session.entities() {
        let (origin, size) = viewport.cell_rect(entity.position);
        buffer.push(RenderCell {
            cell: entity.position,
            kind: entity.kind(),
            origin,
            size,
            // Blocked cells never carry the selection highlight
            selected: entity.kind().is_placeable() && selected == Some(&entity.id),
        });
    }

    buffer.sort_by_key(|c| (c.cell.y, c.cell.x));
}

/// Ghost preview for the current drag, if there is a valid target
pub fn ghost_preview(session: &GridSession) -> Option<GhostPreview> {
    let cell = session.preview_cell()?;
    let kind = session.dragged_kind()?;
    let (origin, size) = session.viewport().cell_rect(cell);
    Some(GhostPreview {
        cell,
        kind,
        origin,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_marks_selection() {
        let mut session = GridSession::with_seed(11);
        session.generate(6, 2, Vec2::new(240.0, 240.0));
        let free = (0..6)
            .flat_map(|y| (0..6).map(move |x| Cell::new(x, y)))
            .find(|c| session.entity_at(*c).is_none())
            .unwrap();
        let id = session.place(EntityKind::Light, free).unwrap();
        session.select(&id);

        let mut buffer = Vec::new();
        collect_render_cells(&session, &mut buffer);

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.iter().filter(|c| c.selected).count(), 1);
        assert!(buffer.iter().all(|c| (c.size - 40.0).abs() < 1e-6));
    }

    #[test]
    fn test_ghost_follows_preview() {
        let mut session = GridSession::with_seed(11);
        session.generate(6, 0, Vec2::new(240.0, 240.0));
        assert!(ghost_preview(&session).is_none());

        session.begin_palette_drag(EntityKind::AirReturn);
        session.pointer_move(Vec2::new(50.0, 10.0));

        let ghost = ghost_preview(&session).unwrap();
        assert_eq!(ghost.cell, Cell::new(1, 0));
        assert_eq!(ghost.kind, EntityKind::AirReturn);
        assert_eq!(ghost.origin, Vec2::new(40.0, 0.0));
    }
}
