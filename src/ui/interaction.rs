//! Pointer gesture state machine
//!
//! Tracks the gesture in progress and derives the preview cell on every
//! pointer update. Transitions never touch occupancy directly: they return an
//! [`Effect`] that the owning session validates and applies.

use glam::Vec2;

use crate::core::types::{Cell, EntityId, EntityKind};
use crate::render::viewport::Viewport;
use crate::world::occupancy::OccupancyMap;

/// Gesture in progress
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Drag-to-pan. Pan is recomputed from the anchors, never accumulated.
    Panning { anchor: Vec2, anchor_pan: Vec2 },
    /// Dragging a new fixture in from the palette
    PlacingFromPalette { kind: EntityKind, preview: Option<Cell> },
    /// Dragging a fixture that is already on the board
    RelocatingExisting { entity_id: EntityId, preview: Option<Cell> },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Prospective drop/move target, if the pointer is over the board
    pub fn preview_cell(&self) -> Option<Cell> {
        match self {
            Interaction::PlacingFromPalette { preview, .. }
            | Interaction::RelocatingExisting { preview, .. } => *preview,
            _ => None,
        }
    }
}

/// What the board looks like to the state machine
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    pub grid_size: u32,
    pub viewport: &'a Viewport,
    pub occupancy: &'a OccupancyMap,
}

impl Surface<'_> {
    /// Cell under a screen point, or `None` if off the board
    #[inline]
    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        let (x, y) = self.viewport.screen_to_cell(point);
        Cell::from_signed(x, y, self.grid_size)
    }
}

/// Mutation requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Select(Option<EntityId>),
    SetPan(Vec2),
    Place { kind: EntityKind, cell: Cell },
    Move { entity_id: EntityId, cell: Cell },
}

/// Gesture state plus the externally injected palette drag signal
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    current: Interaction,
    drag_signal: Option<EntityKind>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Interaction {
        &self.current
    }

    /// Kind carried by an active palette drag, if any
    pub fn drag_signal(&self) -> Option<EntityKind> {
        self.drag_signal
    }

    /// External drag source started carrying `kind`
    pub fn begin_palette_drag(&mut self, kind: EntityKind) {
        self.drag_signal = Some(kind);
        if self.current.is_idle() {
            self.current = Interaction::PlacingFromPalette { kind, preview: None };
        }
    }

    /// External drag source dropped. Requests a placement at the preview cell.
    pub fn end_palette_drag(&mut self) -> Effect {
        self.drag_signal = None;
        match std::mem::take(&mut self.current) {
            Interaction::PlacingFromPalette {
                kind,
                preview: Some(cell),
            } => Effect::Place { kind, cell },
            Interaction::PlacingFromPalette { preview: None, .. } => Effect::None,
            other => {
                self.current = other;
                Effect::None
            }
        }
    }

    pub fn pointer_down(&mut self, point: Vec2, surface: &Surface<'_>) -> Effect {
        if !self.current.is_idle() {
            return Effect::None;
        }

        let grabbed = surface
            .cell_at(point)
            .and_then(|cell| surface.occupancy.get(cell))
            .filter(|entity| entity.kind().is_placeable());

        match grabbed {
            Some(entity) => {
                self.current = Interaction::RelocatingExisting {
                    entity_id: entity.id.clone(),
                    preview: Some(entity.position),
                };
                Effect::Select(Some(entity.id.clone()))
            }
            None => {
                self.current = Interaction::Panning {
                    anchor: point,
                    anchor_pan: surface.viewport.pan,
                };
                Effect::Select(None)
            }
        }
    }

    pub fn pointer_move(&mut self, point: Vec2, surface: &Surface<'_>) -> Effect {
        if self.current.is_idle() {
            if let Some(kind) = self.drag_signal {
                self.current = Interaction::PlacingFromPalette { kind, preview: None };
            }
        }

        match &mut self.current {
            Interaction::Idle => Effect::None,
            Interaction::Panning { anchor, anchor_pan } => {
                Effect::SetPan(point - *anchor + *anchor_pan)
            }
            Interaction::PlacingFromPalette { preview, .. }
            | Interaction::RelocatingExisting { preview, .. } => {
                *preview = surface.cell_at(point);
                Effect::None
            }
        }
    }

    /// Pointer released over the surface
    ///
    /// Ends panning and relocation. A palette drag ends through
    /// [`end_palette_drag`](Self::end_palette_drag) instead.
    pub fn pointer_up(&mut self) -> Effect {
        match std::mem::take(&mut self.current) {
            Interaction::RelocatingExisting {
                entity_id,
                preview: Some(cell),
            } => Effect::Move { entity_id, cell },
            Interaction::Panning { .. }
            | Interaction::Idle
            | Interaction::RelocatingExisting { preview: None, .. } => Effect::None,
            placing @ Interaction::PlacingFromPalette { .. } => {
                self.current = placing;
                Effect::None
            }
        }
    }

    /// Pointer left the tracked surface
    pub fn pointer_leave(&mut self) {
        match &mut self.current {
            Interaction::Panning { .. } => self.current = Interaction::Idle,
            Interaction::PlacingFromPalette { preview, .. }
            | Interaction::RelocatingExisting { preview, .. } => *preview = None,
            Interaction::Idle => {}
        }
    }

    /// Abandon any gesture without mutating the board
    pub fn cancel(&mut self) {
        self.current = Interaction::Idle;
        self.drag_signal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PlacedEntity;

    fn board() -> OccupancyMap {
        vec![
            PlacedEntity::new(EntityId::from("light-a"), EntityKind::Light, Cell::new(0, 0)),
            PlacedEntity::new(EntityId::blocked(Cell::new(1, 0)), EntityKind::Blocked, Cell::new(1, 0)),
        ]
        .into_iter()
        .collect()
    }

    fn surface<'a>(viewport: &'a Viewport, occupancy: &'a OccupancyMap) -> Surface<'a> {
        Surface {
            grid_size: 10,
            viewport,
            occupancy,
        }
    }

    #[test]
    fn test_pointer_down_on_fixture_starts_relocation() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();

        let effect = state.pointer_down(Vec2::new(10.0, 10.0), &surface(&view, &map));
        assert_eq!(effect, Effect::Select(Some(EntityId::from("light-a"))));
        assert!(matches!(state.current(), Interaction::RelocatingExisting { .. }));
    }

    #[test]
    fn test_pointer_down_on_blocked_cell_pans() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();

        let effect = state.pointer_down(Vec2::new(50.0, 10.0), &surface(&view, &map));
        assert_eq!(effect, Effect::Select(None));
        assert!(matches!(state.current(), Interaction::Panning { .. }));
    }

    #[test]
    fn test_panning_uses_anchor_not_deltas() {
        let view = Viewport::new(Vec2::new(100.0, 100.0), 1.0);
        let map = OccupancyMap::new();
        let mut state = InteractionState::new();

        state.pointer_down(Vec2::new(500.0, 500.0), &surface(&view, &map));
        state.pointer_move(Vec2::new(510.0, 505.0), &surface(&view, &map));
        let effect = state.pointer_move(Vec2::new(520.0, 490.0), &surface(&view, &map));

        assert_eq!(effect, Effect::SetPan(Vec2::new(120.0, 90.0)));
    }

    #[test]
    fn test_preview_cleared_off_board() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();
        state.begin_palette_drag(EntityKind::AirSupply);

        state.pointer_move(Vec2::new(85.0, 45.0), &surface(&view, &map));
        assert_eq!(state.current().preview_cell(), Some(Cell::new(2, 1)));

        state.pointer_move(Vec2::new(-5.0, 45.0), &surface(&view, &map));
        assert_eq!(state.current().preview_cell(), None);

        state.pointer_move(Vec2::new(405.0, 45.0), &surface(&view, &map));
        assert_eq!(state.current().preview_cell(), None);
        assert_eq!(state.end_palette_drag(), Effect::None);
        assert!(state.current().is_idle());
    }

    #[test]
    fn test_palette_drop_requests_placement() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();
        state.begin_palette_drag(EntityKind::Light);
        state.pointer_move(Vec2::new(125.0, 165.0), &surface(&view, &map));

        assert_eq!(
            state.end_palette_drag(),
            Effect::Place {
                kind: EntityKind::Light,
                cell: Cell::new(3, 4)
            }
        );
        assert!(state.current().is_idle());
        assert_eq!(state.drag_signal(), None);
    }

    #[test]
    fn test_drag_signal_picked_up_on_move() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();

        state.pointer_down(Vec2::new(300.0, 300.0), &surface(&view, &map));
        state.begin_palette_drag(EntityKind::SmokeDetector);
        assert!(matches!(state.current(), Interaction::Panning { .. }));

        state.pointer_up();
        state.pointer_move(Vec2::new(45.0, 45.0), &surface(&view, &map));
        assert_eq!(
            state.current(),
            &Interaction::PlacingFromPalette {
                kind: EntityKind::SmokeDetector,
                preview: Some(Cell::new(1, 1)),
            }
        );
    }

    #[test]
    fn test_release_requests_move() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();

        state.pointer_down(Vec2::new(10.0, 10.0), &surface(&view, &map));
        state.pointer_move(Vec2::new(90.0, 90.0), &surface(&view, &map));
        assert_eq!(
            state.pointer_up(),
            Effect::Move {
                entity_id: EntityId::from("light-a"),
                cell: Cell::new(2, 2)
            }
        );
        assert!(state.current().is_idle());
    }

    #[test]
    fn test_leave_cancels_panning_only() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();

        state.pointer_down(Vec2::new(300.0, 300.0), &surface(&view, &map));
        state.pointer_leave();
        assert!(state.current().is_idle());

        state.pointer_down(Vec2::new(10.0, 10.0), &surface(&view, &map));
        state.pointer_leave();
        assert!(matches!(
            state.current(),
            Interaction::RelocatingExisting { preview: None, .. }
        ));
        assert_eq!(state.pointer_up(), Effect::None);
    }

    #[test]
    fn test_cancel_discards_everything() {
        let (view, map) = (Viewport::default(), board());
        let mut state = InteractionState::new();
        state.begin_palette_drag(EntityKind::Light);
        state.pointer_move(Vec2::new(125.0, 165.0), &surface(&view, &map));

        state.cancel();
        assert!(state.current().is_idle());
        assert_eq!(state.drag_signal(), None);
        assert_eq!(state.end_palette_drag(), Effect::None);
    }
}
