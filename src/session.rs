//! Grid session: the aggregate owning board state for one editing surface
//!
//! All mutation goes through methods here. Nothing in a session fails at
//! runtime: off-board or occupied targets and unknown ids are silent no-ops.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::{clamp_blocked_count, GridConfig, MAX_GRID_SIZE};
use crate::core::error::ConfigError;
use crate::core::types::{Cell, EntityId, EntityKind, PlacedEntity};
use crate::render::viewport::{wheel_factor, Viewport, ZoomBounds};
use crate::ui::input::{InputEvent, KeyCommand};
use crate::ui::interaction::{Effect, Interaction, InteractionState, Surface};
use crate::world::export::ExportLayout;
use crate::world::generation::generate_blocked;
use crate::world::occupancy::OccupancyMap;

/// Board, view, selection and gesture state for one editing surface
#[derive(Debug, Clone)]
pub struct GridSession {
    grid_size: u32,
    blocked_count: u32,
    zoom_bounds: ZoomBounds,
    occupancy: OccupancyMap,
    viewport: Viewport,
    selection: Option<EntityId>,
    interaction: InteractionState,
    rng: ChaCha8Rng,
}

impl GridSession {
    /// Create an empty session from an already validated config
    pub fn new(config: &GridConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated grid config");

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            grid_size: config.grid_size,
            blocked_count: config.effective_blocked_count(),
            zoom_bounds: ZoomBounds::new(config.zoom_min, config.zoom_max),
            occupancy: OccupancyMap::new(),
            viewport: Viewport::default(),
            selection: None,
            interaction: InteractionState::new(),
            rng,
        }
    }

    /// Validate a config, then create a session from it
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Session with default settings and a fixed generation seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&GridConfig {
            seed: Some(seed),
            ..GridConfig::default()
        })
    }

    // === OUTBOUND STATE ===

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn blocked_count(&self) -> u32 {
        self.blocked_count
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.zoom_bounds
    }

    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    pub fn entities(&self) -> impl Iterator<Item = &PlacedEntity> {
        self.occupancy.iter()
    }

    pub fn entity_at(&self, cell: Cell) -> Option<&PlacedEntity> {
        self.occupancy.get(cell)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> Option<&EntityId> {
        self.selection.as_ref()
    }

    pub fn selected_entity(&self) -> Option<&PlacedEntity> {
        self.selection.as_ref().and_then(|id| self.occupancy.find(id))
    }

    pub fn interaction(&self) -> &Interaction {
        self.interaction.current()
    }

    /// Cell to highlight as the drop/move target
    pub fn preview_cell(&self) -> Option<Cell> {
        self.interaction.current().preview_cell()
    }

    /// Kind to draw as the ghost preview
    pub fn dragged_kind(&self) -> Option<EntityKind> {
        match self.interaction.current() {
            Interaction::PlacingFromPalette { kind, .. } => Some(*kind),
            Interaction::RelocatingExisting { entity_id, .. } => {
                self.occupancy.find(entity_id).map(|e| e.kind())
            }
            _ => None,
        }
    }

    /// Placed fixtures in export form
    pub fn export(&self) -> ExportLayout {
        ExportLayout::placeable(self.grid_size, &self.occupancy)
    }

    // === CONFIGURATION ===

    /// Grid size used by the next generation
    pub fn set_grid_size(&mut self, grid_size: u32) {
        debug_assert!((1..=MAX_GRID_SIZE).contains(&grid_size));
        self.grid_size = grid_size.clamp(1, MAX_GRID_SIZE);
    }

    /// Blocked count used by the next generation, clamped to the board
    pub fn set_blocked_count(&mut self, count: u32) {
        self.blocked_count = clamp_blocked_count(count, self.grid_size);
    }

    // === BOARD ===

    /// Replace the board with a freshly generated obstacle layout
    pub fn generate(&mut self, grid_size: u32, blocked_count: u32, viewport_size: Vec2) {
        self.set_grid_size(grid_size);
        self.set_blocked_count(blocked_count);
        self.regenerate(viewport_size);
    }

    /// Regenerate with the current grid size and blocked count
    pub fn regenerate(&mut self, viewport_size: Vec2) {
        self.occupancy = generate_blocked(self.grid_size, self.blocked_count, &mut self.rng);
        self.selection = None;
        self.interaction.cancel();
        self.viewport = Viewport::centered(self.grid_size, viewport_size);

        tracing::info!(
            "Generated {}x{} grid with {} blocked cells",
            self.grid_size,
            self.grid_size,
            self.occupancy.blocked_count()
        );
    }

    /// Place a new fixture if the target is on the board and empty
    pub fn place(&mut self, kind: EntityKind, cell: Cell) -> Option<EntityId> {
        if !kind.is_placeable() {
            tracing::debug!("Ignoring placement of non-placeable kind {}", kind);
            return None;
        }
        if !cell.in_bounds(self.grid_size) || self.occupancy.contains(cell) {
            tracing::debug!("Discarded {} drop on {}", kind, cell);
            return None;
        }

        let id = EntityId::fresh(kind);
        self.occupancy.put(PlacedEntity::new(id.clone(), kind, cell));
        Some(id)
    }

    /// Move a fixture if the target is on the board and empty
    pub fn relocate(&mut self, id: &EntityId, cell: Cell) -> bool {
        let movable = self
            .occupancy
            .find(id)
            .is_some_and(|e| e.kind().is_placeable());

        if !movable || !cell.in_bounds(self.grid_size) || self.occupancy.contains(cell) {
            tracing::debug!("Move of {} to {} cancelled", id, cell);
            return false;
        }

        self.occupancy.move_to(id, cell)
    }

    /// Remove every fixture, keeping blocked cells
    pub fn clear_placeable(&mut self) {
        self.occupancy.clear_placeable();
        self.selection = None;
    }

    // === SELECTION ===

    /// Select a fixture. Blocked cells and unknown ids are ignored.
    pub fn select(&mut self, id: &EntityId) -> bool {
        let selectable = self
            .occupancy
            .find(id)
            .is_some_and(|e| e.kind().is_placeable());
        if selectable {
            self.selection = Some(id.clone());
        }
        selectable
    }

    pub fn select_none(&mut self) {
        self.selection = None;
    }

    /// Remove the selected fixture, if any
    pub fn delete_selected(&mut self) -> Option<PlacedEntity> {
        if !self.interaction.current().is_idle() {
            return None;
        }
        let id = self.selection.take()?;
        self.occupancy.remove(&id)
    }

    // === VIEW ===

    pub fn set_zoom(&mut self, anchor: Vec2, factor: f32) {
        self.viewport.zoom_toward(anchor, factor, self.zoom_bounds);
    }

    /// Apply one wheel notch around `anchor`
    pub fn wheel(&mut self, anchor: Vec2, delta_y: f32) {
        self.set_zoom(anchor, wheel_factor(delta_y));
    }

    /// Zoom 1.0 with the board centered in the viewport
    pub fn reset_view(&mut self, viewport_size: Vec2) {
        self.viewport = Viewport::centered(self.grid_size, viewport_size);
    }

    /// Zoom 1.0 with the board's corner at the screen origin
    pub fn reset_zoom(&mut self) {
        self.viewport = Viewport::default();
    }

    // === GESTURES ===

    pub fn begin_palette_drag(&mut self, kind: EntityKind) {
        if kind.is_placeable() {
            self.interaction.begin_palette_drag(kind);
        }
    }

    pub fn end_palette_drag(&mut self) {
        let effect = self.interaction.end_palette_drag();
        self.apply(effect);
    }

    pub fn pointer_down(&mut self, point: Vec2) {
        let surface = Surface {
            grid_size: self.grid_size,
            viewport: &self.viewport,
            occupancy: &self.occupancy,
        };
        let effect = self.interaction.pointer_down(point, &surface);
        self.apply(effect);
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        let surface = Surface {
            grid_size: self.grid_size,
            viewport: &self.viewport,
            occupancy: &self.occupancy,
        };
        let effect = self.interaction.pointer_move(point, &surface);
        self.apply(effect);
    }

    pub fn pointer_up(&mut self) {
        let effect = self.interaction.pointer_up();
        self.apply(effect);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    pub fn cancel(&mut self) {
        self.interaction.cancel();
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Generate {
                grid_size,
                blocked_count,
                viewport_size,
            } => self.generate(grid_size, blocked_count, viewport_size),
            InputEvent::BeginPaletteDrag(kind) => self.begin_palette_drag(kind),
            InputEvent::EndPaletteDrag => self.end_palette_drag(),
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Cancel | InputEvent::Key(KeyCommand::Cancel) => self.cancel(),
            InputEvent::Select(id) => {
                self.select(&id);
            }
            InputEvent::SelectNone => self.select_none(),
            InputEvent::DeleteSelected | InputEvent::Key(KeyCommand::Delete) => {
                self.delete_selected();
            }
            InputEvent::ClearPlaceable => self.clear_placeable(),
            InputEvent::Zoom { anchor, factor } => self.set_zoom(anchor, factor),
            InputEvent::Wheel { anchor, delta_y } => self.wheel(anchor, delta_y),
            InputEvent::ResetView(size) => self.reset_view(size),
            InputEvent::ResetZoom => self.reset_zoom(),
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Select(selection) => self.selection = selection,
            Effect::SetPan(pan) => self.viewport.pan = pan,
            Effect::Place { kind, cell } => {
                if let Some(id) = self.place(kind, cell) {
                    tracing::debug!("Placed {} at {}", id, cell);
                }
            }
            Effect::Move { entity_id, cell } => {
                if self.relocate(&entity_id, cell) {
                    tracing::debug!("Moved {} to {}", entity_id, cell);
                }
            }
        }
    }
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}
