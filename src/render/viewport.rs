//! Viewport transform between screen pixels and grid cells.
//!
//! Screen origin is the top-left of the editing surface, Y increases downward.
//! The board's top-left corner sits at `pan`; each cell is `CELL_SIZE * zoom`
//! pixels on a side.

use glam::Vec2;

use crate::core::config::{CELL_SIZE, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::core::types::Cell;

/// Allowed zoom range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f32,
    pub max: f32,
}

impl ZoomBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self { min: 0.1, max: 5.0 }
    }
}

/// Current pan offset and zoom factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen position of the board's top-left corner
    pub pan: Vec2,
    /// Magnification (1.0 = `CELL_SIZE` pixels per cell)
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(pan: Vec2, zoom: f32) -> Self {
        Self { pan, zoom }
    }

    /// Viewport at zoom 1.0 with the whole board centered
    pub fn centered(grid_size: u32, viewport_size: Vec2) -> Self {
        Self {
            pan: center_grid(grid_size, viewport_size),
            zoom: 1.0,
        }
    }

    /// Edge length of one cell on screen
    #[inline]
    pub fn cell_edge(&self) -> f32 {
        CELL_SIZE * self.zoom
    }

    pub fn screen_to_cell(&self, point: Vec2) -> (i64, i64) {
        screen_to_cell(point, self.pan, self.zoom)
    }

    pub fn cell_to_screen(&self, cell: Cell) -> Vec2 {
        cell_to_screen(cell, self.pan, self.zoom)
    }

    /// Screen rectangle covered by a cell, as (top-left, edge length)
    pub fn cell_rect(&self, cell: Cell) -> (Vec2, f32) {
        (self.cell_to_screen(cell), self.cell_edge())
    }

    /// Zoom by `factor`, keeping the grid point under `anchor` fixed on screen
    pub fn zoom_toward(&mut self, anchor: Vec2, factor: f32, bounds: ZoomBounds) {
        let (pan, zoom) = zoom_around_point(self.pan, self.zoom, anchor, factor, bounds);
        self.pan = pan;
        self.zoom = zoom;
    }
}

/// Convert a screen point to (possibly out-of-range) cell coordinates.
///
/// No clamping: callers check the result against the grid size.
#[inline]
pub fn screen_to_cell(point: Vec2, pan: Vec2, zoom: f32) -> (i64, i64) {
    let edge = CELL_SIZE * zoom;
    let x = ((point.x - pan.x) / edge).floor() as i64;
    let y = ((point.y - pan.y) / edge).floor() as i64;
    (x, y)
}

/// Screen position of a cell's top-left corner
#[inline]
pub fn cell_to_screen(cell: Cell, pan: Vec2, zoom: f32) -> Vec2 {
    let edge = CELL_SIZE * zoom;
    Vec2::new(pan.x + cell.x as f32 * edge, pan.y + cell.y as f32 * edge)
}

/// Zoom around a screen anchor (zoom-to-cursor).
///
/// The new zoom is clamped before the pan is recomputed, so repeatedly
/// zooming past a bound leaves the viewport unchanged.
pub fn zoom_around_point(
    pan: Vec2,
    zoom: f32,
    anchor: Vec2,
    factor: f32,
    bounds: ZoomBounds,
) -> (Vec2, f32) {
    let grid_point = (anchor - pan) / (CELL_SIZE * zoom);
    let new_zoom = bounds.clamp(zoom * factor);
    let new_pan = anchor - grid_point * (CELL_SIZE * new_zoom);
    (new_pan, new_zoom)
}

/// Pan offset that centers a `grid_size` board in the viewport at zoom 1.0.
///
/// Negative when the board is larger than the viewport; the board is cropped.
pub fn center_grid(grid_size: u32, viewport_size: Vec2) -> Vec2 {
    let board = grid_size as f32 * CELL_SIZE;
    (viewport_size - Vec2::splat(board)) / 2.0
}

/// Zoom factor for one wheel step. Scrolling down zooms out.
pub fn wheel_factor(delta_y: f32) -> f32 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT
    } else {
        WHEEL_ZOOM_IN
    }
}
