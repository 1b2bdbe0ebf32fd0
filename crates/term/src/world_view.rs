//! WorldView: draws the world map into a fixed-size framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every call redraws the whole scene in a fixed order: clear, tiles, grid
//! lines, NPC markers, player marker. Later layers cover earlier ones, so
//! markers are never obscured by grid lines and the player is drawn over NPCs.

use crate::core::WorldState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    GRID_HEIGHT, GRID_WIDTH, NPC_LABEL, NPC_MARKER_RADIUS, PLAYER_LABEL, PLAYER_MARKER_RADIUS,
    TILE_COLS, TILE_ROWS,
};

/// NPC marker fill (#2ecc71)
pub const NPC_COLOR: Rgb = Rgb::new(0x2e, 0xcc, 0x71);

/// Marker label color
pub const LABEL_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Grid lines darken the tile underneath by this percentage.
pub const GRID_LINE_SHADE: u8 = 25;

/// Renders the tile map, grid overlay and entity markers.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldView {
    /// Tile width in terminal columns.
    tile_cols: u16,
    /// Tile height in terminal rows.
    tile_rows: u16,
    npc_radius: f32,
    player_radius: f32,
}

impl Default for WorldView {
    fn default() -> Self {
        Self {
            tile_cols: TILE_COLS,
            tile_rows: TILE_ROWS,
            npc_radius: NPC_MARKER_RADIUS,
            player_radius: PLAYER_MARKER_RADIUS,
        }
    }
}

impl WorldView {
    /// Surface dimensions `(columns, rows)`.
    pub fn surface_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.tile_cols,
            GRID_HEIGHT as u16 * self.tile_rows,
        )
    }

    /// Render the world into `surface`, resizing it to [`WorldView::surface_size`].
    ///
    /// Reusing one surface across frames keeps this allocation-free.
    pub fn render_into(&self, world: &WorldState, surface: &mut FrameBuffer) {
        let (w, h) = self.surface_size();
        surface.resize(w, h);

        // 1. Clear.
        surface.clear(CellStyle::default().into_cell(' '));

        // 2. Tiles.
        let registry = world.registry();
        for (x, y, code) in world.grid().tiles() {
            let color = registry.lookup(code).color;
            let (px, py) = self.tile_origin(x as u8, y as u8);
            surface.fill_rect(
                px,
                py,
                self.tile_cols,
                self.tile_rows,
                ' ',
                CellStyle::new(color, color),
            );
        }

        // 3. Grid lines at every tile boundary; the far edges clip.
        for i in 0..=GRID_WIDTH as u16 {
            surface.stroke_vline(i * self.tile_cols, 0, h, GRID_LINE_SHADE);
        }
        for j in 0..=GRID_HEIGHT as u16 {
            surface.stroke_hline(0, j * self.tile_rows, w, GRID_LINE_SHADE);
        }

        // 4. NPCs.
        for npc in world.npcs() {
            self.draw_marker(
                surface,
                npc.x(),
                npc.y(),
                self.npc_radius,
                NPC_COLOR,
                NPC_LABEL,
                false,
            );
        }

        // 5. Player.
        let player = world.player();
        self.draw_marker(
            surface,
            player.x(),
            player.y(),
            self.player_radius,
            player.color(),
            PLAYER_LABEL,
            true,
        );
    }

    /// Convenience helper that allocates a new surface.
    pub fn render(&self, world: &WorldState) -> FrameBuffer {
        let (w, h) = self.surface_size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(world, &mut fb);
        fb
    }

    /// Top-left surface cell of tile (x, y).
    pub fn tile_origin(&self, x: u8, y: u8) -> (u16, u16) {
        (u16::from(x) * self.tile_cols, u16::from(y) * self.tile_rows)
    }

    /// Surface-space center of tile (x, y).
    pub fn tile_center(&self, x: u8, y: u8) -> (f32, f32) {
        (
            (f32::from(x) + 0.5) * f32::from(self.tile_cols),
            (f32::from(y) + 0.5) * f32::from(self.tile_rows),
        )
    }

    fn draw_marker(
        &self,
        surface: &mut FrameBuffer,
        x: i8,
        y: i8,
        radius: f32,
        color: Rgb,
        label: &str,
        bold: bool,
    ) {
        // Off-grid entities have no tile to stand on.
        if x < 0 || y < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let (cx, cy) = self.tile_center(x as u8, y as u8);
        surface.fill_circle(cx, cy, radius, color);
        surface.put_str_centered(cx as u16, cy as u16, label, LABEL_COLOR, bold);
    }
}
