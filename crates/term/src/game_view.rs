//! GameView: composes the map surface and the HUD into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::WorldState;
use crate::fb::{CellStyle, FrameBuffer};
use crate::hud_view::{HudView, HUD_HEIGHT};
use crate::world_view::WorldView;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Full-screen view: map on top, one blank row, HUD below.
#[derive(Debug, Clone)]
pub struct GameView {
    world: WorldView,
    hud: HudView,
    /// Map surface reused across frames.
    surface: FrameBuffer,
}

impl Default for GameView {
    fn default() -> Self {
        let world = WorldView::default();
        let (w, h) = world.surface_size();
        Self {
            world,
            hud: HudView,
            surface: FrameBuffer::new(w, h),
        }
    }
}

impl GameView {
    /// Size of the composed frame (map + gap + HUD).
    pub fn frame_size(&self) -> (u16, u16) {
        let (w, h) = self.world.surface_size();
        (w, h + 1 + HUD_HEIGHT)
    }

    /// Render the world into an existing framebuffer sized to `viewport`.
    ///
    /// Frames larger than the viewport are clipped at the right and bottom.
    pub fn render_into(&mut self, world: &WorldState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.world.render_into(world, &mut self.surface);
        fb.blit(&self.surface, start_x, start_y);

        let hud_y = start_y
            .saturating_add(self.surface.height())
            .saturating_add(1);
        self.hud.render_into(world, fb, start_x, hud_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, world: &WorldState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }
}
