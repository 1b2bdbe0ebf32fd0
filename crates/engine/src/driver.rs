//! Frame driver: one simulation step and one full redraw per frame.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use crate::clock::FrameClock;
use crate::config::RunConfig;
use crate::core::{StepOutcome, WorldState};
use crate::input::{should_quit, IntentFlags};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::IntentSnapshot;

/// Owns the world and the view; knows nothing about terminals or clocks.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    world: WorldState,
    view: GameView,
    fb: FrameBuffer,
    frames: u64,
}

impl FrameDriver {
    pub fn new(world: WorldState) -> Self {
        Self {
            world,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            frames: 0,
        }
    }

    /// Run one frame: at most one move, then an unconditional redraw.
    pub fn tick(&mut self, intent: IntentSnapshot, viewport: Viewport) -> StepOutcome {
        let outcome = self.world.step(intent);
        self.view.render_into(&self.world, viewport, &mut self.fb);
        self.frames += 1;
        outcome
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// The frame drawn by the last tick.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Mutable frame for presenters that swap buffers.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(WorldState::default())
    }
}

/// Run the interactive loop until the player quits.
///
/// Between frames, key events are drained into the intent flags while
/// waiting for the next deadline. The terminal must already be entered.
pub fn run(
    config: &RunConfig,
    renderer: &mut TerminalRenderer,
    mut driver: FrameDriver,
) -> Result<()> {
    let started = Instant::now();
    let elapsed_ms = |now: Instant| now.duration_since(started).as_millis() as u64;

    let mut intents = IntentFlags::new().with_key_release_timeout_ms(config.key_release_timeout_ms);
    let mut clock = FrameClock::new(config.frame_interval(), started);
    info!("frame loop started ({} ms/frame)", config.frame_ms);

    loop {
        // Input until the frame is due.
        while event::poll(clock.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit after {} frames", clock.frames());
                        return Ok(());
                    }
                    intents.apply(key, elapsed_ms(Instant::now()));
                }
                Event::FocusLost => intents.clear(),
                Event::Resize(w, h) => {
                    debug!("terminal resized to {w}x{h}");
                    renderer.invalidate();
                }
                _ => {}
            }
        }

        // Frame.
        let now = Instant::now();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let intent = intents.snapshot(elapsed_ms(now));
        driver.tick(intent, Viewport::new(w, h));
        renderer.present(driver.frame_mut())?;
        clock.advance(now);
    }
}
