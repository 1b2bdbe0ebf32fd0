//! Movement intent flags for terminal environments.
//!
//! One boolean per physical binding, set on press and cleared on release. The
//! frame driver reads them once per frame through [`IntentFlags::snapshot`].
//!
//! Many terminals never emit key release events, and some only emit them for
//! a subset of keys. Until a release has been observed for a key, its hold
//! expires after a timeout measured from its last press or repeat, so a single
//! tap does not turn into a permanent hold.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::debug;

use crate::map::{direction_key, DirectionKey};
use crate::types::{IntentSnapshot, KEY_RELEASE_TIMEOUT_MS};

const KEY_COUNT: usize = DirectionKey::ALL.len();

/// Live key flags owned by the input side of the frame loop.
#[derive(Debug, Clone)]
pub struct IntentFlags {
    held: [bool; KEY_COUNT],
    last_seen_ms: [u64; KEY_COUNT],
    key_release_timeout_ms: u32,
    /// Keys whose release the terminal has delivered at least once.
    releases_seen: [bool; KEY_COUNT],
}

impl IntentFlags {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_COUNT],
            last_seen_ms: [0; KEY_COUNT],
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            releases_seen: [false; KEY_COUNT],
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// True once the terminal has delivered a release event for `key`.
    pub fn releases_reported(&self, key: DirectionKey) -> bool {
        self.releases_seen[key.index()]
    }

    /// Mark a key as held (press or auto-repeat).
    pub fn press(&mut self, key: DirectionKey, now_ms: u64) {
        let i = key.index();
        self.held[i] = true;
        self.last_seen_ms[i] = now_ms;
    }

    pub fn release(&mut self, key: DirectionKey) {
        let i = key.index();
        if !self.releases_seen[i] {
            debug!("terminal reports releases for {key:?}; disabling its release timeout");
            self.releases_seen[i] = true;
        }
        self.held[i] = false;
    }

    /// Release every key (e.g. when the terminal loses focus).
    pub fn clear(&mut self) {
        self.held = [false; KEY_COUNT];
    }

    pub fn is_held(&self, key: DirectionKey) -> bool {
        self.held[key.index()]
    }

    /// Apply a terminal key event. Returns true if it was a movement key.
    pub fn apply(&mut self, event: KeyEvent, now_ms: u64) -> bool {
        let Some(key) = direction_key(event.code) else {
            return false;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key, now_ms),
            KeyEventKind::Release => self.release(key),
        }
        true
    }

    /// Read the flags for this frame as logical directions.
    ///
    /// Expires stale holds first for keys whose release was never reported.
    pub fn snapshot(&mut self, now_ms: u64) -> IntentSnapshot {
        let timeout = u64::from(self.key_release_timeout_ms);
        for i in 0..KEY_COUNT {
            if self.held[i]
                && !self.releases_seen[i]
                && now_ms.saturating_sub(self.last_seen_ms[i]) > timeout
            {
                self.held[i] = false;
            }
        }

        DirectionKey::ALL
            .iter()
            .filter(|key| self.held[key.index()])
            .fold(IntentSnapshot::default(), |snap, key| snap.with(key.direction()))
    }
}

impl Default for IntentFlags {
    fn default() -> Self {
        Self::new()
    }
}
