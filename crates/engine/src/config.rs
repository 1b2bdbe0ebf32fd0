//! Runtime configuration for the frame loop.
//!
//! These settings tune the host loop only; they never change game rules.

use std::time::Duration;

use crate::types::{FRAME_MS, KEY_RELEASE_TIMEOUT_MS};

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Interval between frame ticks in milliseconds.
    pub frame_ms: u32,
    /// Auto-release delay for terminals that never report key releases.
    pub key_release_timeout_ms: u32,
    /// Append logs to this file; no logger is installed when unset.
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    ///
    /// - `BORDER_BLASTER_FRAME_MS`: frame interval (default 16, must be > 0)
    /// - `BORDER_BLASTER_KEY_RELEASE_MS`: key auto-release delay (default 150)
    /// - `BORDER_BLASTER_LOG`: log file path (default: no logging)
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_ms = lookup("BORDER_BLASTER_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let key_release_timeout_ms = lookup("BORDER_BLASTER_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_timeout_ms);

        let log_path = lookup("BORDER_BLASTER_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            frame_ms,
            key_release_timeout_ms,
            log_path,
        }
    }

    pub fn with_frame_ms(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<String>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_ms))
    }
}
