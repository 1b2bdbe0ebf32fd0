//! HUD text state
//!
//! Holds the two strings the HUD shows: the current region's name and a
//! message line. The message is the region fact, or an NPC greeting that
//! supersedes the fact until the player's next move.

use crate::entity::Npc;
use crate::region::RegionInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudMessage {
    /// Fact text of the current region
    Fact(&'static str),
    /// `"<name>: <dialog>"` from an adjacent NPC
    Dialog(String),
}

impl HudMessage {
    pub fn text(&self) -> &str {
        match self {
            HudMessage::Fact(s) => s,
            HudMessage::Dialog(s) => s,
        }
    }

    pub fn is_dialog(&self) -> bool {
        matches!(self, HudMessage::Dialog(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    region_name: &'static str,
    message: HudMessage,
}

impl Hud {
    pub fn for_region(info: &RegionInfo) -> Self {
        Self {
            region_name: info.name,
            message: HudMessage::Fact(info.fact),
        }
    }

    /// Show a region's name and fact (clears any dialog).
    pub fn show_region(&mut self, info: &RegionInfo) {
        self.region_name = info.name;
        self.message = HudMessage::Fact(info.fact);
    }

    /// Replace the message with an NPC greeting.
    pub fn show_dialog(&mut self, npc: &Npc) {
        self.message = HudMessage::Dialog(npc.greeting());
    }

    pub fn region_name(&self) -> &'static str {
        self.region_name
    }

    pub fn message(&self) -> &HudMessage {
        &self.message
    }
}
