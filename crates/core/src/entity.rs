//! Entity state - the player token and the stationary NPC roster

use arrayvec::ArrayVec;

use crate::types::{
    RegionCode, Rgb, GRID_HEIGHT, GRID_WIDTH, MAX_NPCS, PLAYER_START_X, PLAYER_START_Y,
};

/// Default player marker color (#34495e)
pub const PLAYER_COLOR: Rgb = Rgb::new(0x34, 0x49, 0x5e);

/// The player token.
///
/// The position is always inside the grid: construction clamps it, and only
/// the movement controller changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    x: i8,
    y: i8,
    color: Rgb,
}

impl Player {
    /// Place a player, clamping the tile into the grid.
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.clamp(0, GRID_WIDTH as i8 - 1),
            y: y.clamp(0, GRID_HEIGHT as i8 - 1),
            color: PLAYER_COLOR,
        }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub(crate) fn set_position(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y)
    }
}

/// A stationary non-player character.
///
/// `region` is informational; it is not checked against the tile the NPC
/// stands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    name: &'static str,
    x: i8,
    y: i8,
    region: RegionCode,
    dialog: &'static str,
}

impl Npc {
    pub const fn new(
        name: &'static str,
        x: i8,
        y: i8,
        region: RegionCode,
        dialog: &'static str,
    ) -> Self {
        Self {
            name,
            x,
            y,
            region,
            dialog,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn region(&self) -> RegionCode {
        self.region
    }

    pub fn dialog(&self) -> &'static str {
        self.dialog
    }

    /// Manhattan distance from this NPC to tile (x, y)
    pub fn distance_to(&self, x: i8, y: i8) -> u16 {
        let dx = (i16::from(self.x) - i16::from(x)).unsigned_abs();
        let dy = (i16::from(self.y) - i16::from(y)).unsigned_abs();
        dx + dy
    }

    /// HUD line shown when the player steps next to this NPC.
    ///
    /// # Examples
    ///
    /// ```
    /// use border_blaster_core::Npc;
    /// use border_blaster_types::RegionCode;
    ///
    /// let npc = Npc::new("Guide", 0, 0, RegionCode::SENTINEL, "Hello!");
    /// assert_eq!(npc.greeting(), "Guide: Hello!");
    /// ```
    pub fn greeting(&self) -> String {
        format!("{}: {}", self.name, self.dialog)
    }
}

/// Fixed-order NPC list; order breaks ties between equally adjacent NPCs.
pub type NpcRoster = ArrayVec<Npc, MAX_NPCS>;

/// The starter roster.
pub fn default_npcs() -> NpcRoster {
    [
        Npc::new(
            "Cairo Courier",
            8,
            1,
            RegionCode::new(*b"EG"),
            "Desert winds whisper secrets of the Nile.",
        ),
        Npc::new(
            "Marrakesh DJ",
            2,
            2,
            RegionCode::new(*b"MA"),
            "Spinning pop hits and serving mint tea refills!",
        ),
        Npc::new(
            "Serengeti Guide",
            5,
            5,
            RegionCode::new(*b"TZ"),
            "Lions ahead! Well, plushy lion mascots for now.",
        ),
        Npc::new(
            "Nairobi Hacker",
            6,
            3,
            RegionCode::new(*b"KE"),
            "Building apps that track flamingo dance parties.",
        ),
        Npc::new(
            "Cape Town Surfer",
            8,
            8,
            RegionCode::new(*b"ZA"),
            "Ready to ride the data wave and real waves.",
        ),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_construction_clamps_into_grid() {
        assert_eq!(Player::new(-3, 4).position(), (0, 4));
        assert_eq!(Player::new(12, 99).position(), (9, 9));
        assert_eq!(Player::default().position(), (PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(Player::default().color(), PLAYER_COLOR);
    }

    #[test]
    fn manhattan_distance() {
        let npc = Npc::new("N", 2, 2, RegionCode::SENTINEL, "hi");
        assert_eq!(npc.distance_to(2, 2), 0);
        assert_eq!(npc.distance_to(2, 1), 1);
        assert_eq!(npc.distance_to(3, 3), 2);
        assert_eq!(npc.distance_to(-1, 9), 10);
    }

    #[test]
    fn default_roster_order() {
        let npcs = default_npcs();
        let names: Vec<_> = npcs.iter().map(Npc::name).collect();
        assert_eq!(
            names,
            [
                "Cairo Courier",
                "Marrakesh DJ",
                "Serengeti Guide",
                "Nairobi Hacker",
                "Cape Town Surfer"
            ]
        );
        assert_eq!(npcs[1].position(), (2, 2));
        assert_eq!(npcs[1].region().as_str(), "MA");
    }
}
