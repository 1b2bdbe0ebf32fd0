//! World state module - the whole simulation in one struct
//!
//! Ties together the region registry, the grid, the player, the NPC roster and
//! the HUD text. The frame driver calls [`WorldState::step`] once per frame with
//! that frame's intent snapshot; renderers read the state through accessors.

use log::{debug, info, warn};

use crate::entity::{default_npcs, Npc, NpcRoster, Player};
use crate::grid::WorldGrid;
use crate::hud::Hud;
use crate::interaction::find_adjacent_npc_index;
use crate::movement::attempt_move;
use crate::region::{RegionInfo, RegionRegistry};
use crate::types::{Direction, IntentSnapshot};

/// What happened during one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Direction attempted this frame (None if no intent was held)
    pub direction: Option<Direction>,
    /// True if the player's position changed
    pub moved: bool,
    /// Roster index of the NPC greeted after the move
    pub encounter: Option<usize>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct WorldState {
    registry: RegionRegistry,
    grid: WorldGrid,
    player: Player,
    npcs: NpcRoster,
    hud: Hud,
}

impl WorldState {
    /// Assemble a world and initialize the HUD from the player's start tile.
    pub fn new(registry: RegionRegistry, grid: WorldGrid, player: Player, npcs: NpcRoster) -> Self {
        for (x, y, code) in grid.unresolved_cells(&registry) {
            warn!("tile ({x}, {y}) has unknown region {code}; drawing as sentinel");
        }

        let hud = Hud::for_region(registry.lookup(grid.region_at(player.x(), player.y())));
        info!(
            "world ready: {} regions, {} npcs, player at {:?}",
            registry.len(),
            npcs.len(),
            player.position()
        );

        Self {
            registry,
            grid,
            player,
            npcs,
            hud,
        }
    }

    /// Advance one frame: attempt at most one move, chosen by intent priority.
    pub fn step(&mut self, intent: IntentSnapshot) -> StepOutcome {
        let Some(direction) = intent.resolve() else {
            return StepOutcome::default();
        };
        let (dx, dy) = direction.delta();
        let (moved, encounter) = self.move_and_react(dx, dy);
        StepOutcome {
            direction: Some(direction),
            moved,
            encounter,
        }
    }

    /// Move the player by (dx, dy) if the destination is on the grid.
    ///
    /// A successful move refreshes the HUD from the new tile and scans for an
    /// adjacent NPC. A blocked move changes nothing.
    pub fn attempt_move(&mut self, dx: i8, dy: i8) -> bool {
        self.move_and_react(dx, dy).0
    }

    fn move_and_react(&mut self, dx: i8, dy: i8) -> (bool, Option<usize>) {
        if !attempt_move(&mut self.player, &self.grid, dx, dy) {
            return (false, None);
        }

        let (x, y) = self.player.position();
        let info = self.registry.lookup(self.grid.region_at(x, y));
        debug!("player -> ({x}, {y}) in {}", info.name);
        self.hud.show_region(info);

        let encounter = find_adjacent_npc_index(&self.player, &self.npcs);
        if let Some(i) = encounter {
            let npc = &self.npcs[i];
            info!("encounter: {} at {:?}", npc.name(), npc.position());
            self.hud.show_dialog(npc);
        }
        (true, encounter)
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Region display attributes at (x, y); sentinel off-grid.
    pub fn region_info_at(&self, x: i8, y: i8) -> &RegionInfo {
        self.registry.lookup(self.grid.region_at(x, y))
    }

    /// Region under the player.
    pub fn current_region(&self) -> &RegionInfo {
        self.region_info_at(self.player.x(), self.player.y())
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(
            RegionRegistry::default(),
            WorldGrid::default(),
            Player::default(),
            default_npcs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_hud_shows_start_tile() {
        let world = WorldState::default();
        assert_eq!(world.player().position(), (1, 1));
        assert_eq!(world.hud().region_name(), "Morocco");
        assert_eq!(world.hud().message().text(), "Spice markets and labyrinthine medinas.");
    }

    #[test]
    fn idle_step_does_nothing() {
        let mut world = WorldState::default();
        let out = world.step(IntentSnapshot::default());
        assert_eq!(out, StepOutcome::default());
        assert_eq!(world.player().position(), (1, 1));
    }

    #[test]
    fn blocked_move_keeps_dialog() {
        let mut world = WorldState::new(
            RegionRegistry::default(),
            WorldGrid::default(),
            Player::new(7, 0),
            default_npcs(),
        );
        // (8, 0) is directly above the Cairo Courier at (8, 1).
        assert!(world.attempt_move(1, 0));
        assert_eq!(
            world.hud().message().text(),
            "Cairo Courier: Desert winds whisper secrets of the Nile."
        );

        let before = world.hud().clone();
        let out = world.step(IntentSnapshot::default().with(Direction::Up));
        assert_eq!(out.direction, Some(Direction::Up));
        assert!(!out.moved);
        assert_eq!(out.encounter, None);
        assert_eq!(world.hud(), &before);
    }

    #[test]
    fn next_move_replaces_dialog_with_fact() {
        let mut world = WorldState::new(
            RegionRegistry::default(),
            WorldGrid::default(),
            Player::new(7, 0),
            default_npcs(),
        );
        assert!(world.attempt_move(1, 0));
        assert!(world.hud().message().is_dialog());

        let out = world.step(IntentSnapshot::default().with(Direction::Right));
        assert!(out.moved);
        assert_eq!(world.player().position(), (9, 0));
        assert_eq!(world.hud().region_name(), "Egypt");
        assert_eq!(world.hud().message().text(), "Home to the Nile River and pyramids.");
    }
}
