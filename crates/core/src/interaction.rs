//! Interaction detector - finds the NPC the player is standing next to

use crate::entity::{Npc, Player};

/// First NPC (in roster order) exactly one cardinal step from the player.
///
/// Sharing the player's tile (distance 0) does not count.
pub fn find_adjacent_npc<'a>(player: &Player, npcs: &'a [Npc]) -> Option<&'a Npc> {
    npcs.iter()
        .find(|npc| npc.distance_to(player.x(), player.y()) == 1)
}

/// Roster index of [`find_adjacent_npc`]'s result.
pub fn find_adjacent_npc_index(player: &Player, npcs: &[Npc]) -> Option<usize> {
    npcs.iter()
        .position(|npc| npc.distance_to(player.x(), player.y()) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionCode;

    fn npc(name: &'static str, x: i8, y: i8) -> Npc {
        Npc::new(name, x, y, RegionCode::SENTINEL, "...")
    }

    #[test]
    fn all_four_sides_trigger() {
        let npcs = [npc("n", 5, 5)];
        for (x, y) in [(5, 4), (5, 6), (4, 5), (6, 5)] {
            let p = Player::new(x, y);
            assert_eq!(find_adjacent_npc(&p, &npcs).map(Npc::name), Some("n"));
        }
    }

    #[test]
    fn same_tile_and_diagonal_do_not_trigger() {
        let npcs = [npc("n", 5, 5)];
        for (x, y) in [(5, 5), (4, 4), (6, 6), (5, 7), (3, 5)] {
            let p = Player::new(x, y);
            assert!(find_adjacent_npc(&p, &npcs).is_none(), "({x}, {y})");
        }
    }

    #[test]
    fn earliest_roster_entry_wins() {
        let npcs = [npc("far", 0, 0), npc("east", 3, 2), npc("west", 1, 2)];
        let p = Player::new(2, 2);
        assert_eq!(find_adjacent_npc(&p, &npcs).map(Npc::name), Some("east"));
        assert_eq!(find_adjacent_npc_index(&p, &npcs), Some(1));
    }

    #[test]
    fn empty_roster_finds_nothing() {
        assert!(find_adjacent_npc(&Player::default(), &[]).is_none());
    }
}
