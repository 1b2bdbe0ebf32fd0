//! Movement and interaction tests

use border_blaster::core::{
    attempt_direction, attempt_move, default_npcs, find_adjacent_npc, Npc, Player, WorldGrid,
};
use border_blaster::types::{Direction, RegionCode};

#[test]
fn test_move_inside_grid() {
    let grid = WorldGrid::default();
    let mut player = Player::new(1, 1);

    assert!(attempt_move(&mut player, &grid, 0, -1));
    assert_eq!(player.position(), (1, 0));
}

#[test]
fn test_moves_off_every_edge_are_rejected() {
    let grid = WorldGrid::default();

    let mut player = Player::new(0, 0);
    assert!(!attempt_move(&mut player, &grid, -1, 0));
    assert!(!attempt_move(&mut player, &grid, 0, -1));
    assert_eq!(player.position(), (0, 0));

    let mut player = Player::new(9, 9);
    assert!(!attempt_direction(&mut player, &grid, Direction::Right));
    assert!(!attempt_direction(&mut player, &grid, Direction::Down));
    assert_eq!(player.position(), (9, 9));
}

#[test]
fn test_sentinel_tiles_are_walkable() {
    let grid = WorldGrid::default();
    let mut player = Player::new(1, 2);

    assert!(attempt_direction(&mut player, &grid, Direction::Left));
    assert_eq!(grid.region_at(player.x(), player.y()), RegionCode::SENTINEL);
}

#[test]
fn test_holding_a_direction_walks_to_the_edge() {
    let grid = WorldGrid::default();
    let mut player = Player::new(1, 1);

    let moves = (0..20)
        .filter(|_| attempt_direction(&mut player, &grid, Direction::Right))
        .count();
    assert_eq!(moves, 8);
    assert_eq!(player.position(), (9, 1));
}

#[test]
fn test_adjacency_is_exactly_one_step() {
    let npcs = default_npcs();

    // Marrakesh DJ stands at (2, 2).
    for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
        let npc = find_adjacent_npc(&Player::new(x, y), &npcs).unwrap();
        assert_eq!(npc.name(), "Marrakesh DJ");
    }

    // Same tile and diagonal neighbours do not trigger.
    assert!(find_adjacent_npc(&Player::new(2, 2), &npcs).is_none());
    assert!(find_adjacent_npc(&Player::new(3, 3), &npcs).is_none());
}

#[test]
fn test_first_adjacent_npc_in_roster_order_wins() {
    let npcs = [
        Npc::new("First", 4, 5, RegionCode::SENTINEL, "one"),
        Npc::new("Second", 6, 5, RegionCode::SENTINEL, "two"),
    ];
    let npc = find_adjacent_npc(&Player::new(5, 5), &npcs).unwrap();
    assert_eq!(npc.name(), "First");
    assert_eq!(npc.greeting(), "First: one");
}
