//! Movement controller - one bounded cardinal step at a time

use log::trace;

use crate::entity::Player;
use crate::grid::WorldGrid;
use crate::types::Direction;

/// Try to move the player by (dx, dy).
///
/// The step is committed only if the destination lies inside the grid.
/// Returns true if the player's position changed. Zero and diagonal deltas are
/// rejected, and each component is limited to one tile.
pub fn attempt_move(player: &mut Player, grid: &WorldGrid, dx: i8, dy: i8) -> bool {
    let (dx, dy) = (dx.signum(), dy.signum());
    if (dx == 0) == (dy == 0) {
        return false;
    }

    let nx = player.x() + dx;
    let ny = player.y() + dy;
    if !grid.in_bounds(nx, ny) {
        trace!("move to ({nx}, {ny}) blocked by grid edge");
        return false;
    }

    player.set_position(nx, ny);
    true
}

/// Try to move the player one tile in `dir`.
pub fn attempt_direction(player: &mut Player, grid: &WorldGrid, dir: Direction) -> bool {
    let (dx, dy) = dir.delta();
    attempt_move(player, grid, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_grid_commits() {
        let grid = WorldGrid::default();
        let mut p = Player::new(1, 1);
        assert!(attempt_move(&mut p, &grid, 0, -1));
        assert_eq!(p.position(), (1, 0));
    }

    #[test]
    fn step_off_grid_is_rejected() {
        let grid = WorldGrid::default();
        let mut p = Player::new(0, 0);
        assert!(!attempt_move(&mut p, &grid, -1, 0));
        assert!(!attempt_move(&mut p, &grid, 0, -1));
        assert_eq!(p.position(), (0, 0));

        let mut p = Player::new(9, 9);
        assert!(!attempt_direction(&mut p, &grid, Direction::Right));
        assert!(!attempt_direction(&mut p, &grid, Direction::Down));
        assert_eq!(p.position(), (9, 9));
    }

    #[test]
    fn zero_and_diagonal_deltas_do_nothing() {
        let grid = WorldGrid::default();
        let mut p = Player::new(4, 4);
        assert!(!attempt_move(&mut p, &grid, 0, 0));
        assert!(!attempt_move(&mut p, &grid, 1, 1));
        assert_eq!(p.position(), (4, 4));
    }

    #[test]
    fn oversized_delta_moves_one_tile() {
        let grid = WorldGrid::default();
        let mut p = Player::new(4, 4);
        assert!(attempt_move(&mut p, &grid, 3, 0));
        assert_eq!(p.position(), (5, 4));
    }

    #[test]
    fn movement_ignores_tile_contents() {
        // Empty (void) tiles are walkable; only the grid edge blocks.
        let grid = WorldGrid::empty();
        let mut p = Player::new(0, 0);
        assert!(attempt_direction(&mut p, &grid, Direction::Right));
        assert_eq!(p.position(), (1, 0));
    }
}
